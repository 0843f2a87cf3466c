//! View rendering for the schema-driven form: one control per field in schema
//! order, followed by the submit and reset actions.

use yew::prelude::*;

use super::fields::field_control;
use super::messages::Msg;
use super::state::DynamicForm;

pub fn view(form: &DynamicForm, ctx: &Context<DynamicForm>) -> Html {
    let link = ctx.link();
    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Submit
    });

    html! {
        <form class="form-card" {onsubmit} novalidate={true}>
            { for form.schema.fields().iter().map(|field| field_control(form, field, link)) }
            <div class="form-actions">
                <button
                    type="button"
                    class="btn secondary"
                    onclick={link.callback(|_| Msg::Reset)}
                    disabled={form.submitting}
                >
                    { "Reset" }
                </button>
                <button type="submit" class="btn" disabled={form.submitting}>
                    { if form.submitting { "Submitting..." } else { "Submit" } }
                </button>
            </div>
        </form>
    }
}
