//! Schema-driven form: root module wiring the Yew `Component` implementation
//! with submodules for state, update logic, view rendering, and helpers.
//!
//! Responsibilities
//! - Re-export selected types (`Msg`, `DynamicFormProps`, `DynamicForm`).
//! - Provide the `Component` implementation that delegates to `update::update` and `view::view`.
//! - Reset the values whenever the parent hands over a different schema.

use yew::prelude::*;

mod fields;
mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::DynamicFormProps;
pub use state::DynamicForm;

impl Component for DynamicForm {
    type Message = Msg;
    type Properties = DynamicFormProps;

    fn create(ctx: &Context<Self>) -> Self {
        DynamicForm::new(&ctx.props().schema)
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().schema != old_props.schema {
            *self = DynamicForm::new(&ctx.props().schema);
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
