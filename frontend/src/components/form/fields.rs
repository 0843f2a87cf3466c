//! One renderer per field variant. The `match` is exhaustive so a new variant
//! cannot be added to the schema model without a control here.

use common::model::form_schema::{FieldDefinition, FieldKind};
use serde_json::Value;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::html::Scope;
use yew::prelude::*;

use super::helpers::{display_value, number_value, text_value};
use super::messages::Msg;
use super::state::DynamicForm;

pub fn field_control(form: &DynamicForm, field: &FieldDefinition, link: &Scope<DynamicForm>) -> Html {
    let name = field.name.clone();
    let value = form.values.get(&field.name);
    let error = form.visible_error(&field.name);
    let input_id = format!("field-{}", field.name);

    let control = match &field.kind {
        FieldKind::Text { validations } => {
            let onblur = touch(link, &name);
            html! {
                <input
                    id={input_id.clone()}
                    type="text"
                    value={display_value(value)}
                    minlength={validations.min_length.map(|n| n.to_string())}
                    maxlength={validations.max_length.map(|n| n.to_string())}
                    oninput={link.callback(move |e: InputEvent| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        Msg::SetValue(name.clone(), text_value(input.value()))
                    })}
                    {onblur}
                />
            }
        }
        FieldKind::Number { validations } => {
            let onblur = touch(link, &name);
            html! {
                <input
                    id={input_id.clone()}
                    type="number"
                    value={display_value(value)}
                    min={validations.min.map(|n| n.to_string())}
                    max={validations.max.map(|n| n.to_string())}
                    oninput={link.callback(move |e: InputEvent| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        Msg::SetValue(name.clone(), number_value(&input.value()))
                    })}
                    {onblur}
                />
            }
        }
        FieldKind::Select { options } => {
            let current = display_value(value);
            html! {
                <select
                    id={input_id.clone()}
                    onchange={link.callback(move |e: Event| {
                        let select: HtmlSelectElement = e.target_unchecked_into();
                        Msg::SetValue(name.clone(), text_value(select.value()))
                    })}
                >
                    if !field.required {
                        <option value="" selected={current.is_empty()}>{ "Select..." }</option>
                    }
                    { for options.iter().map(|option| html! {
                        <option value={option.clone()} selected={*option == current}>{ option.clone() }</option>
                    }) }
                </select>
            }
        }
        FieldKind::MultiSelect { options, .. } => {
            let selected: Vec<&str> = value
                .and_then(Value::as_array)
                .map(|items| items.iter().filter_map(Value::as_str).collect())
                .unwrap_or_default();
            html! {
                <div class="option-list" id={input_id.clone()}>
                    { for options.iter().map(|option| {
                        let field = name.clone();
                        let picked = option.clone();
                        html! {
                            <label>
                                <input
                                    type="checkbox"
                                    checked={selected.contains(&option.as_str())}
                                    onchange={link.callback(move |_| Msg::ToggleOption {
                                        field: field.clone(),
                                        option: picked.clone(),
                                    })}
                                />
                                { option.clone() }
                            </label>
                        }
                    }) }
                </div>
            }
        }
        FieldKind::Date { .. } => {
            let onblur = touch(link, &name);
            html! {
                <input
                    id={input_id.clone()}
                    type="date"
                    value={display_value(value)}
                    onchange={link.callback(move |e: Event| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        Msg::SetValue(name.clone(), text_value(input.value()))
                    })}
                    {onblur}
                />
            }
        }
        FieldKind::Textarea { validations } => {
            let onblur = touch(link, &name);
            let text = display_value(value);
            let counter = validations
                .max_length
                .map(|max| format!("{} / {}", text.chars().count(), max));
            html! {
                <>
                    <textarea
                        id={input_id.clone()}
                        rows="4"
                        value={text}
                        oninput={link.callback(move |e: InputEvent| {
                            let input: HtmlTextAreaElement = e.target_unchecked_into();
                            Msg::SetValue(name.clone(), text_value(input.value()))
                        })}
                        {onblur}
                    />
                    if let Some(counter) = counter {
                        <span class="field-hint">{ counter }</span>
                    }
                </>
            }
        }
        FieldKind::Switch => html! {
            <label>
                <input
                    id={input_id.clone()}
                    type="checkbox"
                    checked={value == Some(&Value::Bool(true))}
                    onchange={link.callback(move |e: Event| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        Msg::SetValue(name.clone(), Some(Value::Bool(input.checked())))
                    })}
                />
                { "Yes" }
            </label>
        },
    };

    html! {
        <div class={classes!("form-field", error.is_some().then_some("invalid"))}>
            <label for={input_id}>
                { field.label.clone() }
                if field.required {
                    <span class="required">{ "*" }</span>
                }
            </label>
            { control }
            if let Some(message) = error {
                <span class="field-error">{ message }</span>
            }
        </div>
    }
}

fn touch(link: &Scope<DynamicForm>, name: &str) -> Callback<FocusEvent> {
    let name = name.to_string();
    link.callback(move |_| Msg::Touch(name.clone()))
}
