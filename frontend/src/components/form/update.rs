//! Update function for the schema-driven form.
//!
//! Every value change re-runs the engine for that field only, so messages
//! follow the user as they type. Submit runs the whole engine first and only
//! posts a clean record; the server's verdict is still authoritative and its
//! messages replace the local ones.

use chrono::Local;
use common::validation::{validate, validate_field};
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api::{self, ApiError};
use crate::helpers::show_toast;

use super::helpers::{default_values, toggle_option};
use super::messages::Msg;
use super::state::DynamicForm;

pub fn update(form: &mut DynamicForm, ctx: &Context<DynamicForm>, msg: Msg) -> bool {
    match msg {
        Msg::SetValue(field, value) => {
            match value {
                Some(value) => form.values.insert(field.clone(), value),
                None => form.values.remove(&field),
            };
            form.touched.insert(field.clone());
            revalidate(form, &field);
            true
        }
        Msg::ToggleOption { field, option } => {
            let options = form
                .schema
                .field(&field)
                .map(|f| f.kind.options().to_vec())
                .unwrap_or_default();
            let next = toggle_option(form.values.get(&field), &option, &options);
            form.values.insert(field.clone(), next);
            form.touched.insert(field.clone());
            revalidate(form, &field);
            true
        }
        Msg::Touch(field) => {
            let newly = form.touched.insert(field.clone());
            revalidate(form, &field);
            newly
        }
        Msg::Submit => {
            if form.submitting {
                return false;
            }
            form.touch_all();
            let verdict = validate(&form.schema, &form.values);
            form.errors = verdict.errors;
            if !verdict.is_valid {
                show_toast("Please fix the highlighted fields.");
                return true;
            }

            form.submitting = true;
            let record = form.values.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                match api::create_submission(&record).await {
                    Ok(created) => link.send_message(Msg::Submitted(created)),
                    Err(ApiError::Rejected(errors)) => link.send_message(Msg::Rejected(errors)),
                    Err(err) => link.send_message(Msg::SubmitFailed(err.to_string())),
                }
            });
            true
        }
        Msg::Submitted(created) => {
            form.submitting = false;
            form.values = default_values(&form.schema);
            form.errors = Default::default();
            form.touched.clear();
            ctx.props().on_submitted.emit(created.id);
            true
        }
        Msg::Rejected(errors) => {
            form.submitting = false;
            let unknown: Vec<String> = errors
                .iter()
                .filter(|(name, _)| form.schema.field(name).is_none())
                .map(|(_, message)| message.to_string())
                .collect();
            if !unknown.is_empty() {
                show_toast(&unknown.join(" "));
            }
            form.touch_all();
            form.errors = errors;
            true
        }
        Msg::SubmitFailed(reason) => {
            form.submitting = false;
            gloo_console::error!("Submission failed:", reason.clone());
            show_toast(&format!("Could not save the submission: {}", reason));
            true
        }
        Msg::Reset => {
            form.values = default_values(&form.schema);
            form.errors = Default::default();
            form.touched.clear();
            true
        }
    }
}

fn revalidate(form: &mut DynamicForm, field: &str) {
    let today = Local::now().date_naive();
    match validate_field(&form.schema, &form.values, field, today) {
        Some(message) => form.errors.insert(field, message),
        None => form.errors.remove(field),
    }
}
