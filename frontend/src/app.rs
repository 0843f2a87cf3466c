//! Application shell: loads the form schema once and switches between the
//! form and the submissions table.

use std::rc::Rc;

use common::model::form_schema::FormSchema;
use yew::platform::spawn_local;
use yew::html::Scope;
use yew::prelude::*;

use crate::api;
use crate::components::form::DynamicForm;
use crate::components::submissions::SubmissionsPanel;
use crate::helpers::show_toast;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Form,
    Submissions,
}

pub enum Msg {
    SetTab(Tab),
    SchemaLoaded(FormSchema),
    SchemaFailed(String),
    Submitted(String),
}

pub struct App {
    active_tab: Tab,
    schema: Option<Rc<FormSchema>>,
    load_error: Option<String>,
    loaded: bool,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            active_tab: Tab::Form,
            schema: None,
            load_error: None,
            loaded: false,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetTab(tab) => {
                self.active_tab = tab;
                true
            }
            Msg::SchemaLoaded(schema) => {
                self.schema = Some(Rc::new(schema));
                self.load_error = None;
                true
            }
            Msg::SchemaFailed(reason) => {
                gloo_console::error!("Could not load the form schema:", reason.clone());
                self.load_error = Some(reason);
                true
            }
            Msg::Submitted(id) => {
                show_toast(&format!("Submission {} saved.", short_id(&id)));
                self.active_tab = Tab::Submissions;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let title = self
            .schema
            .as_ref()
            .map(|s| s.title().to_string())
            .unwrap_or_else(|| "Dynamic Form".to_string());

        html! {
            <div class="app-root">
                <h2>{ title }</h2>
                <div class="tab-bar">
                    { tab_button(link, Tab::Form, self.active_tab, "Form") }
                    { tab_button(link, Tab::Submissions, self.active_tab, "Submissions") }
                </div>
                { self.view_active_tab(link) }
            </div>
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;
            let link = ctx.link().clone();
            spawn_local(async move {
                match api::fetch_schema().await {
                    Ok(schema) => link.send_message(Msg::SchemaLoaded(schema)),
                    Err(err) => link.send_message(Msg::SchemaFailed(err.to_string())),
                }
            });
        }
    }
}

impl App {
    fn view_active_tab(&self, link: &Scope<Self>) -> Html {
        let Some(schema) = self.schema.clone() else {
            return match &self.load_error {
                Some(reason) => html! { <div class="status">{ format!("Could not load the form: {}", reason) }</div> },
                None => html! { <div class="status">{ "Loading form..." }</div> },
            };
        };

        match self.active_tab {
            Tab::Form => html! {
                <DynamicForm {schema} on_submitted={link.callback(Msg::Submitted)} />
            },
            Tab::Submissions => html! { <SubmissionsPanel {schema} /> },
        }
    }
}

fn tab_button(link: &Scope<App>, tab: Tab, active: Tab, label: &'static str) -> Html {
    html! {
        <button
            class={classes!("tab-btn", (tab == active).then_some("active"))}
            onclick={link.callback(move |_| Msg::SetTab(tab))}
        >
            { label }
        </button>
    }
}

fn short_id(id: &str) -> &str {
    id.get(..8).unwrap_or(id)
}
