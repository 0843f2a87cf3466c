//! Material-style sheet sliding down from the top of the viewport.
//!
//! The sheet is always mounted; `open_top_sheet` / `close_top_sheet` toggle
//! the `show` class that drives the CSS transition.

use uuid::Uuid;
use web_sys::HtmlElement;
use yew::{html, Callback, Component, Context, Html, NodeRef, Properties};

pub struct YwMaterialTopSheet {
    pub title_id: String,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub children: Html,
    pub node_ref: NodeRef,
    #[prop_or_default]
    pub title: Option<String>,
    /// Rendered as a close button when set.
    #[prop_or_default]
    pub on_close: Option<Callback<()>>,
}

impl Component for YwMaterialTopSheet {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            title_id: format!("sheet-title-{}", Uuid::new_v4()),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        html! {
            <div
                class="top-sheet"
                role="dialog"
                aria-labelledby={self.title_id.clone()}
                ref={props.node_ref.clone()}
            >
                if let Some(title) = &props.title {
                    <h3 id={self.title_id.clone()}>{ title.clone() }</h3>
                }
                { props.children.clone() }
                if let Some(on_close) = &props.on_close {
                    <div class="form-actions">
                        <button class="btn secondary" onclick={on_close.reform(|_| ())}>{ "Close" }</button>
                    </div>
                }
            </div>
        }
    }
}

pub fn open_top_sheet(top_sheet_ref: NodeRef) {
    set_shown(top_sheet_ref, true);
}

pub fn close_top_sheet(top_sheet_ref: NodeRef) {
    set_shown(top_sheet_ref, false);
}

/// Toggles `show` after a short delay so a sheet rendered in the same tick
/// still animates.
fn set_shown(top_sheet_ref: NodeRef, shown: bool) {
    wasm_bindgen_futures::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(50).await;
        if let Some(top_sheet) = top_sheet_ref.cast::<HtmlElement>() {
            let classes = top_sheet.class_list();
            let _ = if shown {
                classes.add_1("show")
            } else {
                classes.remove_1("show")
            };
        }
    });
}
