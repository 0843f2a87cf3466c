//! Submissions browser: paginated table, sort toggle, detail sheet and
//! delete confirmation. Same split as the form component.

use yew::prelude::*;

mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::SubmissionsProps;
pub use state::SubmissionsPanel;

impl Component for SubmissionsPanel {
    type Message = Msg;
    type Properties = SubmissionsProps;

    fn create(_ctx: &Context<Self>) -> Self {
        SubmissionsPanel::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;
            ctx.link().send_message(Msg::Load);
        }
    }
}
