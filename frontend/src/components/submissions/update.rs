use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api::{self, ApiError};
use crate::helpers::show_toast;
use crate::tops_sheet::yw_material_top_sheet::{close_top_sheet, open_top_sheet};

use super::messages::Msg;
use super::state::SubmissionsPanel;

pub fn update(panel: &mut SubmissionsPanel, ctx: &Context<SubmissionsPanel>, msg: Msg) -> bool {
    match msg {
        Msg::Load => {
            panel.loading = true;
            let params = panel.params;
            let link = ctx.link().clone();
            spawn_local(async move {
                match api::list_submissions(&params).await {
                    Ok(listing) => link.send_message(Msg::Loaded(listing)),
                    Err(err) => link.send_message(Msg::LoadFailed(err.to_string())),
                }
            });
            true
        }
        Msg::Loaded(listing) => {
            panel.loading = false;
            panel.load_error = None;
            // A delete can leave the last page empty; step back to the new last page.
            if listing.data.is_empty() && listing.meta.total > 0 && panel.params.page > 1 {
                panel.params.page = listing.meta.total_pages;
                ctx.link().send_message(Msg::Load);
                return false;
            }
            panel.rows = listing.data;
            panel.meta = Some(listing.meta);
            true
        }
        Msg::LoadFailed(reason) => {
            gloo_console::error!("Listing submissions failed:", reason.clone());
            panel.loading = false;
            panel.load_error = Some(reason);
            true
        }
        Msg::GoToPage(page) => {
            let last = panel.meta.map_or(1, |m| m.total_pages);
            let page = page.clamp(1, last);
            if page == panel.params.page {
                return false;
            }
            panel.params.page = page;
            ctx.link().send_message(Msg::Load);
            false
        }
        Msg::ToggleSort => {
            panel.params.sort_order = panel.params.sort_order.toggled();
            panel.params.page = 1;
            ctx.link().send_message(Msg::Load);
            true
        }
        Msg::ShowDetail(id) => {
            panel.selected = panel.row(&id).cloned();
            if panel.selected.is_some() {
                open_top_sheet(panel.detail_sheet_ref.clone());
            }
            true
        }
        Msg::CloseDetail => {
            close_top_sheet(panel.detail_sheet_ref.clone());
            panel.selected = None;
            true
        }
        Msg::AskDelete(id) => {
            panel.pending_delete = Some(id);
            open_top_sheet(panel.confirm_sheet_ref.clone());
            true
        }
        Msg::CancelDelete => {
            close_top_sheet(panel.confirm_sheet_ref.clone());
            panel.pending_delete = None;
            true
        }
        Msg::ConfirmDelete => {
            let Some(id) = panel.pending_delete.clone() else {
                return false;
            };
            if panel.deleting {
                return false;
            }
            panel.deleting = true;
            let link = ctx.link().clone();
            spawn_local(async move {
                match api::delete_submission(&id).await {
                    Ok(()) => link.send_message(Msg::Deleted(id)),
                    // Someone else removed it; the listing is stale either way.
                    Err(ApiError::NotFound) => link.send_message(Msg::Deleted(id)),
                    Err(err) => link.send_message(Msg::DeleteFailed(err.to_string())),
                }
            });
            true
        }
        Msg::Deleted(id) => {
            panel.deleting = false;
            panel.pending_delete = None;
            close_top_sheet(panel.confirm_sheet_ref.clone());
            if panel.selected.as_ref().is_some_and(|s| s.id == id) {
                panel.selected = None;
                close_top_sheet(panel.detail_sheet_ref.clone());
            }
            show_toast("Submission deleted.");
            ctx.link().send_message(Msg::Load);
            true
        }
        Msg::DeleteFailed(reason) => {
            panel.deleting = false;
            gloo_console::error!("Deleting submission failed:", reason.clone());
            show_toast(&format!("Could not delete the submission: {}", reason));
            true
        }
    }
}
