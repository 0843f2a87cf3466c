//! View rendering for the submissions browser.
//!
//! Layout
//! - Table: creation time (sortable), the first schema fields, row actions.
//! - Pagination bar with previous/next and the `page / totalPages` indicator.
//! - Two top sheets: submission detail and delete confirmation.

use common::requests::SortOrder;
use yew::html::Scope;
use yew::prelude::*;

use crate::tops_sheet::yw_material_top_sheet::YwMaterialTopSheet;

use super::helpers::{format_created_at, format_value, SUMMARY_COLUMNS};
use super::messages::Msg;
use super::state::SubmissionsPanel;

pub fn view(panel: &SubmissionsPanel, ctx: &Context<SubmissionsPanel>) -> Html {
    let link = ctx.link();

    html! {
        <div class="table-card">
            { build_table(panel, ctx) }
            { build_pagination(panel, link) }
            { build_detail_sheet(panel, ctx) }
            { build_confirm_sheet(panel, link) }
        </div>
    }
}

fn build_table(panel: &SubmissionsPanel, ctx: &Context<SubmissionsPanel>) -> Html {
    let link = ctx.link();
    let columns: Vec<_> = ctx
        .props()
        .schema
        .fields()
        .iter()
        .take(SUMMARY_COLUMNS)
        .collect();
    let arrow = match panel.params.sort_order {
        SortOrder::Asc => "▲",
        SortOrder::Desc => "▼",
    };

    if let Some(reason) = &panel.load_error {
        return html! { <div class="status">{ format!("Could not load submissions: {}", reason) }</div> };
    }
    if panel.rows.is_empty() {
        let text = if panel.loading { "Loading..." } else { "No submissions yet." };
        return html! { <div class="status">{ text }</div> };
    }

    html! {
        <table>
            <thead>
                <tr>
                    <th class="sortable" onclick={link.callback(|_| Msg::ToggleSort)}>
                        { format!("Created {}", arrow) }
                    </th>
                    { for columns.iter().map(|field| html! { <th>{ field.label.clone() }</th> }) }
                    <th></th>
                </tr>
            </thead>
            <tbody>
                { for panel.rows.iter().map(|row| {
                    let view_id = row.id.clone();
                    let delete_id = row.id.clone();
                    html! {
                        <tr key={row.id.clone()}>
                            <td>{ format_created_at(&row.created_at) }</td>
                            { for columns.iter().map(|field| html! {
                                <td>{ format_value(row.data.get(&field.name)) }</td>
                            }) }
                            <td>
                                <button class="btn secondary" onclick={link.callback(move |_| Msg::ShowDetail(view_id.clone()))}>
                                    { "View" }
                                </button>
                                { " " }
                                <button class="btn danger" onclick={link.callback(move |_| Msg::AskDelete(delete_id.clone()))}>
                                    { "Delete" }
                                </button>
                            </td>
                        </tr>
                    }
                }) }
            </tbody>
        </table>
    }
}

fn build_pagination(panel: &SubmissionsPanel, link: &Scope<SubmissionsPanel>) -> Html {
    let Some(meta) = panel.meta else {
        return html! {};
    };
    let page = panel.params.page;

    html! {
        <div class="pagination">
            <span>{ format!("{} total", meta.total) }</span>
            <button
                class="btn secondary"
                disabled={page <= 1 || panel.loading}
                onclick={link.callback(move |_| Msg::GoToPage(page.saturating_sub(1)))}
            >
                { "Previous" }
            </button>
            <span>{ format!("Page {} of {}", meta.page, meta.total_pages) }</span>
            <button
                class="btn secondary"
                disabled={page >= meta.total_pages || panel.loading}
                onclick={link.callback(move |_| Msg::GoToPage(page + 1))}
            >
                { "Next" }
            </button>
        </div>
    }
}

fn build_detail_sheet(panel: &SubmissionsPanel, ctx: &Context<SubmissionsPanel>) -> Html {
    let link = ctx.link();
    let body = match &panel.selected {
        Some(submission) => {
            let schema = &ctx.props().schema;
            // Keys the schema does not know about are still shown, after the known ones.
            let extra = submission
                .data
                .iter()
                .filter(|(name, _)| schema.field(name).is_none());
            html! {
                <dl class="detail-list">
                    <dt>{ "Id" }</dt>
                    <dd>{ submission.id.clone() }</dd>
                    <dt>{ "Created" }</dt>
                    <dd>{ format_created_at(&submission.created_at) }</dd>
                    { for schema.fields().iter().map(|field| html! {
                        <>
                            <dt>{ field.label.clone() }</dt>
                            <dd>{ format_value(submission.data.get(&field.name)) }</dd>
                        </>
                    }) }
                    { for extra.map(|(name, value)| html! {
                        <>
                            <dt>{ name.clone() }</dt>
                            <dd>{ format_value(Some(value)) }</dd>
                        </>
                    }) }
                </dl>
            }
        }
        None => html! {},
    };

    html! {
        <YwMaterialTopSheet
            node_ref={panel.detail_sheet_ref.clone()}
            title={Some("Submission".to_string())}
            on_close={Some(link.callback(|_| Msg::CloseDetail))}
        >
            { body }
        </YwMaterialTopSheet>
    }
}

fn build_confirm_sheet(panel: &SubmissionsPanel, link: &Scope<SubmissionsPanel>) -> Html {
    html! {
        <YwMaterialTopSheet
            node_ref={panel.confirm_sheet_ref.clone()}
            title={Some("Delete submission?".to_string())}
        >
            <p>{ "This cannot be undone." }</p>
            <div class="form-actions">
                <button class="btn secondary" onclick={link.callback(|_| Msg::CancelDelete)}>
                    { "Cancel" }
                </button>
                <button
                    class="btn danger"
                    disabled={panel.deleting || panel.pending_delete.is_none()}
                    onclick={link.callback(|_| Msg::ConfirmDelete)}
                >
                    { "Delete" }
                </button>
            </div>
        </YwMaterialTopSheet>
    }
}
