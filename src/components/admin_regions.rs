// ============================================================================
// ADMIN REGIONS PAGE
// ============================================================================

use yew::prelude::*;
use yew_router::prelude::*;

use super::feedback::{Alert, AlertKind, Spinner};
use super::routes::{DirectoryQuery, Route};
use crate::hooks::{use_admin_regions, AdminRegionsHandle};
use crate::models::Region;
use crate::utils::event_value;

fn editor_panel(handle: &AdminRegionsHandle) -> Html {
    let Some(editor) = handle.state.editor.as_ref() else {
        return html! {};
    };
    let on_name = handle.name_changed.reform(|e: InputEvent| event_value(&e));
    let on_cancel = handle.cancel_edit.reform(|_: MouseEvent| ());
    let on_save = handle.save.reform(|_: MouseEvent| ());

    html! {
        <div class="panel region-editor">
            <div class="panel-header">
                <h3>{editor.title()}</h3>
                <button type="button" class="icon-button" aria-label="Close" onclick={on_cancel.clone()}>{"✕"}</button>
            </div>
            <div class="form-group">
                <label for="region-name">{"Region Name"}</label>
                <input
                    id="region-name"
                    type="text"
                    placeholder="Enter region name"
                    value={editor.name.clone()}
                    oninput={on_name}
                />
            </div>
            <div class="form-actions">
                <button type="button" class="btn" onclick={on_cancel}>{"Cancel"}</button>
                <button type="button" class="btn btn-primary" disabled={!editor.can_save()} onclick={on_save}>
                    {if editor.saving { "Saving..." } else { "Save Region" }}
                </button>
            </div>
        </div>
    }
}

fn region_row(handle: &AdminRegionsHandle, region: &Region) -> Html {
    let on_edit = {
        let region = region.clone();
        handle.start_edit.reform(move |_: MouseEvent| region.clone())
    };
    let id = region.id;
    let on_delete = handle.delete.reform(move |_: MouseEvent| id);
    let query = DirectoryQuery { region: Some(id) };

    html! {
        <tr key={id.to_string()}>
            <td>{region.name.clone()}</td>
            <td>
                <Link<Route, DirectoryQuery> to={Route::Companies} query={Some(query)}>{"View Companies"}</Link<Route, DirectoryQuery>>
            </td>
            <td class="row-actions">
                <button type="button" title="Edit Region" onclick={on_edit}>{"✏️"}</button>
                <button type="button" class="danger" title="Delete Region" onclick={on_delete}>{"🗑️"}</button>
            </td>
        </tr>
    }
}

#[function_component(AdminRegionsPage)]
pub fn admin_regions_page() -> Html {
    let handle = use_admin_regions();
    let state = &handle.state;
    let regions = state.visible_regions();
    let on_add = handle.start_add.reform(|_: MouseEvent| ());
    let on_search = handle.search.reform(|e: InputEvent| event_value(&e));

    html! {
        <div class="admin-regions">
            <div class="page-header">
                <div>
                    <h1>{"Manage Regions"}</h1>
                    <p>{"Create, edit, and manage service regions for companies."}</p>
                </div>
                <button type="button" class="btn btn-primary" onclick={on_add}>{"➕ Add New Region"}</button>
            </div>

            if let Some(notice) = state.notice {
                <Alert kind={AlertKind::Success} message={notice} />
            }
            if let Some(error) = &state.error {
                <Alert kind={AlertKind::Error} message={error.clone()} on_dismiss={handle.dismiss_error.clone()} />
            }

            {editor_panel(&handle)}

            <div class="search-bar">
                <input
                    type="text"
                    placeholder="Search regions..."
                    value={state.search.clone()}
                    oninput={on_search}
                />
            </div>

            if state.loading {
                <Spinner />
            } else {
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>{"Region Name"}</th>
                            <th>{"Companies"}</th>
                            <th>{"Actions"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        if regions.is_empty() {
                            <tr>
                                <td colspan="3" class="muted">{"No regions found. Click \"Add New Region\" to create one."}</td>
                            </tr>
                        } else {
                            { for regions.iter().map(|region| region_row(&handle, region)) }
                        }
                    </tbody>
                </table>
            }
        </div>
    }
}
