// ============================================================================
// ADMIN COMPANIES PAGE
// ============================================================================

use yew::prelude::*;
use yew_router::prelude::*;

use super::feedback::{Alert, AlertKind, Spinner};
use super::routes::Route;
use crate::hooks::{use_admin_companies, AdminCompaniesHandle};
use crate::models::Company;
use crate::utils::event_value;
use crate::viewmodels::RowStatus;

fn reset_icon(status: RowStatus) -> Html {
    match status {
        RowStatus::Idle => html! { <span class="icon">{"🔄"}</span> },
        RowStatus::Pending => html! { <span class="icon spin">{"🔄"}</span> },
        RowStatus::Succeeded => html! { <span class="icon ok">{"✓"}</span> },
        RowStatus::Failed => html! { <span class="icon fail">{"✗"}</span> },
    }
}

fn company_row(handle: &AdminCompaniesHandle, company: &Company) -> Html {
    let id = company.id;
    let status = handle.state.status_of(id);
    let on_reset = handle.reset_password.reform(move |_: MouseEvent| id);
    let on_delete = handle.open_delete.reform(move |_: MouseEvent| id);

    html! {
        <tr key={id.to_string()}>
            <td class="company-name">{company.name.clone()}</td>
            <td>
                <div>{company.email.clone()}</div>
                <div class="muted">{company.phone.clone()}</div>
            </td>
            <td>
                <div class="region-chips">
                    { for company.regions.iter().map(|r| html! {
                        <span key={r.id.to_string()} class="region-chip">{r.name.clone()}</span>
                    }) }
                </div>
            </td>
            <td class="row-actions">
                <button
                    type="button"
                    title="Reset Password"
                    disabled={status == RowStatus::Pending}
                    onclick={on_reset}
                >
                    {reset_icon(status)}
                </button>
                <button type="button" class="danger" title="Delete Company" onclick={on_delete}>{"🗑️"}</button>
            </td>
        </tr>
    }
}

fn delete_dialog(handle: &AdminCompaniesHandle) -> Html {
    let Some(confirmation) = handle.state.confirmation.as_ref() else {
        return html! {};
    };
    let on_password = handle.password_changed.reform(|e: InputEvent| event_value(&e));
    let on_cancel = handle.cancel_delete.reform(|_: MouseEvent| ());
    let on_confirm = handle.confirm_delete.reform(|_: MouseEvent| ());

    html! {
        <div class="modal-backdrop">
            <div class="modal">
                <h3>{"Confirm Deletion"}</h3>
                <p>{"Are you sure you want to delete this company? This action cannot be undone."}</p>
                <div class="form-group">
                    <label for="confirm-password">{"Enter your password to confirm"}</label>
                    <input
                        id="confirm-password"
                        type="password"
                        value={confirmation.password.clone()}
                        oninput={on_password}
                    />
                </div>
                <div class="modal-actions">
                    <button type="button" class="btn" onclick={on_cancel}>{"Cancel"}</button>
                    <button
                        type="button"
                        class="btn btn-danger"
                        disabled={!handle.state.can_confirm_delete()}
                        onclick={on_confirm}
                    >
                        {if confirmation.submitting { "Deleting..." } else { "Delete" }}
                    </button>
                </div>
            </div>
        </div>
    }
}

#[function_component(AdminCompaniesPage)]
pub fn admin_companies_page() -> Html {
    let handle = use_admin_companies();
    let state = &handle.state;
    let companies = state.visible_companies();

    let on_search = handle.search.reform(|e: InputEvent| event_value(&e));
    let clear_search = handle.search.reform(|_: MouseEvent| String::new());

    html! {
        <div class="admin-companies">
            <div class="page-header">
                <div>
                    <h1>{"Manage Companies"}</h1>
                    <p>{"View, edit, and manage all waste collection companies on the platform."}</p>
                </div>
                <Link<Route> to={Route::Register} classes="btn btn-primary">{"➕ Add New Company"}</Link<Route>>
            </div>

            <div class="search-bar">
                <input
                    type="text"
                    placeholder="Search companies..."
                    value={state.search.clone()}
                    oninput={on_search}
                />
            </div>

            if state.loading {
                <Spinner />
            }

            if let Some(error) = &state.error {
                <Alert kind={AlertKind::Error} message={error.clone()} on_dismiss={handle.dismiss_error.clone()} />
            }

            if !state.loading && !companies.is_empty() {
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>{"Company"}</th>
                            <th>{"Contact"}</th>
                            <th>{"Regions"}</th>
                            <th>{"Actions"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        { for companies.iter().map(|company| company_row(&handle, company)) }
                    </tbody>
                </table>
            }

            if state.is_empty_result() {
                <div class="empty-state">
                    <h3>{"No companies found"}</h3>
                    if state.search.is_empty() {
                        <p>{"There are no companies registered yet."}</p>
                    } else {
                        <p>{format!("No companies matched your search for \"{}\"", state.search)}</p>
                        <button type="button" class="btn-link" onclick={clear_search}>{"Clear search"}</button>
                    }
                </div>
            }

            {delete_dialog(&handle)}
        </div>
    }
}
