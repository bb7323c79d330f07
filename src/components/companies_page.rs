// ============================================================================
// COMPANIES PAGE - directorio público
// ============================================================================

use yew::prelude::*;
use yew_router::prelude::*;

use super::company_card::CompanyCard;
use super::feedback::{Alert, AlertKind, Spinner};
use super::region_filter::RegionFilter;
use super::routes::{DirectoryQuery, Route};
use crate::hooks::use_directory;
use crate::models::RegionId;
use crate::utils::event_value;

#[function_component(CompaniesPage)]
pub fn companies_page() -> Html {
    let location = use_location();
    let navigator = use_navigator();
    let initial_region = location
        .as_ref()
        .and_then(|l| l.query::<DirectoryQuery>().ok())
        .and_then(|q| q.region);

    let directory = use_directory(initial_region);
    let state = &directory.state;

    // Mantener ?region= sincronizado con el chip seleccionado
    let on_select = {
        let select_region = directory.select_region.clone();
        Callback::from(move |region: Option<RegionId>| {
            select_region.emit(region);
            if let Some(navigator) = &navigator {
                if let Err(e) = navigator.replace_with_query(&Route::Companies, &DirectoryQuery { region }) {
                    log::warn!("⚠️ No se pudo actualizar la query: {}", e);
                }
            }
        })
    };

    let on_search = directory.search.reform(|e: InputEvent| event_value(&e));
    let clear_search = directory.search.reform(|_: MouseEvent| String::new());
    let companies = state.visible_companies();

    html! {
        <div class="companies-page">
            <div class="page-header">
                <h1>{"Find Waste Collection Companies"}</h1>
                <p>{"Discover reliable garbage collection services in your area"}</p>
            </div>

            <div class="search-bar">
                <input
                    type="text"
                    placeholder="Search by name, description, or region..."
                    value={state.search.clone()}
                    oninput={on_search}
                />
            </div>

            if !state.regions.is_empty() {
                <RegionFilter regions={state.regions.clone()} selected={state.selected_region} {on_select} />
            }

            if state.loading {
                <Spinner />
            }

            if let Some(error) = &state.error {
                <Alert kind={AlertKind::Error} message={error.clone()} />
            }

            if state.is_empty_result() {
                <div class="empty-state">
                    <h3>{"No companies found"}</h3>
                    <p>{"Try adjusting your search or filter criteria to find waste collection companies."}</p>
                    if state.has_search() {
                        <button type="button" class="btn-link" onclick={clear_search}>{"Clear search"}</button>
                    }
                </div>
            }

            if !state.loading && state.error.is_none() && !companies.is_empty() {
                <div class="company-grid">
                    { for companies.into_iter().map(|company| html! {
                        <CompanyCard key={company.id.to_string()} company={company.clone()} />
                    }) }
                </div>
            }
        </div>
    }
}
