// ============================================================================
// DIRECTORY VIEWMODEL - LISTADO PÚBLICO DE EMPRESAS
// ============================================================================
// El filtro de región lo resuelve el servidor; la búsqueda filtra en local.
// Cada fetch de empresas va numerado; solo el último puede aplicarse
// ============================================================================

use std::cell::Cell;
use std::rc::Rc;

use yew::Reducible;

use super::search::{filter_companies, SearchFields};
use crate::models::{Company, Region, RegionId};
use crate::services::MarketplaceApi;

pub const LOAD_FAILED: &str = "Failed to load data. Please try again later.";

#[derive(Clone, Debug, PartialEq)]
pub struct DirectoryState {
    pub regions: Vec<Region>,
    pub companies: Vec<Company>,
    pub selected_region: Option<RegionId>,
    pub search: String,
    pub loading: bool,
    pub error: Option<String>,
    latest_request: u64,
}

impl Default for DirectoryState {
    fn default() -> Self {
        Self {
            regions: Vec::new(),
            companies: Vec::new(),
            selected_region: None,
            search: String::new(),
            loading: true,
            error: None,
            latest_request: 0,
        }
    }
}

impl DirectoryState {
    pub fn visible_companies(&self) -> Vec<Company> {
        filter_companies(&self.companies, &self.search, SearchFields::DIRECTORY)
    }

    pub fn has_search(&self) -> bool {
        !self.search.is_empty()
    }

    /// "No companies found" solo tras una carga terminada y correcta
    pub fn is_empty_result(&self) -> bool {
        !self.loading && self.error.is_none() && self.visible_companies().is_empty()
    }
}

pub enum DirectoryAction {
    RegionsLoaded(Result<Vec<Region>, String>),
    /// Se lanzó el fetch número `request` para `region`
    FetchStarted { request: u64, region: Option<RegionId> },
    CompaniesLoaded { request: u64, result: Result<Vec<Company>, String> },
    SearchChanged(String),
}

impl Reducible for DirectoryState {
    type Action = DirectoryAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            DirectoryAction::RegionsLoaded(Ok(regions)) => next.regions = regions,
            DirectoryAction::RegionsLoaded(Err(message)) => next.error = Some(message),
            DirectoryAction::FetchStarted { request, region } => {
                next.latest_request = request;
                next.selected_region = region;
                next.loading = true;
                next.error = None;
            }
            DirectoryAction::CompaniesLoaded { request, result } => {
                if request != self.latest_request {
                    log::debug!("⏭️ Ignorando listado de empresas obsoleto #{}", request);
                    return self;
                }
                next.loading = false;
                match result {
                    Ok(companies) => next.companies = companies,
                    Err(message) => next.error = Some(message),
                }
            }
            DirectoryAction::SearchChanged(term) => next.search = term,
        }
        Rc::new(next)
    }
}

/// Fetches de la página de directorio; los clones comparten el contador
#[derive(Clone)]
pub struct DirectoryViewModel<A> {
    api: A,
    requests: Rc<Cell<u64>>,
}

impl<A: MarketplaceApi> DirectoryViewModel<A> {
    pub fn new(api: A) -> Self {
        Self { api, requests: Rc::new(Cell::new(0)) }
    }

    pub fn next_request(&self) -> u64 {
        let next = self.requests.get() + 1;
        self.requests.set(next);
        next
    }

    pub async fn load_regions(&self) -> Result<Vec<Region>, String> {
        self.api.list_regions().await.map_err(|e| {
            log::error!("❌ Error cargando regiones: {}", e);
            LOAD_FAILED.to_string()
        })
    }

    pub async fn load_companies(&self, region: Option<RegionId>) -> Result<Vec<Company>, String> {
        log::info!("📋 Cargando empresas (región: {:?})", region);
        match self.api.list_companies(region).await {
            Ok(companies) => {
                log::info!("✅ Empresas cargadas: {}", companies.len());
                Ok(companies)
            }
            Err(e) => {
                log::error!("❌ Error cargando empresas: {}", e);
                Err(LOAD_FAILED.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::FakeApi;
    use futures::executor::block_on;

    fn apply(state: Rc<DirectoryState>, action: DirectoryAction) -> Rc<DirectoryState> {
        state.reduce(action)
    }

    /// Lanza un fetch numerado vía viewmodel y aplica ambos pasos al estado
    fn fetch(
        vm: &DirectoryViewModel<FakeApi>,
        state: Rc<DirectoryState>,
        region: Option<RegionId>,
    ) -> Rc<DirectoryState> {
        let request = vm.next_request();
        let state = apply(state, DirectoryAction::FetchStarted { request, region });
        let result = block_on(vm.load_companies(region));
        apply(state, DirectoryAction::CompaniesLoaded { request, result })
    }

    #[test]
    fn starts_loading_with_no_filter() {
        let state = DirectoryState::default();
        assert!(state.loading);
        assert_eq!(state.selected_region, None);
        assert!(!state.is_empty_result());
    }

    #[test]
    fn search_then_region_scenario() {
        let api = FakeApi::seeded();
        let vm = DirectoryViewModel::new(api.clone());
        let mut state = Rc::new(DirectoryState::default());
        state = apply(state, DirectoryAction::RegionsLoaded(block_on(vm.load_regions())));
        state = fetch(&vm, state, None);
        assert_eq!(state.companies.len(), 2);

        state = apply(state, DirectoryAction::SearchChanged("south".into()));
        let visible = state.visible_companies();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "GreenBin");

        state = apply(state, DirectoryAction::SearchChanged(String::new()));
        state = fetch(&vm, state, Some(1));
        assert_eq!(api.calls().last().map(String::as_str), Some("companies:1"));
        assert_eq!(state.selected_region, Some(1));
        assert!(state.companies.iter().all(|c| c.serves(1)));
        assert_eq!(state.visible_companies()[0].name, "Acme Waste");

        state = fetch(&vm, state, None);
        assert_eq!(api.calls().last().map(String::as_str), Some("companies"));
        assert_eq!(state.companies.len(), 2);
    }

    #[test]
    fn region_change_fetches_even_with_search_active() {
        let api = FakeApi::seeded();
        let vm = DirectoryViewModel::new(api.clone());
        let mut state = fetch(&vm, Rc::new(DirectoryState::default()), None);
        state = apply(state, DirectoryAction::SearchChanged("south".into()));

        state = fetch(&vm, state, Some(1));
        assert_eq!(api.count("companies"), 2);
        assert_eq!(state.companies.len(), 1);
        assert!(state.is_empty_result());
        assert!(state.has_search());
    }

    #[test]
    fn superseded_response_is_ignored() {
        let vm = DirectoryViewModel::new(FakeApi::seeded());
        let mut state = Rc::new(DirectoryState::default());

        let slow = vm.next_request();
        state = apply(state, DirectoryAction::FetchStarted { request: slow, region: Some(2) });
        let fast = vm.next_request();
        state = apply(state, DirectoryAction::FetchStarted { request: fast, region: Some(1) });

        let north = block_on(vm.load_companies(Some(1)));
        state = apply(state, DirectoryAction::CompaniesLoaded { request: fast, result: north });
        let south = block_on(vm.load_companies(Some(2)));
        state = apply(state, DirectoryAction::CompaniesLoaded { request: slow, result: south });

        assert_eq!(state.selected_region, Some(1));
        assert_eq!(state.companies.len(), 1);
        assert_eq!(state.companies[0].name, "Acme Waste");
    }

    #[test]
    fn failed_fetch_shows_error_without_retry() {
        let api = FakeApi::seeded();
        api.fail("companies");
        let vm = DirectoryViewModel::new(api.clone());

        let state = fetch(&vm, Rc::new(DirectoryState::default()), None);
        assert_eq!(state.error.as_deref(), Some(LOAD_FAILED));
        assert!(!state.loading);
        assert!(!state.is_empty_result());
        assert_eq!(api.count("companies"), 1);
    }

    #[test]
    fn new_fetch_clears_previous_error() {
        let api = FakeApi::seeded();
        api.fail("companies");
        let vm = DirectoryViewModel::new(api.clone());
        let state = fetch(&vm, Rc::new(DirectoryState::default()), None);

        api.recover("companies");
        let state = fetch(&vm, state, Some(2));
        assert_eq!(state.error, None);
        assert_eq!(state.companies[0].name, "GreenBin");
    }
}
