// ============================================================================
// USE DIRECTORY HOOK - listado público de empresas
// ============================================================================

use yew::prelude::*;

use crate::hooks::use_lifetime::use_lifetime;
use crate::models::RegionId;
use crate::services::ApiClient;
use crate::utils::LifetimeToken;
use crate::viewmodels::{DirectoryAction, DirectoryState, DirectoryViewModel};

#[derive(Clone, PartialEq)]
pub struct DirectoryHandle {
    pub state: UseReducerHandle<DirectoryState>,
    pub select_region: Callback<Option<RegionId>>,
    pub search: Callback<String>,
}

fn start_fetch(
    vm: &DirectoryViewModel<ApiClient>,
    dispatcher: UseReducerDispatcher<DirectoryState>,
    lifetime: LifetimeToken,
    region: Option<RegionId>,
) {
    let request = vm.next_request();
    dispatcher.dispatch(DirectoryAction::FetchStarted { request, region });

    let vm = vm.clone();
    wasm_bindgen_futures::spawn_local(async move {
        let result = vm.load_companies(region).await;
        lifetime.apply(result, |result| {
            dispatcher.dispatch(DirectoryAction::CompaniesLoaded { request, result })
        });
    });
}

/// `initial_region` solo se lee al montar (viene de `?region=`)
#[hook]
pub fn use_directory(initial_region: Option<RegionId>) -> DirectoryHandle {
    let state = use_reducer(DirectoryState::default);
    let lifetime = use_lifetime();
    let vm = use_memo((), |_| DirectoryViewModel::new(ApiClient::new()));

    {
        let vm = (*vm).clone();
        let dispatcher = state.dispatcher();
        let lifetime = lifetime.clone();
        use_effect_with((), move |_| {
            {
                let vm = vm.clone();
                let dispatcher = dispatcher.clone();
                let lifetime = lifetime.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    let regions = vm.load_regions().await;
                    lifetime.apply(regions, |regions| {
                        dispatcher.dispatch(DirectoryAction::RegionsLoaded(regions))
                    });
                });
            }
            start_fetch(&vm, dispatcher, lifetime, initial_region);
            || ()
        });
    }

    let select_region = {
        let vm = (*vm).clone();
        let dispatcher = state.dispatcher();
        Callback::from(move |region: Option<RegionId>| {
            log::debug!("🗺️ Filtro de región -> {:?}", region);
            start_fetch(&vm, dispatcher.clone(), lifetime.clone(), region);
        })
    };

    let search = {
        let dispatcher = state.dispatcher();
        Callback::from(move |term: String| dispatcher.dispatch(DirectoryAction::SearchChanged(term)))
    };

    DirectoryHandle {
        state,
        select_region,
        search,
    }
}
