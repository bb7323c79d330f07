use yew::prelude::*;

use crate::hooks::use_lifetime::use_lifetime;
use crate::models::Region;
use crate::services::ApiClient;
use crate::viewmodels::ProfileViewModel;

/// Regiones para el formulario de registro; vacío hasta que cargan
#[hook]
pub fn use_regions() -> UseStateHandle<Result<Vec<Region>, String>> {
    let regions = use_state(|| Ok(Vec::new()));
    let lifetime = use_lifetime();

    {
        let regions = regions.clone();
        use_effect_with((), move |_| {
            let vm = ProfileViewModel::new(ApiClient::new());
            wasm_bindgen_futures::spawn_local(async move {
                let result = vm.load_regions().await;
                lifetime.apply(result, |result| regions.set(result));
            });
            || ()
        });
    }

    regions
}
