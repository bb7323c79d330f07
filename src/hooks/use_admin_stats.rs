use yew::prelude::*;

use crate::hooks::session_context::use_session;
use crate::hooks::use_lifetime::use_lifetime;
use crate::viewmodels::{AdminStatsViewModel, StatsState};

/// Estadísticas del dashboard, una carga por montaje
#[hook]
pub fn use_admin_stats() -> UseStateHandle<StatsState> {
    let session = use_session();
    let state = use_state(StatsState::default);
    let lifetime = use_lifetime();

    {
        let state = state.clone();
        let vm = AdminStatsViewModel::new(session.api());
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                let result = vm.load().await;
                lifetime.apply(result, |result| state.set(StatsState::from(result)));
            });
            || ()
        });
    }

    state
}
