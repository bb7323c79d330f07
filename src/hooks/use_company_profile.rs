// ============================================================================
// USE COMPANY PROFILE HOOK - formulario del dashboard
// ============================================================================

use yew::prelude::*;

use crate::hooks::session_context::use_session;
use crate::hooks::use_lifetime::use_lifetime;
use crate::models::RegionId;
use crate::viewmodels::{DashboardAction, DashboardState, ProfileField, ProfileViewModel};

#[derive(Clone, PartialEq)]
pub struct CompanyProfileHandle {
    pub state: UseReducerHandle<DashboardState>,
    pub edit: Callback<(ProfileField, String)>,
    pub toggle_region: Callback<RegionId>,
    pub submit: Callback<()>,
}

#[hook]
pub fn use_company_profile() -> CompanyProfileHandle {
    let session = use_session();
    let state = use_reducer(DashboardState::default);
    let lifetime = use_lifetime();
    let vm = ProfileViewModel::new(session.api());

    // Recargar cada vez que cambia la identidad
    {
        let vm = vm.clone();
        let dispatcher = state.dispatcher();
        let lifetime = lifetime.clone();
        let identity = session.state.identity.clone();
        use_effect_with(identity, move |identity| {
            if identity.is_some() {
                wasm_bindgen_futures::spawn_local(async move {
                    let result = vm.load().await;
                    lifetime.apply(result, |result| dispatcher.dispatch(DashboardAction::Loaded(result)));
                });
            }
            || ()
        });
    }

    let submit = {
        let state = state.clone();
        Callback::from(move |_: ()| {
            if state.saving {
                return;
            }
            let update = match state.form.validate() {
                Ok(update) => update,
                Err(errors) => {
                    log::warn!("⚠️ Formulario de perfil con {} campo(s) inválido(s)", errors.len());
                    state.dispatch(DashboardAction::Invalid(errors));
                    return;
                }
            };
            state.dispatch(DashboardAction::SaveStarted);

            let vm = vm.clone();
            let dispatcher = state.dispatcher();
            let lifetime = lifetime.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = vm.save(&update).await;
                lifetime.apply(result, |result| match result {
                    Ok(company) => dispatcher.dispatch(DashboardAction::Saved(company)),
                    Err(message) => dispatcher.dispatch(DashboardAction::SaveFailed(message)),
                });
            });
        })
    };

    let edit = {
        let dispatcher = state.dispatcher();
        Callback::from(move |(field, value): (ProfileField, String)| {
            dispatcher.dispatch(DashboardAction::Edit(field, value))
        })
    };

    let toggle_region = {
        let dispatcher = state.dispatcher();
        Callback::from(move |id: RegionId| dispatcher.dispatch(DashboardAction::ToggleRegion(id)))
    };

    CompanyProfileHandle {
        state,
        edit,
        toggle_region,
        submit,
    }
}
