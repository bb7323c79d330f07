// ============================================================================
// USE ADMIN COMPANIES HOOK
// ============================================================================
// Un Timeout pendiente por fila devuelve a idle el estado del reset.
// Soltar un Timeout lo cancela: al borrar la fila (o desmontar) se limpia
// su timer
// ============================================================================

use std::collections::HashMap;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config::CONFIG;
use crate::hooks::session_context::use_session;
use crate::hooks::use_lifetime::use_lifetime;
use crate::models::CompanyId;
use crate::viewmodels::{
    AdminCompaniesAction, AdminCompaniesState, AdminCompaniesViewModel, DeleteOutcome, RowStatus,
};

#[derive(Clone, PartialEq)]
pub struct AdminCompaniesHandle {
    pub state: UseReducerHandle<AdminCompaniesState>,
    pub search: Callback<String>,
    pub open_delete: Callback<CompanyId>,
    pub password_changed: Callback<String>,
    pub cancel_delete: Callback<()>,
    pub confirm_delete: Callback<()>,
    pub reset_password: Callback<CompanyId>,
    pub dismiss_error: Callback<()>,
}

#[hook]
pub fn use_admin_companies() -> AdminCompaniesHandle {
    let session = use_session();
    let state = use_reducer(AdminCompaniesState::default);
    let lifetime = use_lifetime();
    let timers = use_mut_ref(HashMap::<CompanyId, Timeout>::new);
    let vm = AdminCompaniesViewModel::new(session.api());

    {
        let vm = vm.clone();
        let dispatcher = state.dispatcher();
        let lifetime = lifetime.clone();
        let timers = timers.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                let result = vm.load().await;
                lifetime.apply(result, |result| dispatcher.dispatch(AdminCompaniesAction::Loaded(result)));
            });
            move || timers.borrow_mut().clear()
        });
    }

    let confirm_delete = {
        let vm = vm.clone();
        let state = state.clone();
        let lifetime = lifetime.clone();
        let timers = timers.clone();
        Callback::from(move |_: ()| {
            let Some(confirmation) = state.confirmation.clone() else {
                return;
            };
            if confirmation.password.is_empty() || confirmation.submitting {
                return;
            }
            state.dispatch(AdminCompaniesAction::DeleteStarted);

            let vm = vm.clone();
            let dispatcher = state.dispatcher();
            let lifetime = lifetime.clone();
            let timers = timers.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let outcome = vm.delete(&confirmation).await;
                lifetime.apply(outcome, |outcome| match outcome {
                    DeleteOutcome::Deleted(id) => {
                        timers.borrow_mut().remove(&id);
                        dispatcher.dispatch(AdminCompaniesAction::Deleted(id));
                    }
                    DeleteOutcome::Failed(message) => {
                        dispatcher.dispatch(AdminCompaniesAction::DeleteFailed(message));
                    }
                    DeleteOutcome::Skipped => {}
                });
            });
        })
    };

    let reset_password = {
        let state = state.clone();
        Callback::from(move |id: CompanyId| {
            if state.status_of(id) == RowStatus::Pending {
                return;
            }
            // Un intento nuevo reemplaza la vuelta a idle anterior
            timers.borrow_mut().remove(&id);
            state.dispatch(AdminCompaniesAction::ResetStarted(id));

            let vm = vm.clone();
            let dispatcher = state.dispatcher();
            let lifetime = lifetime.clone();
            let timers = timers.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let succeeded = vm.reset_password(id).await;
                lifetime.apply(succeeded, |succeeded| {
                    dispatcher.dispatch(AdminCompaniesAction::ResetFinished { id, succeeded });

                    let revert = {
                        let dispatcher = dispatcher.clone();
                        Timeout::new(CONFIG.status_reset_ms, move || {
                            log::debug!("⏱️ Estado de reset de la empresa {} vuelve a idle", id);
                            dispatcher.dispatch(AdminCompaniesAction::ResetExpired(id));
                        })
                    };
                    timers.borrow_mut().insert(id, revert);
                });
            });
        })
    };

    let search = {
        let dispatcher = state.dispatcher();
        Callback::from(move |term| dispatcher.dispatch(AdminCompaniesAction::SearchChanged(term)))
    };
    let open_delete = {
        let dispatcher = state.dispatcher();
        Callback::from(move |id| dispatcher.dispatch(AdminCompaniesAction::OpenDelete(id)))
    };
    let password_changed = {
        let dispatcher = state.dispatcher();
        Callback::from(move |password| dispatcher.dispatch(AdminCompaniesAction::PasswordChanged(password)))
    };
    let cancel_delete = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(AdminCompaniesAction::CancelDelete))
    };
    let dismiss_error = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(AdminCompaniesAction::DismissError))
    };

    AdminCompaniesHandle {
        state,
        search,
        open_delete,
        password_changed,
        cancel_delete,
        confirm_delete,
        reset_password,
        dismiss_error,
    }
}
