// ============================================================================
// USE ADMIN REGIONS HOOK
// ============================================================================
// Los avisos de éxito desaparecen tras CONFIG.status_reset_ms; un aviso
// nuevo reemplaza (y cancela) el borrado pendiente
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config::CONFIG;
use crate::hooks::session_context::use_session;
use crate::hooks::use_lifetime::use_lifetime;
use crate::models::{Region, RegionId};
use crate::utils::{confirm, LifetimeToken};
use crate::viewmodels::admin_regions_viewmodel::DELETE_PROMPT;
use crate::viewmodels::{AdminRegionsAction, AdminRegionsState, AdminRegionsViewModel};

#[derive(Clone, PartialEq)]
pub struct AdminRegionsHandle {
    pub state: UseReducerHandle<AdminRegionsState>,
    pub search: Callback<String>,
    pub start_add: Callback<()>,
    pub start_edit: Callback<Region>,
    pub name_changed: Callback<String>,
    pub cancel_edit: Callback<()>,
    pub save: Callback<()>,
    pub delete: Callback<RegionId>,
    pub dismiss_error: Callback<()>,
}

type NoticeTimer = Rc<RefCell<Option<Timeout>>>;

/// Aplica el resultado de una mutación y, si fue bien, programa el borrado del aviso
fn settle(
    dispatcher: &UseReducerDispatcher<AdminRegionsState>,
    notice_timer: &NoticeTimer,
    lifetime: &LifetimeToken,
    result: Result<AdminRegionsAction, AdminRegionsAction>,
) {
    lifetime.apply(result, |result| match result {
        Ok(action) => {
            dispatcher.dispatch(action);
            let clear = {
                let dispatcher = dispatcher.clone();
                Timeout::new(CONFIG.status_reset_ms, move || {
                    dispatcher.dispatch(AdminRegionsAction::ClearNotice)
                })
            };
            notice_timer.borrow_mut().replace(clear);
        }
        Err(action) => dispatcher.dispatch(action),
    });
}

#[hook]
pub fn use_admin_regions() -> AdminRegionsHandle {
    let session = use_session();
    let state = use_reducer(AdminRegionsState::default);
    let lifetime = use_lifetime();
    let notice_timer: NoticeTimer = use_mut_ref(|| None);
    let vm = AdminRegionsViewModel::new(session.api());

    {
        let vm = vm.clone();
        let dispatcher = state.dispatcher();
        let lifetime = lifetime.clone();
        let notice_timer = notice_timer.clone();
        use_effect_with((), move |_| {
            log::info!("📋 Cargando regiones (admin)");
            wasm_bindgen_futures::spawn_local(async move {
                let result = vm.load().await;
                lifetime.apply(result, |result| dispatcher.dispatch(AdminRegionsAction::Loaded(result)));
            });
            move || {
                notice_timer.borrow_mut().take();
            }
        });
    }

    let save = {
        let vm = vm.clone();
        let state = state.clone();
        let lifetime = lifetime.clone();
        let notice_timer = notice_timer.clone();
        Callback::from(move |_: ()| {
            let Some(editor) = state.editor.clone().filter(|e| e.can_save()) else {
                return;
            };
            state.dispatch(AdminRegionsAction::SaveStarted);

            let vm = vm.clone();
            let dispatcher = state.dispatcher();
            let lifetime = lifetime.clone();
            let notice_timer = notice_timer.clone();
            wasm_bindgen_futures::spawn_local(async move {
                if let Some(result) = vm.save(&editor).await {
                    settle(&dispatcher, &notice_timer, &lifetime, result.map_err(AdminRegionsAction::SaveFailed));
                }
            });
        })
    };

    let delete = {
        let dispatcher = state.dispatcher();
        Callback::from(move |id: RegionId| {
            if !confirm(DELETE_PROMPT) {
                return;
            }
            let vm = vm.clone();
            let dispatcher = dispatcher.clone();
            let lifetime = lifetime.clone();
            let notice_timer = notice_timer.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = vm
                    .delete(id)
                    .await
                    .map(AdminRegionsAction::Deleted)
                    .map_err(AdminRegionsAction::DeleteFailed);
                settle(&dispatcher, &notice_timer, &lifetime, result);
            });
        })
    };

    let search = {
        let dispatcher = state.dispatcher();
        Callback::from(move |term| dispatcher.dispatch(AdminRegionsAction::SearchChanged(term)))
    };
    let start_add = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(AdminRegionsAction::StartAdd))
    };
    let start_edit = {
        let dispatcher = state.dispatcher();
        Callback::from(move |region| dispatcher.dispatch(AdminRegionsAction::StartEdit(region)))
    };
    let name_changed = {
        let dispatcher = state.dispatcher();
        Callback::from(move |name| dispatcher.dispatch(AdminRegionsAction::NameChanged(name)))
    };
    let cancel_edit = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(AdminRegionsAction::CancelEdit))
    };
    let dismiss_error = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(AdminRegionsAction::DismissError))
    };

    AdminRegionsHandle {
        state,
        search,
        start_add,
        start_edit,
        name_changed,
        cancel_edit,
        save,
        delete,
        dismiss_error,
    }
}
