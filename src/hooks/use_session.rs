// ============================================================================
// USE SESSION HOOK
// ============================================================================
// Dueño del reducer SessionStore. Lo monta una vez SessionProvider; el resto
// lee el handle desde el contexto
// ============================================================================

use yew::prelude::*;

use crate::models::{LoginRequest, RegisterRequest};
use crate::services::{ApiClient, LocalCredentialStore, MarketplaceApi};
use crate::stores::{SessionAction, SessionStore};
use crate::viewmodels::SessionViewModel;

#[derive(Clone, PartialEq)]
pub struct SessionHandle {
    pub state: UseReducerHandle<SessionStore>,
    pub login: Callback<LoginRequest>,
    pub register: Callback<RegisterRequest>,
    pub logout: Callback<()>,
    pub clear_error: Callback<()>,
}

impl SessionHandle {
    /// Cliente con la credencial actual, si la hay
    pub fn api(&self) -> ApiClient {
        ApiClient::new().with_credential(self.state.credential.clone())
    }
}

fn view_model() -> SessionViewModel<ApiClient, LocalCredentialStore> {
    SessionViewModel::new(ApiClient::new(), LocalCredentialStore::default())
}

#[hook]
pub fn use_session_store() -> SessionHandle {
    let state = use_reducer(SessionStore::default);

    // Validar la credencial guardada una sola vez, al montar
    {
        let dispatcher = state.dispatcher();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                let restored = view_model().initialize().await;
                dispatcher.dispatch(SessionAction::Restored(restored));
            });
            || ()
        });
    }

    let login = use_callback(state.dispatcher(), |request: LoginRequest, dispatcher| {
        dispatcher.dispatch(SessionAction::Submitting);
        let dispatcher = dispatcher.clone();
        wasm_bindgen_futures::spawn_local(async move {
            match view_model().login(request).await {
                Ok(authenticated) => dispatcher.dispatch(SessionAction::SignedIn(authenticated)),
                Err(message) => dispatcher.dispatch(SessionAction::Failed(message)),
            }
        });
    });

    let register = use_callback(state.dispatcher(), |request: RegisterRequest, dispatcher| {
        dispatcher.dispatch(SessionAction::Submitting);
        let dispatcher = dispatcher.clone();
        wasm_bindgen_futures::spawn_local(async move {
            match view_model().register(request).await {
                Ok(authenticated) => dispatcher.dispatch(SessionAction::SignedIn(authenticated)),
                Err(message) => dispatcher.dispatch(SessionAction::Failed(message)),
            }
        });
    });

    let logout = use_callback(state.dispatcher(), |_: (), dispatcher| {
        view_model().logout();
        dispatcher.dispatch(SessionAction::SignedOut);
    });

    let clear_error = use_callback(state.dispatcher(), |_: (), dispatcher| {
        dispatcher.dispatch(SessionAction::ClearError);
    });

    SessionHandle {
        state,
        login,
        register,
        logout,
        clear_error,
    }
}
