// ============================================================================
// SESSION CONTEXT - comparte el handle de sesión con todo el árbol
// ============================================================================

use yew::prelude::*;

use crate::hooks::use_session::{use_session_store, SessionHandle};

#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    pub children: Children,
}

/// Envuelve la app; dueño del único store de sesión
#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    let session = use_session_store();

    html! {
        <ContextProvider<SessionHandle> context={session}>
            {props.children.clone()}
        </ContextProvider<SessionHandle>>
    }
}

/// Handle de sesión del `SessionProvider` más cercano
#[hook]
pub fn use_session() -> SessionHandle {
    match use_context::<SessionHandle>() {
        Some(handle) => handle,
        None => panic!("use_session() called outside of <SessionProvider>"),
    }
}
