// ============================================================================
// ROUTE GUARDS
// ============================================================================
// Se re-evalúan en cada cambio de sesión: un logout con una vista protegida
// montada manda al visitante a /login al instante
// ============================================================================

use yew::prelude::*;
use yew_router::prelude::*;

use super::feedback::Spinner;
use super::routes::Route;
use crate::hooks::use_session;
use crate::stores::SessionStore;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardState {
    /// Credencial guardada aún sin validar: ni contenido ni redirección
    Initializing,
    Allowed,
    Denied,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    Authenticated,
    Admin,
}

pub fn evaluate(session: &SessionStore, access: Access) -> GuardState {
    if session.initializing {
        return GuardState::Initializing;
    }
    let allowed = match access {
        Access::Authenticated => session.is_authenticated(),
        Access::Admin => session.is_authenticated() && session.is_admin(),
    };
    if allowed {
        GuardState::Allowed
    } else {
        GuardState::Denied
    }
}

#[derive(Properties, PartialEq)]
pub struct GuardProps {
    pub children: Children,
}

fn guard(access: Access, children: &Children) -> Html {
    html! { <Guard {access}>{children.clone()}</Guard> }
}

#[derive(Properties, PartialEq)]
struct InnerGuardProps {
    access: Access,
    children: Children,
}

#[function_component(Guard)]
fn guard_view(props: &InnerGuardProps) -> Html {
    let session = use_session();
    match evaluate(&session.state, props.access) {
        GuardState::Initializing => html! { <Spinner /> },
        GuardState::Allowed => html! { <>{props.children.clone()}</> },
        GuardState::Denied => {
            log::debug!("🔒 Acceso {:?} denegado, redirigiendo a login", props.access);
            html! { <Redirect<Route> to={Route::Login} /> }
        }
    }
}

/// Cualquier identidad autenticada
#[function_component(RequireAuth)]
pub fn require_auth(props: &GuardProps) -> Html {
    guard(Access::Authenticated, &props.children)
}

/// Solo administradores; cualquier otro se trata como anónimo
#[function_component(RequireAdmin)]
pub fn require_admin(props: &GuardProps) -> Html {
    guard(Access::Admin, &props.children)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Authenticated, Credential, Identity, Role};
    use crate::stores::SessionAction;
    use std::rc::Rc;
    use yew::Reducible;

    fn signed_in(role: Role) -> SessionStore {
        let authenticated = Authenticated {
            identity: Identity { id: 1, email: "someone@ecowaste.test".into(), role },
            credential: Credential::new("token"),
        };
        (*Rc::new(SessionStore::default()).reduce(SessionAction::SignedIn(authenticated))).clone()
    }

    fn anonymous() -> SessionStore {
        (*Rc::new(SessionStore::default()).reduce(SessionAction::Restored(None))).clone()
    }

    #[test]
    fn initializing_renders_neither_content_nor_redirect() {
        let session = SessionStore::default();
        assert_eq!(evaluate(&session, Access::Authenticated), GuardState::Initializing);
        assert_eq!(evaluate(&session, Access::Admin), GuardState::Initializing);
    }

    #[test]
    fn authenticated_guard() {
        assert_eq!(evaluate(&anonymous(), Access::Authenticated), GuardState::Denied);
        assert_eq!(evaluate(&signed_in(Role::Company), Access::Authenticated), GuardState::Allowed);
        assert_eq!(evaluate(&signed_in(Role::Admin), Access::Authenticated), GuardState::Allowed);
    }

    #[test]
    fn company_is_denied_admin_like_anonymous() {
        assert_eq!(evaluate(&signed_in(Role::Company), Access::Admin), GuardState::Denied);
        assert_eq!(evaluate(&anonymous(), Access::Admin), evaluate(&signed_in(Role::Company), Access::Admin));
        assert_eq!(evaluate(&signed_in(Role::Admin), Access::Admin), GuardState::Allowed);
    }

    #[test]
    fn logout_while_mounted_flips_to_denied() {
        let session = Rc::new(signed_in(Role::Admin));
        assert_eq!(evaluate(&session, Access::Admin), GuardState::Allowed);

        let after = session.reduce(SessionAction::SignedOut);
        assert!(!after.initializing);
        assert_eq!(evaluate(&after, Access::Admin), GuardState::Denied);
    }
}
