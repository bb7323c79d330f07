// ============================================================================
// SESSION STORE
// ============================================================================
// Único escritor de "quién ha iniciado sesión". Solo cambia vía SessionAction;
// los flags de rol se calculan desde la identidad en cada lectura
// ============================================================================

use std::rc::Rc;

use yew::Reducible;

use crate::models::{Authenticated, Credential, Identity, Role};

#[derive(Clone, Debug, PartialEq)]
pub struct SessionStore {
    pub identity: Option<Identity>,
    pub credential: Option<Credential>,
    /// `true` hasta que se valida la credencial guardada (si existe)
    pub initializing: bool,
    /// Hay un login o registro en curso
    pub pending: bool,
    pub error: Option<String>,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self {
            identity: None,
            credential: None,
            initializing: true,
            pending: false,
            error: None,
        }
    }
}

impl SessionStore {
    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }

    pub fn role(&self) -> Option<Role> {
        self.identity.as_ref().map(|identity| identity.role)
    }

    pub fn is_admin(&self) -> bool {
        self.role() == Some(Role::Admin)
    }

    pub fn is_company(&self) -> bool {
        self.role() == Some(Role::Company)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum SessionAction {
    /// Validación inicial terminada; `None` = nadie ha iniciado sesión
    Restored(Option<Authenticated>),
    Submitting,
    SignedIn(Authenticated),
    Failed(String),
    SignedOut,
    ClearError,
}

impl Reducible for SessionStore {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            SessionAction::Restored(restored) => {
                // La inicialización se resuelve una sola vez; un duplicado tardío no
                // puede pisar un login ocurrido entre medias
                if !self.initializing {
                    return self;
                }
                next.initializing = false;
                if let Some(auth) = restored {
                    next.identity = Some(auth.identity);
                    next.credential = Some(auth.credential);
                }
            }
            SessionAction::Submitting => {
                next.pending = true;
                next.error = None;
            }
            SessionAction::SignedIn(auth) => {
                next.identity = Some(auth.identity);
                next.credential = Some(auth.credential);
                next.pending = false;
                next.error = None;
                next.initializing = false;
            }
            SessionAction::Failed(message) => {
                next.pending = false;
                next.error = Some(message);
            }
            SessionAction::SignedOut => {
                next.identity = None;
                next.credential = None;
                next.pending = false;
                next.error = None;
            }
            SessionAction::ClearError => {
                if self.error.is_none() {
                    return self;
                }
                next.error = None;
            }
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn auth(role: Role) -> Authenticated {
        Authenticated {
            identity: Identity { id: 1, email: "a@b.co".into(), role },
            credential: Credential::new("tok"),
        }
    }

    fn reduce(store: SessionStore, action: SessionAction) -> SessionStore {
        (*Rc::new(store).reduce(action)).clone()
    }

    #[test]
    fn starts_initializing_and_anonymous() {
        let store = SessionStore::default();
        assert!(store.initializing);
        assert!(!store.is_authenticated());
        assert!(!store.is_admin());
        assert!(!store.is_company());
    }

    #[test]
    fn restore_resolves_initializing_exactly_once() {
        let store = reduce(SessionStore::default(), SessionAction::Restored(None));
        assert!(!store.initializing);

        let signed_in = reduce(store, SessionAction::SignedIn(auth(Role::Company)));
        let after_late_restore = reduce(signed_in.clone(), SessionAction::Restored(None));
        assert_eq!(after_late_restore, signed_in);
        assert!(after_late_restore.is_company());
    }

    #[test]
    fn flags_follow_identity_role() {
        let admin = reduce(SessionStore::default(), SessionAction::Restored(Some(auth(Role::Admin))));
        assert!(admin.is_authenticated());
        assert!(admin.is_admin());
        assert!(!admin.is_company());
        assert_eq!(admin.credential, Some(Credential::new("tok")));
    }

    #[test]
    fn failure_keeps_identity_and_reports() {
        let signed_in = reduce(SessionStore::default(), SessionAction::SignedIn(auth(Role::Company)));
        let submitting = reduce(signed_in, SessionAction::Submitting);
        assert!(submitting.pending);

        let failed = reduce(submitting, SessionAction::Failed("Invalid email or password".into()));
        assert!(!failed.pending);
        assert!(failed.is_company());
        assert_eq!(failed.error.as_deref(), Some("Invalid email or password"));

        let cleared = reduce(failed, SessionAction::ClearError);
        assert_eq!(cleared.error, None);
    }

    #[test]
    fn sign_out_clears_identity_and_credential() {
        let signed_in = reduce(SessionStore::default(), SessionAction::Restored(Some(auth(Role::Admin))));
        let out = reduce(signed_in, SessionAction::SignedOut);
        assert!(!out.is_authenticated());
        assert_eq!(out.credential, None);
        assert!(!out.initializing);
    }
}
