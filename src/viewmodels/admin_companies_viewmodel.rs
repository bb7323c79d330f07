// ============================================================================
// ADMIN COMPANIES VIEWMODEL
// ============================================================================
// Tabla de empresas con búsqueda local, borrado confirmado con contraseña y
// un estado temporizado por fila para el reset de contraseña:
//   Idle -> Pending -> (Succeeded | Failed) -> Idle
// Los timers son del hook; este módulo solo decide las transiciones
// ============================================================================

use std::collections::HashMap;
use std::rc::Rc;

use yew::Reducible;

use super::search::{filter_companies, SearchFields};
use crate::models::{Company, CompanyId};
use crate::services::MarketplaceApi;

pub const LOAD_FAILED: &str = "Failed to load companies";
pub const DELETE_FAILED: &str = "Failed to delete company. Please check your password and try again.";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RowStatus {
    #[default]
    Idle,
    Pending,
    Succeeded,
    Failed,
}

impl RowStatus {
    pub fn is_settled(self) -> bool {
        matches!(self, Self::Succeeded | Self::Failed)
    }
}

/// Diálogo "Confirm Deletion" abierto
#[derive(Clone, Debug, PartialEq)]
pub struct DeleteConfirmation {
    pub company_id: CompanyId,
    pub password: String,
    pub submitting: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AdminCompaniesState {
    pub companies: Vec<Company>,
    pub search: String,
    pub loading: bool,
    pub error: Option<String>,
    pub confirmation: Option<DeleteConfirmation>,
    statuses: HashMap<CompanyId, RowStatus>,
}

impl Default for AdminCompaniesState {
    fn default() -> Self {
        Self {
            companies: Vec::new(),
            search: String::new(),
            loading: true,
            error: None,
            confirmation: None,
            statuses: HashMap::new(),
        }
    }
}

impl AdminCompaniesState {
    pub fn visible_companies(&self) -> Vec<Company> {
        filter_companies(&self.companies, &self.search, SearchFields::ADMIN)
    }

    /// "No companies found" solo tras una carga correcta
    pub fn is_empty_result(&self) -> bool {
        !self.loading && self.error.is_none() && self.visible_companies().is_empty()
    }

    pub fn status_of(&self, id: CompanyId) -> RowStatus {
        self.statuses.get(&id).copied().unwrap_or_default()
    }

    /// El botón de confirmar solo se activa con contraseña y sin request en curso
    pub fn can_confirm_delete(&self) -> bool {
        self.confirmation
            .as_ref()
            .map_or(false, |c| !c.password.is_empty() && !c.submitting)
    }

    fn has_row(&self, id: CompanyId) -> bool {
        self.companies.iter().any(|c| c.id == id)
    }
}

pub enum AdminCompaniesAction {
    Loaded(Result<Vec<Company>, String>),
    SearchChanged(String),
    OpenDelete(CompanyId),
    PasswordChanged(String),
    CancelDelete,
    DeleteStarted,
    Deleted(CompanyId),
    DeleteFailed(String),
    ResetStarted(CompanyId),
    ResetFinished { id: CompanyId, succeeded: bool },
    /// Vuelta diferida a idle; se ignora si la fila ya no está u otra vez ocupada
    ResetExpired(CompanyId),
    DismissError,
}

impl Reducible for AdminCompaniesState {
    type Action = AdminCompaniesAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            AdminCompaniesAction::Loaded(Ok(companies)) => {
                next.statuses = companies.iter().map(|c| (c.id, RowStatus::Idle)).collect();
                next.companies = companies;
                next.loading = false;
                next.error = None;
            }
            AdminCompaniesAction::Loaded(Err(message)) => {
                next.loading = false;
                next.error = Some(message);
            }
            AdminCompaniesAction::SearchChanged(term) => next.search = term,
            AdminCompaniesAction::OpenDelete(company_id) => {
                next.confirmation = Some(DeleteConfirmation {
                    company_id,
                    password: String::new(),
                    submitting: false,
                });
            }
            AdminCompaniesAction::PasswordChanged(password) => match next.confirmation.as_mut() {
                Some(confirmation) => confirmation.password = password,
                None => return self,
            },
            AdminCompaniesAction::CancelDelete => next.confirmation = None,
            AdminCompaniesAction::DeleteStarted => match next.confirmation.as_mut() {
                Some(confirmation) => confirmation.submitting = true,
                None => return self,
            },
            AdminCompaniesAction::Deleted(id) => {
                next.companies.retain(|c| c.id != id);
                next.statuses.remove(&id);
                next.confirmation = None;
            }
            AdminCompaniesAction::DeleteFailed(message) => {
                next.error = Some(message);
                if let Some(confirmation) = next.confirmation.as_mut() {
                    confirmation.submitting = false;
                }
            }
            AdminCompaniesAction::ResetStarted(id) => {
                if !self.has_row(id) || self.status_of(id) == RowStatus::Pending {
                    return self;
                }
                next.statuses.insert(id, RowStatus::Pending);
            }
            AdminCompaniesAction::ResetFinished { id, succeeded } => {
                if !self.has_row(id) {
                    return self;
                }
                let status = if succeeded { RowStatus::Succeeded } else { RowStatus::Failed };
                next.statuses.insert(id, status);
            }
            AdminCompaniesAction::ResetExpired(id) => {
                if !self.has_row(id) || !self.status_of(id).is_settled() {
                    return self;
                }
                next.statuses.insert(id, RowStatus::Idle);
            }
            AdminCompaniesAction::DismissError => next.error = None,
        }
        Rc::new(next)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum DeleteOutcome {
    /// Sin contraseña, no se envió nada
    Skipped,
    Deleted(CompanyId),
    Failed(String),
}

#[derive(Clone)]
pub struct AdminCompaniesViewModel<A> {
    api: A,
}

impl<A: MarketplaceApi> AdminCompaniesViewModel<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    pub async fn load(&self) -> Result<Vec<Company>, String> {
        log::info!("📋 Cargando empresas (admin)");
        self.api.admin_companies().await.map_err(|e| {
            log::error!("❌ Error cargando empresas: {}", e);
            LOAD_FAILED.to_string()
        })
    }

    pub async fn delete(&self, confirmation: &DeleteConfirmation) -> DeleteOutcome {
        if confirmation.password.is_empty() {
            return DeleteOutcome::Skipped;
        }
        let id = confirmation.company_id;
        log::info!("🗑️ Eliminando empresa {}", id);
        match self.api.delete_company(id, &confirmation.password).await {
            Ok(()) => {
                log::info!("✅ Empresa {} eliminada", id);
                DeleteOutcome::Deleted(id)
            }
            Err(e) => {
                log::error!("❌ Error eliminando empresa {}: {}", id, e);
                DeleteOutcome::Failed(DELETE_FAILED.to_string())
            }
        }
    }

    /// `true` si la API aceptó el reset
    pub async fn reset_password(&self, id: CompanyId) -> bool {
        log::info!("🔑 Reseteando contraseña de la empresa {}", id);
        match self.api.reset_company_password(id).await {
            Ok(()) => true,
            Err(e) => {
                log::error!("❌ Falló el reset de contraseña de la empresa {}: {}", id, e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Credential;
    use crate::test_support::{FakeApi, ADMIN_PASSWORD};
    use futures::executor::block_on;

    fn admin_api() -> FakeApi {
        FakeApi::seeded().with_credential(Some(Credential::new("admin-token")))
    }

    fn loaded(vm: &AdminCompaniesViewModel<FakeApi>) -> Rc<AdminCompaniesState> {
        let result = block_on(vm.load());
        Rc::new(AdminCompaniesState::default()).reduce(AdminCompaniesAction::Loaded(result))
    }

    fn confirmation(id: CompanyId, password: &str) -> DeleteConfirmation {
        DeleteConfirmation { company_id: id, password: password.into(), submitting: false }
    }

    #[test]
    fn load_initializes_every_row_idle() {
        let state = loaded(&AdminCompaniesViewModel::new(admin_api()));
        assert_eq!(state.companies.len(), 2);
        assert!(!state.loading);
        assert_eq!(state.status_of(1), RowStatus::Idle);
        assert_eq!(state.status_of(2), RowStatus::Idle);
    }

    #[test]
    fn load_without_admin_credential_fails() {
        let vm = AdminCompaniesViewModel::new(FakeApi::seeded());
        let state = loaded(&vm);
        assert_eq!(state.error.as_deref(), Some(LOAD_FAILED));
        assert!(state.companies.is_empty());
    }

    #[test]
    fn failed_load_is_not_an_empty_list() {
        let state = loaded(&AdminCompaniesViewModel::new(FakeApi::seeded()));
        assert!(state.error.is_some());
        assert!(!state.is_empty_result());

        let state = Rc::new(AdminCompaniesState::default()).reduce(AdminCompaniesAction::Loaded(Ok(Vec::new())));
        assert!(state.is_empty_result());
    }

    #[test]
    fn empty_password_sends_nothing() {
        let api = admin_api();
        let vm = AdminCompaniesViewModel::new(api.clone());

        let outcome = block_on(vm.delete(&confirmation(1, "")));
        assert_eq!(outcome, DeleteOutcome::Skipped);
        assert_eq!(api.count("delete_company"), 0);
    }

    #[test]
    fn confirm_button_requires_password() {
        let state = Rc::new(AdminCompaniesState::default()).reduce(AdminCompaniesAction::OpenDelete(1));
        assert!(!state.can_confirm_delete());

        let state = state.reduce(AdminCompaniesAction::PasswordChanged("x".into()));
        assert!(state.can_confirm_delete());

        let state = state.reduce(AdminCompaniesAction::DeleteStarted);
        assert!(!state.can_confirm_delete());
    }

    #[test]
    fn successful_delete_splices_row_and_closes_dialog() {
        let vm = AdminCompaniesViewModel::new(admin_api());
        let mut state = loaded(&vm);
        state = state.reduce(AdminCompaniesAction::OpenDelete(1));
        state = state.reduce(AdminCompaniesAction::PasswordChanged(ADMIN_PASSWORD.into()));

        let outcome = block_on(vm.delete(state.confirmation.as_ref().unwrap()));
        assert_eq!(outcome, DeleteOutcome::Deleted(1));
        state = state.reduce(AdminCompaniesAction::Deleted(1));

        assert_eq!(state.companies.len(), 1);
        assert_eq!(state.companies[0].name, "GreenBin");
        assert_eq!(state.confirmation, None);
    }

    #[test]
    fn wrong_password_keeps_list_and_dialog() {
        let vm = AdminCompaniesViewModel::new(admin_api());
        let mut state = loaded(&vm);
        state = state.reduce(AdminCompaniesAction::OpenDelete(2));
        state = state.reduce(AdminCompaniesAction::PasswordChanged("guess".into()));
        state = state.reduce(AdminCompaniesAction::DeleteStarted);

        match block_on(vm.delete(state.confirmation.as_ref().unwrap())) {
            DeleteOutcome::Failed(message) => {
                state = state.reduce(AdminCompaniesAction::DeleteFailed(message));
            }
            other => panic!("unexpected outcome {:?}", other),
        }

        assert_eq!(state.error.as_deref(), Some(DELETE_FAILED));
        assert_eq!(state.companies.len(), 2);
        let dialog = state.confirmation.as_ref().unwrap();
        assert_eq!(dialog.company_id, 2);
        assert!(!dialog.submitting);
    }

    #[test]
    fn reset_status_cycles_back_to_idle() {
        let api = admin_api();
        let vm = AdminCompaniesViewModel::new(api.clone());
        let mut state = loaded(&vm);

        state = state.reduce(AdminCompaniesAction::ResetStarted(1));
        assert_eq!(state.status_of(1), RowStatus::Pending);

        let succeeded = block_on(vm.reset_password(1));
        state = state.reduce(AdminCompaniesAction::ResetFinished { id: 1, succeeded });
        assert_eq!(state.status_of(1), RowStatus::Succeeded);

        state = state.reduce(AdminCompaniesAction::ResetExpired(1));
        assert_eq!(state.status_of(1), RowStatus::Idle);
        assert_eq!(api.count("reset_password"), 1);
    }

    #[test]
    fn failed_reset_shows_failure_then_idle() {
        let api = admin_api();
        api.fail("reset_password");
        let vm = AdminCompaniesViewModel::new(api);
        let mut state = loaded(&vm).reduce(AdminCompaniesAction::ResetStarted(2));

        let succeeded = block_on(vm.reset_password(2));
        state = state.reduce(AdminCompaniesAction::ResetFinished { id: 2, succeeded });
        assert_eq!(state.status_of(2), RowStatus::Failed);
        assert_eq!(state.status_of(1), RowStatus::Idle);

        state = state.reduce(AdminCompaniesAction::ResetExpired(2));
        assert_eq!(state.status_of(2), RowStatus::Idle);
    }

    #[test]
    fn pending_row_ignores_a_second_reset() {
        let state = loaded(&AdminCompaniesViewModel::new(admin_api()))
            .reduce(AdminCompaniesAction::ResetStarted(1));
        let again = Rc::clone(&state).reduce(AdminCompaniesAction::ResetStarted(1));
        assert!(Rc::ptr_eq(&state, &again));
    }

    #[test]
    fn expiry_for_removed_row_does_nothing() {
        let vm = AdminCompaniesViewModel::new(admin_api());
        let mut state = loaded(&vm);
        state = state.reduce(AdminCompaniesAction::ResetStarted(1));
        state = state.reduce(AdminCompaniesAction::ResetFinished { id: 1, succeeded: true });
        state = state.reduce(AdminCompaniesAction::Deleted(1));

        let after = Rc::clone(&state).reduce(AdminCompaniesAction::ResetExpired(1));
        assert!(Rc::ptr_eq(&state, &after));
        assert_eq!(after.status_of(1), RowStatus::Idle);
    }

    #[test]
    fn expiry_does_not_cut_a_new_request_short() {
        let mut state = loaded(&AdminCompaniesViewModel::new(admin_api()));
        state = state.reduce(AdminCompaniesAction::ResetStarted(1));
        state = state.reduce(AdminCompaniesAction::ResetFinished { id: 1, succeeded: true });
        state = state.reduce(AdminCompaniesAction::ResetStarted(1));

        state = state.reduce(AdminCompaniesAction::ResetExpired(1));
        assert_eq!(state.status_of(1), RowStatus::Pending);
    }

    #[test]
    fn admin_search_matches_email() {
        let state = loaded(&AdminCompaniesViewModel::new(admin_api()))
            .reduce(AdminCompaniesAction::SearchChanged("CONTACT@GREENBIN".into()));
        let visible = state.visible_companies();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, 2);
    }
}
