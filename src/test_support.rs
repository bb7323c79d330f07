//! Dobles en memoria del puerto de la API y del almacén de credenciales.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use async_trait::async_trait;
use futures::channel::oneshot;

use crate::models::{
    AuthResponse, Company, CompanyId, Credential, DashboardStats, Identity, LoginRequest,
    ProfileUpdate, RegionCount, RegisterRequest, Region, RegionId, Role,
};
use crate::services::{ApiError, CredentialStore, MarketplaceApi};

pub const ADMIN_PASSWORD: &str = "admin-secret";

pub struct Account {
    pub email: String,
    pub password: String,
    pub identity: Identity,
    pub token: String,
}

#[derive(Default)]
pub struct FakeState {
    pub accounts: Vec<Account>,
    pub regions: Vec<Region>,
    pub companies: Vec<Company>,
    pub profile: Option<Company>,
    /// Operaciones que fallan con error de transporte
    pub failing: HashSet<&'static str>,
    /// Cada llamada, en orden, como "operación" u "operación:arg"
    pub calls: Vec<String>,
    /// Operaciones que esperan su compuerta antes de responder
    held: HashMap<&'static str, oneshot::Receiver<()>>,
    next_id: i64,
}

/// Sustituto programable de la API de EcoWaste
#[derive(Clone, Default)]
pub struct FakeApi {
    state: Rc<RefCell<FakeState>>,
    credential: Option<Credential>,
}

pub fn region(id: RegionId, name: &str) -> Region {
    Region { id, name: name.to_string() }
}

pub fn company(id: CompanyId, name: &str, description: &str, regions: Vec<Region>) -> Company {
    Company {
        id,
        name: name.to_string(),
        user_id: None,
        phone: "555-0100".to_string(),
        email: format!("contact@{}.test", name.to_lowercase().replace(' ', "")),
        description: description.to_string(),
        regions,
    }
}

impl FakeApi {
    /// Acme Waste cubre North, GreenBin cubre South; una cuenta admin y una de empresa
    pub fn seeded() -> Self {
        let api = Self::default();
        {
            let mut state = api.state.borrow_mut();
            state.regions = vec![region(1, "North"), region(2, "South")];
            state.companies = vec![
                company(1, "Acme Waste", "Weekly curbside pickup", vec![region(1, "North")]),
                company(2, "GreenBin", "Compost and recycling", vec![region(2, "South")]),
            ];
            state.profile = Some(company(1, "Acme Waste", "Weekly curbside pickup", vec![region(1, "North")]));
            state.accounts = vec![
                Account {
                    email: "admin@ecowaste.test".into(),
                    password: ADMIN_PASSWORD.into(),
                    identity: Identity { id: 1, email: "admin@ecowaste.test".into(), role: Role::Admin },
                    token: "admin-token".into(),
                },
                Account {
                    email: "contact@acmewaste.test".into(),
                    password: "acme-pass".into(),
                    identity: Identity { id: 2, email: "contact@acmewaste.test".into(), role: Role::Company },
                    token: "company-token".into(),
                },
            ];
            state.next_id = 100;
        }
        api
    }

    pub fn fail(&self, operation: &'static str) {
        self.state.borrow_mut().failing.insert(operation);
    }

    pub fn recover(&self, operation: &'static str) {
        self.state.borrow_mut().failing.remove(operation);
    }

    /// La próxima llamada a `operation` espera hasta que se dispare el sender devuelto
    pub fn hold(&self, operation: &'static str) -> oneshot::Sender<()> {
        let (release, gate) = oneshot::channel();
        self.state.borrow_mut().held.insert(operation, gate);
        release
    }

    async fn wait_if_held(&self, operation: &'static str) {
        let gate = self.state.borrow_mut().held.remove(operation);
        if let Some(gate) = gate {
            let _ = gate.await;
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.state.borrow().calls.clone()
    }

    pub fn count(&self, operation: &str) -> usize {
        self.state
            .borrow()
            .calls
            .iter()
            .filter(|c| c.as_str() == operation || c.starts_with(&format!("{}:", operation)))
            .count()
    }

    pub fn state(&self) -> std::cell::RefMut<'_, FakeState> {
        self.state.borrow_mut()
    }

    fn record(&self, operation: &'static str, arg: Option<String>) -> Result<(), ApiError> {
        let mut state = self.state.borrow_mut();
        state.calls.push(match arg {
            Some(arg) => format!("{}:{}", operation, arg),
            None => operation.to_string(),
        });
        if state.failing.contains(operation) {
            return Err(ApiError::transport("connection refused"));
        }
        Ok(())
    }

    fn next_id(&self) -> i64 {
        let mut state = self.state.borrow_mut();
        state.next_id += 1;
        state.next_id
    }

    fn require_role(&self, role: Role) -> Result<Identity, ApiError> {
        let token = self
            .credential
            .as_ref()
            .ok_or(ApiError::Unauthorized { message: Some("Token is missing!".into()) })?;
        let state = self.state.borrow();
        let identity = state
            .accounts
            .iter()
            .find(|a| a.token == token.as_str())
            .map(|a| a.identity.clone())
            .ok_or(ApiError::Unauthorized { message: Some("Invalid token!".into()) })?;
        if identity.role != role {
            return Err(ApiError::Rejected { status: 403, message: Some("Admin privileges required!".into()) });
        }
        Ok(identity)
    }
}

#[async_trait(?Send)]
impl MarketplaceApi for FakeApi {
    fn with_credential(&self, credential: Option<Credential>) -> Self {
        Self { state: Rc::clone(&self.state), credential }
    }

    async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ApiError> {
        self.record("login", Some(request.email.clone()))?;
        let state = self.state.borrow();
        state
            .accounts
            .iter()
            .find(|a| a.email == request.email && a.password == request.password)
            .map(|a| AuthResponse { user: a.identity.clone(), token: Credential::new(a.token.clone()) })
            .ok_or(ApiError::Unauthorized { message: Some("Invalid email or password".into()) })
    }

    async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        self.record("register", Some(request.email.clone()))?;
        if self.state.borrow().accounts.iter().any(|a| a.email == request.email) {
            return Err(ApiError::Rejected { status: 400, message: Some("Email already registered".into()) });
        }
        let id = self.next_id();
        let identity = Identity { id, email: request.email.clone(), role: Role::Company };
        let token = format!("token-{}", id);
        self.state.borrow_mut().accounts.push(Account {
            email: request.email.clone(),
            password: request.password.clone(),
            identity: identity.clone(),
            token: token.clone(),
        });
        Ok(AuthResponse { user: identity, token: Credential::new(token) })
    }

    async fn current_identity(&self) -> Result<Identity, ApiError> {
        self.record("me", None)?;
        self.wait_if_held("me").await;
        let token = self
            .credential
            .as_ref()
            .ok_or(ApiError::Unauthorized { message: Some("Token is missing!".into()) })?;
        let state = self.state.borrow();
        state
            .accounts
            .iter()
            .find(|a| a.token == token.as_str())
            .map(|a| a.identity.clone())
            .ok_or(ApiError::Unauthorized { message: Some("Invalid token!".into()) })
    }

    async fn list_regions(&self) -> Result<Vec<Region>, ApiError> {
        self.record("regions", None)?;
        Ok(self.state.borrow().regions.clone())
    }

    async fn list_companies(&self, region: Option<RegionId>) -> Result<Vec<Company>, ApiError> {
        self.record("companies", region.map(|r| r.to_string()))?;
        let state = self.state.borrow();
        Ok(state
            .companies
            .iter()
            .filter(|c| region.map_or(true, |r| c.serves(r)))
            .cloned()
            .collect())
    }

    async fn company_profile(&self) -> Result<Company, ApiError> {
        self.record("profile", None)?;
        self.state
            .borrow()
            .profile
            .clone()
            .ok_or(ApiError::Rejected { status: 404, message: Some("Company profile not found".into()) })
    }

    /// Normaliza como el servidor real: recorta el nombre y pasa el email a minúsculas
    async fn update_company_profile(&self, update: &ProfileUpdate) -> Result<Company, ApiError> {
        self.record("update_profile", None)?;
        let mut state = self.state.borrow_mut();
        let regions: Vec<Region> = state
            .regions
            .iter()
            .filter(|r| update.region_ids.contains(&r.id))
            .cloned()
            .collect();
        let profile = state
            .profile
            .as_mut()
            .ok_or(ApiError::Rejected { status: 404, message: Some("Company profile not found".into()) })?;
        profile.name = update.name.trim().to_string();
        profile.email = update.email.trim().to_lowercase();
        profile.phone = update.phone.clone();
        profile.description = update.description.clone();
        profile.regions = regions;
        Ok(profile.clone())
    }

    async fn admin_companies(&self) -> Result<Vec<Company>, ApiError> {
        self.record("admin_companies", None)?;
        self.require_role(Role::Admin)?;
        Ok(self.state.borrow().companies.clone())
    }

    async fn delete_company(&self, id: CompanyId, password: &str) -> Result<(), ApiError> {
        self.record("delete_company", Some(id.to_string()))?;
        self.require_role(Role::Admin)?;
        if password != ADMIN_PASSWORD {
            return Err(ApiError::Rejected { status: 403, message: Some("Invalid password".into()) });
        }
        self.state.borrow_mut().companies.retain(|c| c.id != id);
        Ok(())
    }

    async fn reset_company_password(&self, id: CompanyId) -> Result<(), ApiError> {
        self.record("reset_password", Some(id.to_string()))?;
        self.require_role(Role::Admin)?;
        Ok(())
    }

    async fn admin_regions(&self) -> Result<Vec<Region>, ApiError> {
        self.record("admin_regions", None)?;
        self.require_role(Role::Admin)?;
        Ok(self.state.borrow().regions.clone())
    }

    async fn create_region(&self, name: &str) -> Result<Region, ApiError> {
        self.record("create_region", Some(name.to_string()))?;
        self.require_role(Role::Admin)?;
        if self.state.borrow().regions.iter().any(|r| r.name == name) {
            return Err(ApiError::Rejected { status: 400, message: Some("Region already exists".into()) });
        }
        let created = region(self.next_id(), name);
        self.state.borrow_mut().regions.push(created.clone());
        Ok(created)
    }

    async fn update_region(&self, id: RegionId, name: &str) -> Result<Region, ApiError> {
        self.record("update_region", Some(id.to_string()))?;
        self.require_role(Role::Admin)?;
        let mut state = self.state.borrow_mut();
        let existing = state
            .regions
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(ApiError::Rejected { status: 404, message: Some("Region not found".into()) })?;
        existing.name = name.to_string();
        Ok(existing.clone())
    }

    async fn delete_region(&self, id: RegionId) -> Result<(), ApiError> {
        self.record("delete_region", Some(id.to_string()))?;
        self.require_role(Role::Admin)?;
        self.state.borrow_mut().regions.retain(|r| r.id != id);
        Ok(())
    }

    async fn admin_stats(&self) -> Result<DashboardStats, ApiError> {
        self.record("stats", None)?;
        self.require_role(Role::Admin)?;
        let state = self.state.borrow();
        Ok(DashboardStats {
            total_companies: state.companies.len() as u32,
            total_regions: state.regions.len() as u32,
            companies_per_region: state
                .regions
                .iter()
                .map(|r| RegionCount {
                    region_name: r.name.clone(),
                    count: state.companies.iter().filter(|c| c.serves(r.id)).count() as u32,
                })
                .collect(),
        })
    }
}

/// Sustituto de `localStorage`; los clones comparten el slot, como dos cargas de página
#[derive(Clone, Default)]
pub struct MemoryCredentialStore {
    slot: Rc<RefCell<Option<Credential>>>,
    pub fail_writes: bool,
}

impl MemoryCredentialStore {
    pub fn holding(token: &str) -> Self {
        let store = Self::default();
        *store.slot.borrow_mut() = Some(Credential::new(token));
        store
    }

    pub fn failing_writes() -> Self {
        Self { fail_writes: true, ..Self::default() }
    }

    pub fn current(&self) -> Option<Credential> {
        self.slot.borrow().clone()
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn load(&self) -> Option<Credential> {
        self.slot.borrow().clone()
    }

    fn save(&self, credential: &Credential) -> Result<(), ApiError> {
        if self.fail_writes {
            return Err(ApiError::Storage { message: "quota exceeded".into() });
        }
        *self.slot.borrow_mut() = Some(credential.clone());
        Ok(())
    }

    fn clear(&self) {
        *self.slot.borrow_mut() = None;
    }
}
