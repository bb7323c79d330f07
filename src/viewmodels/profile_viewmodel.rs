// ============================================================================
// PROFILE VIEWMODEL - DASHBOARD DE EMPRESA Y FORMULARIO DE REGISTRO
// ============================================================================
// Los formularios validan hacia payloads de request; guardar en el dashboard
// siempre recarga el perfil para mostrar lo que guardó el servidor
// ============================================================================

use std::rc::Rc;

use yew::Reducible;

use crate::models::{Company, ProfileUpdate, Region, RegionId, RegisterRequest};
use crate::services::MarketplaceApi;
use crate::utils::validation::{FieldErrors, Validator, MIN_DESCRIPTION_CHARS, MIN_PASSWORD_CHARS};

pub const LOAD_FAILED: &str = "Failed to load company data. Please try again.";
pub const UPDATE_FAILED: &str = "Failed to update company profile. Please try again.";
pub const UPDATED: &str = "Company profile updated successfully!";

/// Añade o quita `id` de la selección, manteniendo el orden de elección
pub fn toggle_region(selected: &mut Vec<RegionId>, id: RegionId) {
    match selected.iter().position(|r| *r == id) {
        Some(index) => {
            selected.remove(index);
        }
        None => selected.push(id),
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProfileForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub description: String,
    pub region_ids: Vec<RegionId>,
}

impl ProfileForm {
    pub fn from_company(company: &Company) -> Self {
        Self {
            name: company.name.clone(),
            email: company.email.clone(),
            phone: company.phone.clone(),
            description: company.description.clone(),
            region_ids: company.region_ids(),
        }
    }

    pub fn validate(&self) -> Result<ProfileUpdate, FieldErrors> {
        Validator::new()
            .required("name", &self.name, "Company name is required")
            .required("email", &self.email, "Email is required")
            .email("email", &self.email, "Invalid email address")
            .required("phone", &self.phone, "Phone number is required")
            .not_empty("regions", &self.region_ids, "At least one region is required")
            .required("description", &self.description, "Description is required")
            .min_chars("description", &self.description, MIN_DESCRIPTION_CHARS, "Description must be at least 20 characters")
            .finish()?;

        Ok(ProfileUpdate {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            description: self.description.clone(),
            region_ids: self.region_ids.clone(),
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RegistrationForm {
    pub company_name: String,
    pub email: String,
    pub password: String,
    pub phone: String,
    pub regions: Vec<RegionId>,
    pub description: String,
}

impl RegistrationForm {
    pub fn validate(&self) -> Result<RegisterRequest, FieldErrors> {
        Validator::new()
            .required("company_name", &self.company_name, "Company name is required")
            .required("email", &self.email, "Email is required")
            .email("email", &self.email, "Invalid email address")
            .required("password", &self.password, "Password is required")
            .min_chars("password", &self.password, MIN_PASSWORD_CHARS, "Password must be at least 6 characters")
            .required("phone", &self.phone, "Phone number is required")
            .not_empty("regions", &self.regions, "At least one region is required")
            .required("description", &self.description, "Description is required")
            .min_chars("description", &self.description, MIN_DESCRIPTION_CHARS, "Description must be at least 20 characters")
            .finish()?;

        Ok(RegisterRequest {
            company_name: self.company_name.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password.clone(),
            phone: self.phone.trim().to_string(),
            regions: self.regions.clone(),
            description: self.description.clone(),
        })
    }
}

/// Lo que necesita el dashboard para pintar su formulario
#[derive(Clone, Debug, PartialEq)]
pub struct ProfileSnapshot {
    pub company: Company,
    pub regions: Vec<Region>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ProfileField {
    Name,
    Email,
    Phone,
    Description,
}

/// Página de dashboard de empresa
#[derive(Clone, Debug, PartialEq)]
pub struct DashboardState {
    pub loading: bool,
    pub saving: bool,
    pub regions: Vec<Region>,
    pub form: ProfileForm,
    pub field_errors: FieldErrors,
    pub error: Option<String>,
    pub success: Option<&'static str>,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            loading: true,
            saving: false,
            regions: Vec::new(),
            form: ProfileForm::default(),
            field_errors: FieldErrors::default(),
            error: None,
            success: None,
        }
    }
}

pub enum DashboardAction {
    Loaded(Result<ProfileSnapshot, String>),
    Edit(ProfileField, String),
    ToggleRegion(RegionId),
    Invalid(FieldErrors),
    SaveStarted,
    /// Perfil tal como se relee del servidor tras actualizar
    Saved(Company),
    SaveFailed(String),
}

impl Reducible for DashboardState {
    type Action = DashboardAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            DashboardAction::Loaded(Ok(snapshot)) => {
                next.form = ProfileForm::from_company(&snapshot.company);
                next.regions = snapshot.regions;
                next.loading = false;
                next.error = None;
            }
            DashboardAction::Loaded(Err(message)) => {
                next.loading = false;
                next.error = Some(message);
            }
            DashboardAction::Edit(field, value) => {
                let target = match field {
                    ProfileField::Name => &mut next.form.name,
                    ProfileField::Email => &mut next.form.email,
                    ProfileField::Phone => &mut next.form.phone,
                    ProfileField::Description => &mut next.form.description,
                };
                *target = value;
            }
            DashboardAction::ToggleRegion(id) => toggle_region(&mut next.form.region_ids, id),
            DashboardAction::Invalid(errors) => {
                next.field_errors = errors;
                next.success = None;
            }
            DashboardAction::SaveStarted => {
                next.saving = true;
                next.field_errors = FieldErrors::default();
                next.error = None;
                next.success = None;
            }
            DashboardAction::Saved(company) => {
                next.form = ProfileForm::from_company(&company);
                next.saving = false;
                next.success = Some(UPDATED);
            }
            DashboardAction::SaveFailed(message) => {
                next.saving = false;
                next.error = Some(message);
            }
        }
        Rc::new(next)
    }
}

#[derive(Clone)]
pub struct ProfileViewModel<A> {
    api: A,
}

impl<A: MarketplaceApi> ProfileViewModel<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    pub async fn load(&self) -> Result<ProfileSnapshot, String> {
        log::info!("📋 Cargando perfil de empresa");
        let company = self.api.company_profile().await.map_err(|e| {
            log::error!("❌ Error cargando perfil: {}", e);
            LOAD_FAILED.to_string()
        })?;
        let regions = self.load_regions().await.map_err(|_| LOAD_FAILED.to_string())?;
        Ok(ProfileSnapshot { company, regions })
    }

    /// Regiones para el formulario de registro
    pub async fn load_regions(&self) -> Result<Vec<Region>, String> {
        self.api.list_regions().await.map_err(|e| {
            log::error!("❌ Error cargando regiones: {}", e);
            e.user_message("Failed to load regions")
        })
    }

    /// PUT del formulario completo y luego GET del perfil
    pub async fn save(&self, update: &ProfileUpdate) -> Result<Company, String> {
        log::info!("💾 Guardando perfil de empresa");
        let failed = |e: crate::services::ApiError| {
            log::error!("❌ Error actualizando perfil: {}", e);
            UPDATE_FAILED.to_string()
        };
        self.api.update_company_profile(update).await.map_err(failed)?;
        let company = self.api.company_profile().await.map_err(failed)?;
        log::info!("✅ Perfil de empresa guardado");
        Ok(company)
    }
}
