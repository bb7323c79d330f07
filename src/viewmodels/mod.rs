// ViewModels: estado por vista y sus llamadas a la API, sin acceso al DOM

pub mod admin_companies_viewmodel;
pub mod admin_regions_viewmodel;
pub mod admin_stats_viewmodel;
pub mod directory_viewmodel;
pub mod profile_viewmodel;
pub mod search;
pub mod session_viewmodel;

pub use admin_companies_viewmodel::{AdminCompaniesAction, AdminCompaniesState, AdminCompaniesViewModel, DeleteOutcome, RowStatus};
pub use admin_regions_viewmodel::{AdminRegionsAction, AdminRegionsState, AdminRegionsViewModel, EditorMode};
pub use admin_stats_viewmodel::{AdminStatsViewModel, StatsState};
pub use directory_viewmodel::{DirectoryAction, DirectoryState, DirectoryViewModel};
pub use profile_viewmodel::{
    DashboardAction, DashboardState, ProfileField, ProfileForm, ProfileSnapshot, ProfileViewModel,
    RegistrationForm,
};
pub use session_viewmodel::SessionViewModel;
