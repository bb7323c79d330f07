// Hooks: atan los viewmodels al ciclo de vida de los componentes

pub mod session_context;
pub mod use_admin_companies;
pub mod use_admin_regions;
pub mod use_admin_stats;
pub mod use_company_profile;
pub mod use_directory;
pub mod use_lifetime;
pub mod use_regions;
pub mod use_session;

pub use session_context::{use_session, SessionProvider};
pub use use_admin_companies::{use_admin_companies, AdminCompaniesHandle};
pub use use_admin_regions::{use_admin_regions, AdminRegionsHandle};
pub use use_admin_stats::use_admin_stats;
pub use use_company_profile::{use_company_profile, CompanyProfileHandle};
pub use use_directory::{use_directory, DirectoryHandle};
pub use use_lifetime::use_lifetime;
pub use use_regions::use_regions;
pub use use_session::SessionHandle;
