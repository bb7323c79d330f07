pub mod auth;
pub mod company;
pub mod region;
pub mod stats;

pub use auth::{AuthResponse, Authenticated, Credential, Identity, LoginRequest, MeResponse, RegisterRequest, Role, UserId};
pub use company::{Company, CompanyId, DeleteCompanyRequest, ProfileUpdate};
pub use region::{Region, RegionId, RegionPayload};
pub use stats::{DashboardStats, RegionCount};
