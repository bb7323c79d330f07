// ============================================================================
// MARKETPLACE API PORT
// ============================================================================
// Los ViewModels solo hablan con este trait; ApiClient es la implementación HTTP
// ============================================================================

use async_trait::async_trait;

use super::error::ApiError;
use crate::models::{
    AuthResponse, Company, CompanyId, Credential, DashboardStats, Identity, LoginRequest,
    ProfileUpdate, RegisterRequest, Region, RegionId,
};

#[async_trait(?Send)]
pub trait MarketplaceApi: Clone {
    /// Mismo cliente, con `credential` adjunta en cada request
    fn with_credential(&self, credential: Option<Credential>) -> Self;

    async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ApiError>;
    async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ApiError>;
    async fn current_identity(&self) -> Result<Identity, ApiError>;

    async fn list_regions(&self) -> Result<Vec<Region>, ApiError>;
    async fn list_companies(&self, region: Option<RegionId>) -> Result<Vec<Company>, ApiError>;

    async fn company_profile(&self) -> Result<Company, ApiError>;
    async fn update_company_profile(&self, update: &ProfileUpdate) -> Result<Company, ApiError>;

    async fn admin_companies(&self) -> Result<Vec<Company>, ApiError>;
    async fn delete_company(&self, id: CompanyId, password: &str) -> Result<(), ApiError>;
    async fn reset_company_password(&self, id: CompanyId) -> Result<(), ApiError>;

    async fn admin_regions(&self) -> Result<Vec<Region>, ApiError>;
    async fn create_region(&self, name: &str) -> Result<Region, ApiError>;
    async fn update_region(&self, id: RegionId, name: &str) -> Result<Region, ApiError>;
    async fn delete_region(&self, id: RegionId) -> Result<(), ApiError>;

    async fn admin_stats(&self) -> Result<DashboardStats, ApiError>;
}
