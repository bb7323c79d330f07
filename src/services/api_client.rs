// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (sin estado salvo la credencial)
// ============================================================================
// Sin lógica de negocio: arma el request, adjunta credencial, envía y decodifica
// ============================================================================

use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::endpoints::Endpoint;
use super::error::{ApiError, ErrorBody};
use super::marketplace_api::MarketplaceApi;
use crate::config::CONFIG;
use crate::models::{
    AuthResponse, Company, CompanyId, Credential, DashboardStats, DeleteCompanyRequest, Identity,
    LoginRequest, MeResponse, ProfileUpdate, RegisterRequest, Region, RegionId, RegionPayload,
};

/// Cliente HTTP de la API de EcoWaste
///
/// La credencial es estado explícito del cliente, no un default global:
/// cada cliente queda atado a la sesión que lo creó.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiClient {
    base_url: String,
    credential: Option<Credential>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_base_url(CONFIG.api_url.clone())
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            credential: None,
        }
    }

    pub fn has_credential(&self) -> bool {
        self.credential.is_some()
    }

    /// Inyección de credencial por request
    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.credential {
            Some(credential) => builder.header("Authorization", &credential.bearer()),
            None => builder,
        }
    }

    fn get(&self, endpoint: Endpoint) -> RequestBuilder {
        log::debug!("📋 GET {}", endpoint.path());
        self.authorize(Request::get(&endpoint.url(&self.base_url)))
    }

    fn post(&self, endpoint: Endpoint) -> RequestBuilder {
        log::debug!("📤 POST {}", endpoint.path());
        self.authorize(Request::post(&endpoint.url(&self.base_url)))
    }

    fn put(&self, endpoint: Endpoint) -> RequestBuilder {
        log::debug!("📤 PUT {}", endpoint.path());
        self.authorize(Request::put(&endpoint.url(&self.base_url)))
    }

    fn delete(&self, endpoint: Endpoint) -> RequestBuilder {
        log::debug!("🗑️ DELETE {}", endpoint.path());
        self.authorize(Request::delete(&endpoint.url(&self.base_url)))
    }

    async fn fetch<T: DeserializeOwned>(builder: RequestBuilder) -> Result<T, ApiError> {
        let response = builder.send().await.map_err(ApiError::transport)?;
        Self::decode(response).await
    }

    async fn fetch_with<B: Serialize, T: DeserializeOwned>(
        builder: RequestBuilder,
        body: &B,
    ) -> Result<T, ApiError> {
        let request = builder.json(body).map_err(ApiError::decode)?;
        let response = request.send().await.map_err(ApiError::transport)?;
        Self::decode(response).await
    }

    /// Para endpoints cuyo body de éxito no importa (204, `{message}`)
    async fn execute(builder: RequestBuilder) -> Result<(), ApiError> {
        let response = builder.send().await.map_err(ApiError::transport)?;
        Self::check(response).await.map(|_| ())
    }

    async fn check(response: Response) -> Result<Response, ApiError> {
        if response.ok() {
            return Ok(response);
        }
        let status = response.status();
        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.message);
        let detail = message.clone().unwrap_or_else(|| response.status_text());
        log::warn!("❌ HTTP {} {}", status, detail);
        Err(ApiError::from_status(status, message))
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let response = Self::check(response).await?;
        response.json::<T>().await.map_err(ApiError::decode)
    }
}

#[async_trait(?Send)]
impl MarketplaceApi for ApiClient {
    fn with_credential(&self, credential: Option<Credential>) -> Self {
        Self {
            base_url: self.base_url.clone(),
            credential,
        }
    }

    async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ApiError> {
        log::info!("🔐 Iniciando sesión: {}", request.email);
        Self::fetch_with(self.post(Endpoint::Login), request).await
    }

    async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        log::info!("📝 Registrando empresa: {}", request.company_name);
        Self::fetch_with(self.post(Endpoint::Register), request).await
    }

    async fn current_identity(&self) -> Result<Identity, ApiError> {
        let me: MeResponse = Self::fetch(self.get(Endpoint::Me)).await?;
        Ok(me.user)
    }

    async fn list_regions(&self) -> Result<Vec<Region>, ApiError> {
        Self::fetch(self.get(Endpoint::Regions)).await
    }

    async fn list_companies(&self, region: Option<RegionId>) -> Result<Vec<Company>, ApiError> {
        Self::fetch(self.get(Endpoint::Companies { region })).await
    }

    async fn company_profile(&self) -> Result<Company, ApiError> {
        Self::fetch(self.get(Endpoint::CompanyProfile)).await
    }

    async fn update_company_profile(&self, update: &ProfileUpdate) -> Result<Company, ApiError> {
        Self::fetch_with(self.put(Endpoint::CompanyProfile), update).await
    }

    async fn admin_companies(&self) -> Result<Vec<Company>, ApiError> {
        Self::fetch(self.get(Endpoint::AdminCompanies)).await
    }

    async fn delete_company(&self, id: CompanyId, password: &str) -> Result<(), ApiError> {
        let body = DeleteCompanyRequest { password: password.to_string() };
        let request = self
            .delete(Endpoint::AdminCompany(id))
            .json(&body)
            .map_err(ApiError::decode)?;
        let response = request.send().await.map_err(ApiError::transport)?;
        Self::check(response).await.map(|_| ())
    }

    async fn reset_company_password(&self, id: CompanyId) -> Result<(), ApiError> {
        Self::execute(self.post(Endpoint::AdminResetPassword(id))).await
    }

    async fn admin_regions(&self) -> Result<Vec<Region>, ApiError> {
        Self::fetch(self.get(Endpoint::AdminRegions)).await
    }

    async fn create_region(&self, name: &str) -> Result<Region, ApiError> {
        let body = RegionPayload { name: name.to_string() };
        Self::fetch_with(self.post(Endpoint::AdminRegions), &body).await
    }

    async fn update_region(&self, id: RegionId, name: &str) -> Result<Region, ApiError> {
        let body = RegionPayload { name: name.to_string() };
        Self::fetch_with(self.put(Endpoint::AdminRegion(id)), &body).await
    }

    async fn delete_region(&self, id: RegionId) -> Result<(), ApiError> {
        Self::execute(self.delete(Endpoint::AdminRegion(id))).await
    }

    async fn admin_stats(&self) -> Result<DashboardStats, ApiError> {
        Self::fetch(self.get(Endpoint::AdminStats)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credential_is_scoped_to_the_derived_client() {
        let anonymous = ApiClient::with_base_url("http://localhost:5000/api");
        let signed_in = anonymous.with_credential(Some(Credential::new("tok")));

        assert!(!anonymous.has_credential());
        assert!(signed_in.has_credential());
        assert_ne!(anonymous, signed_in);
        assert_eq!(signed_in.with_credential(None), anonymous);
    }
}
