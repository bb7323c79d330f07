use crate::models::{CompanyId, RegionId};

/// Todas las rutas de la API de EcoWaste que usa el front-end
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Endpoint {
    Login,
    Register,
    Me,
    Regions,
    Companies { region: Option<RegionId> },
    CompanyProfile,
    AdminCompanies,
    AdminCompany(CompanyId),
    AdminResetPassword(CompanyId),
    AdminRegions,
    AdminRegion(RegionId),
    AdminStats,
}

impl Endpoint {
    pub fn path(&self) -> String {
        match self {
            Self::Login => "/auth/login".to_string(),
            Self::Register => "/auth/register".to_string(),
            Self::Me => "/auth/me".to_string(),
            Self::Regions => "/regions".to_string(),
            Self::Companies { region: None } => "/companies".to_string(),
            Self::Companies { region: Some(id) } => format!("/companies?region={}", id),
            Self::CompanyProfile => "/company/profile".to_string(),
            Self::AdminCompanies => "/admin/companies".to_string(),
            Self::AdminCompany(id) => format!("/admin/companies/{}", id),
            Self::AdminResetPassword(id) => format!("/admin/companies/{}/reset-password", id),
            Self::AdminRegions => "/admin/regions".to_string(),
            Self::AdminRegion(id) => format!("/admin/regions/{}", id),
            Self::AdminStats => "/admin/stats".to_string(),
        }
    }

    pub fn url(&self, base_url: &str) -> String {
        format!("{}{}", base_url.trim_end_matches('/'), self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn company_listing_is_scoped_by_query() {
        assert_eq!(Endpoint::Companies { region: None }.path(), "/companies");
        assert_eq!(Endpoint::Companies { region: Some(2) }.path(), "/companies?region=2");
    }

    #[test]
    fn admin_paths_embed_ids() {
        assert_eq!(Endpoint::AdminCompany(9).path(), "/admin/companies/9");
        assert_eq!(Endpoint::AdminResetPassword(9).path(), "/admin/companies/9/reset-password");
        assert_eq!(Endpoint::AdminRegion(4).path(), "/admin/regions/4");
    }

    #[test]
    fn url_joins_base_without_double_slash() {
        assert_eq!(Endpoint::Me.url("http://localhost:5000/api/"), "http://localhost:5000/api/auth/me");
        assert_eq!(Endpoint::AdminStats.url("https://api.ecowaste.test"), "https://api.ecowaste.test/admin/stats");
    }
}
