use serde::{Deserialize, Serialize};

use super::auth::UserId;
use super::region::{Region, RegionId};

pub type CompanyId = i64;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Company {
    pub id: CompanyId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<UserId>,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub regions: Vec<Region>,
}

impl Company {
    pub fn region_ids(&self) -> Vec<RegionId> {
        self.regions.iter().map(|r| r.id).collect()
    }

    /// Resumen estilo "North, South" para tarjetas y tablas
    pub fn region_names(&self) -> String {
        self.regions
            .iter()
            .map(|r| r.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn serves(&self, region: RegionId) -> bool {
        self.regions.iter().any(|r| r.id == region)
    }
}

/// Body de `PUT /company/profile`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub description: String,
    pub region_ids: Vec<RegionId>,
}

/// Body de `DELETE /admin/companies/{id}`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DeleteCompanyRequest {
    pub password: String,
}
