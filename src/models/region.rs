use serde::{Deserialize, Serialize};

pub type RegionId = i64;

/// Zona de servicio con nombre
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub id: RegionId,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RegionPayload {
    pub name: String,
}
