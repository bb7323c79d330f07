use yew_router::prelude::*;

use crate::models::RegionId;

#[derive(Clone, Debug, PartialEq, Routable)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/companies")]
    Companies,
    #[at("/login")]
    Login,
    #[at("/register")]
    Register,
    #[at("/dashboard")]
    Dashboard,
    #[at("/admin")]
    AdminRoot,
    #[at("/admin/*")]
    Admin,
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Vistas anidadas bajo `/admin`
#[derive(Clone, Debug, PartialEq, Routable)]
pub enum AdminRoute {
    #[at("/admin")]
    Dashboard,
    #[at("/admin/dashboard")]
    Overview,
    #[at("/admin/companies")]
    Companies,
    #[at("/admin/regions")]
    Regions,
    #[not_found]
    #[at("/admin/404")]
    NotFound,
}

/// `?region=<id>` en `/companies`
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DirectoryQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<RegionId>,
}
