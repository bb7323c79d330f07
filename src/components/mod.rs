pub mod admin_companies;
pub mod admin_dashboard;
pub mod admin_layout;
pub mod admin_regions;
pub mod app;
pub mod companies_page;
pub mod company_card;
pub mod dashboard_page;
pub mod feedback;
pub mod form_field;
pub mod guards;
pub mod home_page;
pub mod login_page;
pub mod navbar;
pub mod region_filter;
pub mod region_picker;
pub mod register_page;
pub mod routes;

pub use app::App;
pub use routes::{AdminRoute, DirectoryQuery, Route};
