pub mod api_client;
pub mod credential_store;
pub mod endpoints;
pub mod error;
pub mod marketplace_api;

pub use api_client::ApiClient;
pub use credential_store::{CredentialStore, LocalCredentialStore};
pub use endpoints::Endpoint;
pub use error::ApiError;
pub use marketplace_api::MarketplaceApi;
