// ============================================================================
// CREDENTIAL STORE - token bearer persistente entre recargas
// ============================================================================

use super::error::ApiError;
use crate::config::CONFIG;
use crate::models::Credential;
use crate::utils::storage::{read_item, remove_item, write_item};

pub trait CredentialStore {
    fn load(&self) -> Option<Credential>;
    fn save(&self, credential: &Credential) -> Result<(), ApiError>;
    /// Borrar una entrada inexistente no es error
    fn clear(&self);
}

/// Token guardado tal cual en `localStorage` bajo una clave fija
#[derive(Clone, Debug, PartialEq)]
pub struct LocalCredentialStore {
    key: String,
}

impl Default for LocalCredentialStore {
    fn default() -> Self {
        Self::new(CONFIG.token_storage_key.clone())
    }
}

impl LocalCredentialStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

impl CredentialStore for LocalCredentialStore {
    fn load(&self) -> Option<Credential> {
        read_item(&self.key)
            .filter(|token| !token.trim().is_empty())
            .map(Credential::new)
    }

    fn save(&self, credential: &Credential) -> Result<(), ApiError> {
        write_item(&self.key, credential.as_str()).map_err(|message| ApiError::Storage { message })
    }

    fn clear(&self) {
        if let Err(e) = remove_item(&self.key) {
            log::warn!("⚠️ No se pudo borrar la credencial guardada: {}", e);
        }
    }
}
