// ============================================================================
// SESSION VIEWMODEL - LÓGICA DE INICIO DE SESIÓN
// ============================================================================
// Habla con la API y el almacén de credenciales y devuelve valores; el hook
// de sesión los convierte en dispatches de SessionAction
// ============================================================================

use crate::models::{Authenticated, LoginRequest, RegisterRequest};
use crate::services::{ApiError, CredentialStore, MarketplaceApi};

pub const LOGIN_FAILED: &str = "Login failed. Please try again.";
pub const REGISTRATION_FAILED: &str = "Registration failed. Please try again.";

pub struct SessionViewModel<A, S> {
    api: A,
    store: S,
}

impl<A: MarketplaceApi, S: CredentialStore> SessionViewModel<A, S> {
    pub fn new(api: A, store: S) -> Self {
        Self { api, store }
    }

    /// Valida la credencial guardada. Cualquier fallo cierra sesión en silencio
    pub async fn initialize(&self) -> Option<Authenticated> {
        let Some(credential) = self.store.load() else {
            log::debug!("🔐 Sin credencial guardada, arrancando sin sesión");
            return None;
        };

        let api = self.api.with_credential(Some(credential.clone()));
        match api.current_identity().await {
            Ok(identity) => {
                log::info!("✅ Sesión restaurada para {}", identity.email);
                Some(Authenticated { identity, credential })
            }
            Err(e) => {
                log::warn!("⚠️ Credencial guardada rechazada: {}", e);
                // Un login terminado entre medias ya la reemplazó
                if self.store.load().as_ref() == Some(&credential) {
                    self.store.clear();
                }
                None
            }
        }
    }

    pub async fn login(&self, request: LoginRequest) -> Result<Authenticated, String> {
        log::info!("🔐 Iniciando sesión: {}", request.email);
        let response = self
            .api
            .with_credential(None)
            .login(&request)
            .await
            .map_err(|e| {
                log::error!("❌ Error en login: {}", e);
                e.user_message(LOGIN_FAILED)
            })?;
        self.adopt(response.into(), LOGIN_FAILED)
    }

    pub async fn register(&self, request: RegisterRequest) -> Result<Authenticated, String> {
        log::info!("📝 Registrando: {}", request.company_name);
        let response = self
            .api
            .with_credential(None)
            .register(&request)
            .await
            .map_err(|e| {
                log::error!("❌ Error en registro: {}", e);
                e.user_message(REGISTRATION_FAILED)
            })?;
        self.adopt(response.into(), REGISTRATION_FAILED)
    }

    pub fn logout(&self) {
        log::info!("👋 Cerrando sesión");
        self.store.clear();
    }

    fn adopt(&self, authenticated: Authenticated, fallback: &str) -> Result<Authenticated, String> {
        self.store
            .save(&authenticated.credential)
            .map_err(|e: ApiError| {
                log::error!("❌ No se pudo guardar la credencial: {}", e);
                fallback.to_string()
            })?;
        log::info!("✅ Sesión iniciada como {:?} {}", authenticated.identity.role, authenticated.identity.email);
        Ok(authenticated)
    }
}
