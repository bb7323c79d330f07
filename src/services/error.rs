// ============================================================================
// API ERRORS
// ============================================================================
// Todo fallo en la frontera HTTP termina en una de estas variantes y se
// convierte en un mensaje corto donde se llama
// ============================================================================

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// El request nunca obtuvo respuesta
    #[error("network error: {message}")]
    Transport { message: String },

    /// 401 de la API: credencial ausente, caducada o inválida, o login rechazado
    #[error("unauthorized")]
    Unauthorized { message: Option<String> },

    /// Cualquier otra respuesta no-2xx
    #[error("HTTP {status}")]
    Rejected { status: u16, message: Option<String> },

    #[error("parse error: {message}")]
    Decode { message: String },

    #[error("storage error: {message}")]
    Storage { message: String },
}

/// Body `{ "message": "..." }` que la API adjunta a los errores
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub message: Option<String>,
}

impl ApiError {
    pub fn from_status(status: u16, message: Option<String>) -> Self {
        let message = message.filter(|m| !m.trim().is_empty());
        if status == 401 {
            Self::Unauthorized { message }
        } else {
            Self::Rejected { status, message }
        }
    }

    pub fn transport(err: impl std::fmt::Display) -> Self {
        Self::Transport { message: err.to_string() }
    }

    pub fn decode(err: impl std::fmt::Display) -> Self {
        Self::Decode { message: err.to_string() }
    }

    /// Mensaje de la API, si lo hubo
    pub fn api_message(&self) -> Option<&str> {
        match self {
            Self::Unauthorized { message } | Self::Rejected { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// Texto corto para el usuario: el mensaje de la API si lo envió
    pub fn user_message(&self, fallback: &str) -> String {
        self.api_message().unwrap_or(fallback).to_string()
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }
}
