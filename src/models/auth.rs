use std::fmt;

use serde::{Deserialize, Serialize};

use super::region::RegionId;

pub type UserId = i64;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Company,
}

/// Usuario autenticado según la API
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    pub id: UserId,
    pub email: String,
    pub role: Role,
}

/// Token bearer opaco que acredita una identidad ante la API
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Credential(String);

impl Credential {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Valor para la cabecera `Authorization`
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

// Los tokens nunca llegan a los logs
impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct RegisterRequest {
    pub company_name: String,
    pub email: String,
    pub password: String,
    pub phone: String,
    pub regions: Vec<RegionId>,
    pub description: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct AuthResponse {
    pub user: Identity,
    pub token: Credential,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct MeResponse {
    pub user: Identity,
}

/// Identidad junto con la credencial que la acreditó
#[derive(Clone, PartialEq, Debug)]
pub struct Authenticated {
    pub identity: Identity,
    pub credential: Credential,
}

impl From<AuthResponse> for Authenticated {
    fn from(response: AuthResponse) -> Self {
        Self {
            identity: response.user,
            credential: response.token,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_response_parses_api_shape() {
        let json = r#"{"token":"abc.def","user":{"id":7,"email":"ops@acme.test","role":"company"}}"#;
        let response: AuthResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.token.as_str(), "abc.def");
        assert_eq!(response.user.role, Role::Company);

        let authenticated = Authenticated::from(response);
        assert_eq!(authenticated.identity.id, 7);
    }

    #[test]
    fn credential_debug_is_redacted() {
        let credential = Credential::new("secret-token");
        assert_eq!(format!("{:?}", credential), "Credential(***)");
        assert_eq!(credential.bearer(), "Bearer secret-token");
    }

    #[test]
    fn unknown_role_is_rejected() {
        let json = r#"{"user":{"id":1,"email":"x@y.z","role":"driver"}}"#;
        assert!(serde_json::from_str::<MeResponse>(json).is_err());
    }
}
