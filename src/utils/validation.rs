// ============================================================================
// FORM VALIDATION
// ============================================================================
// Reglas por campo para los formularios de registro y perfil. Gana la primera
// regla que falla en cada campo; no se envía mientras haya algún error
// ============================================================================

use std::collections::BTreeMap;

pub const MIN_PASSWORD_CHARS: usize = 6;
pub const MIN_DESCRIPTION_CHARS: usize = 20;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FieldErrors(BTreeMap<&'static str, String>);

impl FieldErrors {
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    fn reject(&mut self, field: &'static str, message: &str) {
        self.0.entry(field).or_insert_with(|| message.to_string());
    }
}

#[derive(Default)]
pub struct Validator {
    errors: FieldErrors,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn required(mut self, field: &'static str, value: &str, message: &str) -> Self {
        if value.trim().is_empty() {
            self.errors.reject(field, message);
        }
        self
    }

    pub fn min_chars(mut self, field: &'static str, value: &str, min: usize, message: &str) -> Self {
        if value.chars().count() < min {
            self.errors.reject(field, message);
        }
        self
    }

    pub fn email(mut self, field: &'static str, value: &str, message: &str) -> Self {
        if !is_email_shaped(value.trim()) {
            self.errors.reject(field, message);
        }
        self
    }

    pub fn not_empty<T>(mut self, field: &'static str, values: &[T], message: &str) -> Self {
        if values.is_empty() {
            self.errors.reject(field, message);
        }
        self
    }

    pub fn finish(self) -> Result<(), FieldErrors> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self.errors)
        }
    }
}

/// `local@domain.tld`: letras, dígitos y `._%+-` antes de la `@`, un dominio
/// con puntos después y un TLD alfabético de dos o más letras
pub fn is_email_shaped(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };

    let local_ok = !local.is_empty()
        && local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "._%+-".contains(c));
    let host_ok = !host.is_empty()
        && host
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-');
    let tld_ok = tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic());

    local_ok && host_ok && tld_ok
}
