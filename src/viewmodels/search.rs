// ============================================================================
// LOCAL SEARCH
// ============================================================================
// Filtro por subcadena, sin distinguir mayúsculas, sobre listas ya cargadas
// ============================================================================

use crate::models::{Company, Region};

/// Campos de empresa contra los que se compara la búsqueda
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SearchFields {
    pub email: bool,
}

impl SearchFields {
    /// Directorio público: nombre, descripción y regiones
    pub const DIRECTORY: Self = Self { email: false };
    /// La tabla de admin también busca en el email de contacto
    pub const ADMIN: Self = Self { email: true };
}

/// Término en minúsculas; `None` si está vacío
pub fn normalize(term: &str) -> Option<String> {
    (!term.is_empty()).then(|| term.to_lowercase())
}

pub fn company_matches(company: &Company, term: &str, fields: SearchFields) -> bool {
    let contains = |text: &str| text.to_lowercase().contains(term);
    contains(&company.name)
        || contains(&company.description)
        || company.regions.iter().any(|r| contains(&r.name))
        || (fields.email && contains(&company.email))
}

pub fn filter_companies(companies: &[Company], term: &str, fields: SearchFields) -> Vec<Company> {
    match normalize(term) {
        None => companies.to_vec(),
        Some(term) => companies
            .iter()
            .filter(|c| company_matches(c, &term, fields))
            .cloned()
            .collect(),
    }
}

pub fn filter_regions(regions: &[Region], term: &str) -> Vec<Region> {
    match normalize(term) {
        None => regions.to_vec(),
        Some(term) => regions
            .iter()
            .filter(|r| r.name.to_lowercase().contains(&term))
            .cloned()
            .collect(),
    }
}
