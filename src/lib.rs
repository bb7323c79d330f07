// ============================================================================
// ECOWASTE DIRECTORY - FRONTEND (YEW + MVVM)
// ============================================================================
// - Components: vistas, tabla de rutas, guards
// - Hooks: atan los viewmodels al ciclo de vida de los componentes
// - ViewModels: estado por vista y orquestación de la API
// - Services: cliente HTTP, almacén de credenciales
// - Stores: estado de sesión compartido vía contexto
// - Models: estructuras compartidas con el backend
// ============================================================================

pub mod components;
pub mod config;
pub mod hooks;
pub mod models;
pub mod services;
pub mod stores;
pub mod utils;
pub mod viewmodels;

#[cfg(test)]
mod test_support;

pub use components::App;
