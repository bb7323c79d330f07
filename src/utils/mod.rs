// Utilidades compartidas

pub mod dom;
pub mod lifetime;
pub mod storage;
pub mod validation;

pub use dom::{confirm, event_value};
pub use lifetime::LifetimeToken;
pub use validation::{FieldErrors, Validator};
