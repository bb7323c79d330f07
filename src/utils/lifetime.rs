// ============================================================================
// LIFETIME TOKEN
// ============================================================================
// Un fetch lanzado por una vista lleva el token de esa vista; al desmontarla
// el token se cancela y los resultados tardíos se descartan
// ============================================================================

use std::cell::Cell;
use std::rc::Rc;

#[derive(Clone, Debug, Default)]
pub struct LifetimeToken {
    cancelled: Rc<Cell<bool>>,
}

impl LifetimeToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.set(true);
    }

    pub fn is_alive(&self) -> bool {
        !self.cancelled.get()
    }

    /// Ejecuta `apply` solo si el dueño sigue montado
    pub fn apply<T>(&self, value: T, apply: impl FnOnce(T)) -> bool {
        if self.is_alive() {
            apply(value);
            true
        } else {
            log::debug!("🧹 Descartando resultado llegado tras desmontar");
            false
        }
    }
}

// Se comparan por identidad para poder ir en props y contextos
impl PartialEq for LifetimeToken {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.cancelled, &other.cancelled)
    }
}
