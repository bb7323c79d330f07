use web_sys::{window, Storage};

pub fn get_local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

/// Valor en crudo; `None` si no hay storage o falta la clave
pub fn read_item(key: &str) -> Option<String> {
    get_local_storage()?.get_item(key).ok()?
}

pub fn write_item(key: &str, value: &str) -> Result<(), String> {
    let storage = get_local_storage().ok_or("localStorage is not available")?;
    storage
        .set_item(key, value)
        .map_err(|_| format!("Could not write '{}' to localStorage", key))
}

pub fn remove_item(key: &str) -> Result<(), String> {
    let storage = get_local_storage().ok_or("localStorage is not available")?;
    storage
        .remove_item(key)
        .map_err(|_| format!("Could not remove '{}' from localStorage", key))
}
