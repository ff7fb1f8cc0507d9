use gloo_storage::{LocalStorage, Storage};
use js_sys::Date;
use shared::{SESSION_STORAGE_KEY, SessionId};

/// Returns the cached session id, creating and storing one on first use.
/// The id is kept as a bare string, not JSON.
pub fn load_or_create() -> SessionId {
    let storage = LocalStorage::raw();
    let stored = storage.get_item(SESSION_STORAGE_KEY).unwrap_or_else(|e| {
        log::warn!("Could not read session id: {:?}", e);
        None
    });
    if let Some(id) = SessionId::restore(stored) {
        return id;
    }

    let id = SessionId::generate(Date::now() as i64);
    if let Err(e) = storage.set_item(SESSION_STORAGE_KEY, id.as_str()) {
        log::warn!("Could not persist session id: {:?}", e);
    }
    id
}
