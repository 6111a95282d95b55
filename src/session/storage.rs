//! Persistent half of the session: localStorage keys `token` (raw
//! string) and `user` (serialized record). Reads and writes are
//! uncoordinated across tabs; a sign-out in one tab does not propagate.

use web_sys::Storage;

use super::{Session, SessionUser};

const TOKEN_KEY: &str = "token";
const USER_KEY: &str = "user";

fn local_storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Read the stored session. Authenticated only when both the token and
/// a parseable user record are present.
pub fn load() -> Session {
    let Some(storage) = local_storage() else {
        return Session::default();
    };

    let token = storage.get_item(TOKEN_KEY).ok().flatten();
    let user = storage
        .get_item(USER_KEY)
        .ok()
        .flatten()
        .and_then(|raw| serde_json::from_str::<SessionUser>(&raw).ok());

    match (token, user) {
        (Some(token), Some(user)) => Session {
            token: Some(token),
            user: Some(user),
        },
        _ => Session::default(),
    }
}

/// The raw bearer token, read fresh for every request
pub fn token() -> Option<String> {
    local_storage()?.get_item(TOKEN_KEY).ok().flatten()
}

/// Write token and user record. Storage failures (quota, disabled
/// storage) are logged and otherwise ignored; the in-memory session
/// still works for the life of the tab.
pub fn persist(token: &str, user: &SessionUser) {
    let Some(storage) = local_storage() else {
        log::warn!("localStorage unavailable; session will not survive a reload");
        return;
    };

    if storage.set_item(TOKEN_KEY, token).is_err() {
        log::warn!("Failed to persist session token");
    }
    match serde_json::to_string(user) {
        Ok(raw) => {
            if storage.set_item(USER_KEY, &raw).is_err() {
                log::warn!("Failed to persist user record");
            }
        }
        Err(e) => log::warn!("Failed to serialize user record: {}", e),
    }
}

/// Remove both keys, regardless of prior state
pub fn clear() {
    let Some(storage) = local_storage() else {
        return;
    };
    let _ = storage.remove_item(TOKEN_KEY);
    let _ = storage.remove_item(USER_KEY);
}
