//! Bearer token kept in `localStorage` together with its expiry.

use contracts::system::auth::{TokenRecord, DEFAULT_TOKEN_TTL_SECS};
use leptos::prelude::*;
use web_sys::window;

const TOKEN_KEY: &str = "authToken";
const TOKEN_EXPIRY_KEY: &str = "authTokenExpiry";

// Fires whenever the stored token is written or removed
thread_local! {
    static TOKEN_CHANGED: ArcTrigger = ArcTrigger::new();
}

fn notify_token_changed() {
    TOKEN_CHANGED.with(|trigger| trigger.notify());
}

fn track_token_changes() {
    TOKEN_CHANGED.with(|trigger| trigger.track());
}

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

fn now_ms() -> f64 {
    js_sys::Date::now()
}

fn load_record() -> Option<TokenRecord> {
    let storage = get_local_storage()?;
    let token = storage.get_item(TOKEN_KEY).ok()??;
    let expires_at_ms = storage
        .get_item(TOKEN_EXPIRY_KEY)
        .ok()
        .flatten()
        .and_then(|raw| raw.parse::<f64>().ok())
        .unwrap_or(f64::INFINITY);
    Some(TokenRecord {
        token,
        expires_at_ms,
    })
}

/// Stored token record, or `None` when absent or expired. An expired
/// token is removed from storage.
pub fn valid_record() -> Option<TokenRecord> {
    let record = load_record()?;
    if record.valid_token(now_ms()).is_none() {
        log::info!("stored token expired, clearing");
        clear_token();
        return None;
    }
    Some(record)
}

/// Stored token, see [`valid_record`]
pub fn get_token() -> Option<String> {
    valid_record().map(|record| record.token)
}

/// Store a token valid for `expires_in_secs` seconds from now
pub fn set_token(token: &str, expires_in_secs: Option<u64>) {
    let record = TokenRecord::issue(
        token,
        expires_in_secs.unwrap_or(DEFAULT_TOKEN_TTL_SECS),
        now_ms(),
    );
    if let Some(storage) = get_local_storage() {
        let _ = storage.set_item(TOKEN_KEY, &record.token);
        let _ = storage.set_item(TOKEN_EXPIRY_KEY, &format!("{}", record.expires_at_ms));
    }
    notify_token_changed();
}

/// Remove the token and its expiry
pub fn clear_token() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(TOKEN_KEY);
        let _ = storage.remove_item(TOKEN_EXPIRY_KEY);
    }
    notify_token_changed();
}

/// Whether a valid token is stored. Reactive: re-runs when the token is
/// set or cleared, e.g. after a 401.
pub fn is_authenticated() -> bool {
    track_token_changes();
    get_token().is_some()
}
