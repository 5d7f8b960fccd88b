//! One-shot flash messages carried across a redirect in a cookie
//!
//! The message is base64url-encoded so any text survives the cookie value
//! grammar. Reading it removes the cookie.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use tracing::warn;

pub const FLASH_COOKIE: &str = "stagebook_flash";

/// Attach a flash message to the response cookies
pub fn push(jar: CookieJar, message: impl AsRef<str>) -> CookieJar {
    let encoded = URL_SAFE_NO_PAD.encode(message.as_ref());
    jar.add(
        Cookie::build((FLASH_COOKIE, encoded))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax),
    )
}

/// Consume the pending flash message, if any
pub fn take(jar: CookieJar) -> (CookieJar, Option<String>) {
    let message = match jar.get(FLASH_COOKIE) {
        Some(cookie) => decode(cookie.value()),
        None => return (jar, None),
    };

    if message.is_none() {
        warn!("Discarding undecodable flash cookie");
    }

    let jar = jar.remove(Cookie::build((FLASH_COOKIE, "")).path("/"));
    (jar, message)
}

fn decode(value: &str) -> Option<String> {
    URL_SAFE_NO_PAD
        .decode(value)
        .ok()
        .and_then(|bytes| String::from_utf8(bytes).ok())
}
