//! Scope cookie lifecycle: set on login, cleared on logout.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use time::Duration;

use crate::domain::entities::scope::Scope;

pub fn session_cookie(scope: Scope, token: String, secure: bool) -> Cookie<'static> {
    build(scope, token, scope.cookie_max_age(), secure)
}

pub fn cleared_cookie(scope: Scope, secure: bool) -> Cookie<'static> {
    build(scope, String::new(), Duration::seconds(0), secure)
}

/// Raw token presented for `scope`, if any.
pub fn scope_token(jar: &CookieJar, scope: Scope) -> Option<&str> {
    jar.get(scope.cookie_name()).map(|c| c.value())
}

fn build(scope: Scope, value: String, max_age: Duration, secure: bool) -> Cookie<'static> {
    Cookie::build((scope.cookie_name(), value))
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .path("/")
        .max_age(max_age)
        .build()
}
