use time::Duration;

/// Authorization domain a session cookie belongs to.
///
/// Each scope has its own canonical token plaintext, cookie and login surface.
/// A token minted for one scope never validates for the other, even when both
/// scopes are configured with the same secret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scope {
    Room,
    Admin,
}

impl Scope {
    /// Plaintext half of a scoped token. Public and guessable.
    pub fn plaintext(&self) -> &'static str {
        match self {
            Scope::Room => "room_access",
            Scope::Admin => "admin_access",
        }
    }

    pub fn cookie_name(&self) -> &'static str {
        match self {
            Scope::Room => "room_auth",
            Scope::Admin => "admin_auth",
        }
    }

    pub fn cookie_max_age(&self) -> Duration {
        match self {
            Scope::Room => Duration::days(7),
            Scope::Admin => Duration::hours(8),
        }
    }

    /// Page an unauthenticated visitor is sent to.
    pub fn login_path(&self) -> &'static str {
        match self {
            Scope::Room => "/",
            Scope::Admin => "/admin",
        }
    }

    /// Page an authenticated visitor lands on.
    pub fn landing_path(&self) -> &'static str {
        match self {
            Scope::Room => "/room",
            Scope::Admin => "/admin/health",
        }
    }
}
