pub mod access_grant;
pub mod app_error;
pub mod language;
pub mod ports;
pub mod scoped_token;
pub mod signature;
pub mod use_cases;
