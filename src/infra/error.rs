use thiserror::Error;

/// Infrastructure errors that can occur during application startup.
///
/// Display messages never include configuration values.
#[derive(Error, Debug)]
pub enum InfraError {
    #[error("LIVEKIT_URL is not a valid URL")]
    InvalidLivekitUrl(#[source] url::ParseError),

    #[error("LIVEKIT_URL must use ws, wss, http or https (got {0})")]
    UnsupportedLivekitScheme(String),

    #[error("HTTP client initialization failed")]
    HttpClient(#[source] reqwest::Error),

    #[error("TCP bind failed")]
    TcpBind(#[source] std::io::Error),

    #[error("Server error")]
    Server(#[source] std::io::Error),
}
