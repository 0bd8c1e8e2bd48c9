use thiserror::Error;

/// Authorization failures raised by session resolution and role checks
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// No portal session could be resolved from the request
    #[error("Unauthorized")]
    Unauthorized,

    /// A session exists but its role is not allowed on the route
    #[error("Forbidden")]
    Forbidden,

    /// The resolver cannot verify tokens at all
    #[error("Session secret not configured")]
    MissingSecret,

    #[error("Failed to sign session: {0}")]
    Signing(String),
}
