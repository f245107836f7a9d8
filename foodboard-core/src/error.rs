//! Error types for the gateway and the synchronizer

use crate::model::FoodId;

/// Result alias for gateway calls
pub type GatewayResult<T> = Result<T, GatewayError>;

/// Result alias for dashboard/synchronizer actions
pub type SyncResult<T> = Result<T, SyncError>;

/// Failure talking to the collection resource
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl GatewayError {
    /// Network unreachable, timeout, connection reset
    pub fn is_transport(&self) -> bool {
        matches!(self, GatewayError::Transport(_))
    }

    /// HTTP status for non-2xx responses
    pub fn status(&self) -> Option<u16> {
        match self {
            GatewayError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for GatewayError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            GatewayError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            GatewayError::Http { status: status.as_u16(), body: String::new() }
        } else {
            GatewayError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for GatewayError {
    fn from(err: serde_json::Error) -> Self {
        GatewayError::Decode(err.to_string())
    }
}

/// Failure of a dashboard action
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SyncError {
    #[error(transparent)]
    Gateway(#[from] GatewayError),

    #[error("No food plate with id {0}")]
    UnknownFood(FoodId),

    #[error("No food plate selected for edit")]
    NoEditingTarget,

    #[error("Dashboard unmounted before the response arrived")]
    Unmounted,
}
