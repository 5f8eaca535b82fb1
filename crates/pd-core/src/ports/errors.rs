use thiserror::Error;

/// Errors surfaced by the catalog gateway.
///
/// Clone + PartialEq so use-case errors wrapping one stay comparable in
/// tests and cheap to relay to views.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    /// The server rejected the insert: the team already holds six members.
    #[error("team is already full")]
    TeamFull,

    /// The member does not exist in the targeted collection.
    #[error("member not found")]
    NotFound,

    /// Missing or expired credentials.
    #[error("unauthorized")]
    Unauthorized,

    /// A request-level rejection other than capacity, with the server's message.
    #[error("request rejected: {message}")]
    Rejected { message: String },

    #[error("unexpected status code: {0}")]
    UnexpectedStatus(u16),

    /// Connection, timeout, or body decode failure.
    #[error("transport error: {0}")]
    Transport(String),
}

impl GatewayError {
    pub fn is_team_full(&self) -> bool {
        matches!(self, Self::TeamFull)
    }
}
