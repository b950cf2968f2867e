/// Error enumeration for persistence failures.
///
/// Detail strings are for operational logs; callers surface a generic
/// message to end users.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("record not found")]
    NotFound,
    #[error("store unavailable: {0}")]
    Unavailable(String),
}
