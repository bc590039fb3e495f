use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// `id` is kept for logs; the client-facing message only names the entity.
    #[error("{entity} not found")]
    NotFound { entity: &'static str, id: DbId },

    #[error("{0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
