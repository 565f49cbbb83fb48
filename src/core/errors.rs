/// All domain errors for Learnlog.
///
/// The only failure this layer can produce is a construction-time
/// validation error; a filter that matches nothing is an empty result,
/// not an error.
#[derive(Debug, thiserror::Error)]
pub enum LearnlogError {
    #[error(
        "Invalid interaction record: {detail}\n\n  \
         Required fields: learner_id (integer), item_id (integer), kind (string).\n  \
         The read model additionally requires id (integer)."
    )]
    InvalidInteraction { detail: String },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, LearnlogError>;
