/// Failures raised by profile construction, configuration validation and
/// classification. Each one aborts only the call that produced it.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ModelError {
    #[error("insufficient data: {0}")]
    InsufficientData(String),
    #[error("missing criterion: {0}")]
    MissingCriterion(String),
    #[error("unknown criterion: {0}")]
    UnknownCriterion(String),
    #[error("criterion {0} given more than once")]
    DuplicateCriterion(String),
    #[error("missing profile: {0}")]
    MissingProfile(String),
    #[error("unknown profile: {0}")]
    UnknownProfile(String),
    #[error("profile {0} given more than once")]
    DuplicateProfile(String),
    #[error("profile {upper} is worse than {lower} on criterion {criterion}")]
    InvalidProfileOrder {
        lower: &'static str,
        upper: &'static str,
        criterion: &'static str,
    },
    #[error("invalid weight for {criterion}: {value}")]
    InvalidWeight { criterion: String, value: f64 },
    #[error("majority threshold must lie in (0, 1], got {0}")]
    InvalidLambda(f64),
}
