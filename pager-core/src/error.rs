use thiserror::Error;

/// Errors raised while building a paginator.
///
/// Navigation never fails: out-of-range targets and empty datasets are
/// handled as silent no-ops inside [`crate::Paginator`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PagerError {
    #[error("invalid paginator configuration: {reason}")]
    InvalidConfiguration { reason: &'static str },
}
