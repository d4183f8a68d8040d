use thiserror::Error;

/// Errors surfaced by the tracker's frame boundary.
///
/// Invariant violations inside the matching step (a duplicate row or column
/// in the solved assignment) are programming errors and are asserted, not
/// returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrackerError {
    /// A detection box carried a NaN or infinite coordinate. The frame is
    /// rejected before any tracker state is touched.
    #[error("detection {index} has a non-finite coordinate")]
    NonFiniteDetection { index: usize },

    /// The assignment solver failed on the cost matrix.
    #[error("assignment solver failed: {0}")]
    Assignment(String),
}
