//! Per-object tracking state.

use crate::tracker::rect::Centroid;

/// A persistent identity with a current centroid and a disappearance counter.
///
/// `disappeared` is the number of consecutive most-recent frames in which the
/// object was not matched to any detection; it is reset to zero the frame the
/// object is matched again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackedObject {
    /// Unique object identifier, never reused within a tracker instance.
    pub id: u64,
    /// Most recently observed centroid.
    pub centroid: Centroid,
    /// Consecutive frames without a matching detection.
    pub disappeared: u32,
}

impl TrackedObject {
    pub(crate) fn new(id: u64, centroid: Centroid) -> Self {
        Self {
            id,
            centroid,
            disappeared: 0,
        }
    }

    /// True if the object was matched to a detection in the current frame.
    pub fn is_visible(&self) -> bool {
        self.disappeared == 0
    }
}
