mod centroid_tracker;
mod error;
mod matching;
mod rect;
mod tracked_object;

pub use centroid_tracker::{CentroidTracker, TrackerConfig};
pub use error::TrackerError;
pub use matching::Detection;
pub use rect::{Centroid, Rect};
pub use tracked_object::TrackedObject;
