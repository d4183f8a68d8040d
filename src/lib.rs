//! # centroidtrack-rs
//!
//! Lightweight multi-object tracking by centroid association.
//!
//! An upstream detector supplies bounding boxes for every frame; the tracker
//! assigns each box to a previously seen object (or registers a new one) by
//! solving a minimum-total-distance assignment over box centroids. Objects
//! that go unmatched for more than a configurable number of consecutive
//! frames are forgotten. Identities are plain integers, issued once and
//! never reused.
//!
//! ## Example
//!
//! ```
//! use centroidtrack_rs::{CentroidTracker, Detection, TrackerConfig};
//!
//! let mut tracker = CentroidTracker::new(TrackerConfig::default());
//!
//! // Frame 1: one detection
//! let objects = tracker
//!     .update(&[Detection::new(100.0, 100.0, 200.0, 200.0, 0.9)])
//!     .unwrap();
//! assert_eq!(objects.len(), 1);
//! let id = objects[0].id;
//!
//! // Frame 2: the same object moved slightly, identity persists
//! let objects = tracker
//!     .update(&[Detection::new(104.0, 103.0, 204.0, 203.0, 0.9)])
//!     .unwrap();
//! assert_eq!(objects[0].id, id);
//! ```

pub mod integration;
pub mod tracker;

pub use integration::{DetectionBuilder, DetectionSource, IntoDetections, PipelineError, TrackerPipeline};
pub use tracker::{Centroid, CentroidTracker, Detection, Rect, TrackedObject, TrackerConfig, TrackerError};
