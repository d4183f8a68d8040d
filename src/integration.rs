//! Integration module for connecting object detection backends with the
//! centroid tracker.
//!
//! This module provides traits and utilities for feeding any detector's
//! bounding boxes into the tracker, including score-based filtering of weak
//! detections.

mod builder;
mod detector;
mod pipeline;

pub use builder::DetectionBuilder;
pub use detector::{DetectionSource, IntoDetections};
pub use pipeline::{DEFAULT_MIN_CONFIDENCE, PipelineError, TrackerPipeline};
