//! TrackerPipeline for combining detection with tracking.

use thiserror::Error;

use crate::tracker::{CentroidTracker, TrackedObject, TrackerConfig, TrackerError};

use super::DetectionSource;

/// Default minimum confidence for a detection to reach the tracker.
pub const DEFAULT_MIN_CONFIDENCE: f32 = 0.5;

/// Error returned by [`TrackerPipeline::process_frame`].
#[derive(Debug, Error)]
pub enum PipelineError<E> {
    /// The detection backend failed.
    #[error("detection failed")]
    Detector(E),
    /// The tracker rejected the frame.
    #[error(transparent)]
    Tracker(#[from] TrackerError),
}

/// A combined tracker that bundles detection inference with centroid
/// tracking.
///
/// This struct provides a convenient way to run end-to-end tracking by
/// combining any `DetectionSource` with the `CentroidTracker`. Weak
/// detections are dropped before they reach the tracker, so a flickering
/// low-confidence box neither spawns a new identity nor steals an existing
/// one.
pub struct TrackerPipeline<D: DetectionSource> {
    detector: D,
    tracker: CentroidTracker,
    min_confidence: f32,
}

impl<D: DetectionSource> TrackerPipeline<D> {
    /// Create a new tracking pipeline with the given detector and tracker config.
    pub fn new(detector: D, config: TrackerConfig) -> Self {
        Self {
            detector,
            tracker: CentroidTracker::new(config),
            min_confidence: DEFAULT_MIN_CONFIDENCE,
        }
    }

    /// Create a new tracking pipeline with default tracker configuration.
    pub fn with_default_config(detector: D) -> Self {
        Self::new(detector, TrackerConfig::default())
    }

    /// Set the minimum confidence a detection needs to reach the tracker.
    pub fn with_min_confidence(mut self, min_confidence: f32) -> Self {
        self.min_confidence = min_confidence;
        self
    }

    /// Process a single frame and return the tracked objects.
    ///
    /// Runs detection on the input image, filters out detections below the
    /// confidence threshold, and updates the tracker with the remainder.
    ///
    /// # Arguments
    /// * `input` - Raw image bytes
    /// * `width` - Image width in pixels
    /// * `height` - Image height in pixels
    pub fn process_frame(
        &mut self,
        input: &[u8],
        width: u32,
        height: u32,
    ) -> Result<Vec<TrackedObject>, PipelineError<D::Error>> {
        let mut detections = self
            .detector
            .detect(input, width, height)
            .map_err(PipelineError::Detector)?;
        detections.retain(|d| d.score >= self.min_confidence);
        self.tracker.update(&detections).map_err(PipelineError::from)
    }

    /// Get a reference to the underlying detector.
    pub fn detector(&self) -> &D {
        &self.detector
    }

    /// Get a mutable reference to the underlying detector.
    pub fn detector_mut(&mut self) -> &mut D {
        &mut self.detector
    }

    /// Get a reference to the underlying tracker.
    pub fn tracker(&self) -> &CentroidTracker {
        &self.tracker
    }

    /// Get a mutable reference to the underlying tracker.
    pub fn tracker_mut(&mut self) -> &mut CentroidTracker {
        &mut self.tracker
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracker::Detection;

    struct MockDetector {
        detections: Vec<Detection>,
    }

    impl DetectionSource for MockDetector {
        type Error = std::convert::Infallible;

        fn detect(
            &mut self,
            _input: &[u8],
            _width: u32,
            _height: u32,
        ) -> Result<Vec<Detection>, Self::Error> {
            Ok(self.detections.clone())
        }
    }

    #[test]
    fn test_tracker_pipeline() {
        let detector = MockDetector {
            detections: vec![Detection::new(10.0, 20.0, 50.0, 80.0, 0.9)],
        };

        let mut pipeline = TrackerPipeline::with_default_config(detector);
        let objects = pipeline.process_frame(&[], 640, 480).unwrap();

        assert_eq!(objects.len(), 1);
        assert_eq!(objects[0].id, 0);
    }

    #[test]
    fn test_pipeline_filters_weak_detections() {
        let detector = MockDetector {
            detections: vec![
                Detection::new(10.0, 20.0, 50.0, 80.0, 0.9),
                Detection::new(200.0, 200.0, 250.0, 250.0, 0.3),
            ],
        };

        let mut pipeline = TrackerPipeline::with_default_config(detector);
        let objects = pipeline.process_frame(&[], 640, 480).unwrap();

        // Only the confident detection is tracked.
        assert_eq!(objects.len(), 1);
    }

    #[test]
    fn test_pipeline_min_confidence_override() {
        let detector = MockDetector {
            detections: vec![
                Detection::new(10.0, 20.0, 50.0, 80.0, 0.9),
                Detection::new(200.0, 200.0, 250.0, 250.0, 0.3),
            ],
        };

        let mut pipeline = TrackerPipeline::with_default_config(detector).with_min_confidence(0.2);
        let objects = pipeline.process_frame(&[], 640, 480).unwrap();

        assert_eq!(objects.len(), 2);
    }
}
