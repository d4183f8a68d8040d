//! Main centroid tracker algorithm implementation.

use crate::tracker::error::TrackerError;
use crate::tracker::matching::{self, AssignmentResult, Detection};
use crate::tracker::rect::Centroid;
use crate::tracker::tracked_object::TrackedObject;

/// Configuration for the CentroidTracker.
#[derive(Debug, Clone)]
pub struct TrackerConfig {
    /// Maximum number of consecutive frames an object may go unmatched
    /// before it is forgotten.
    pub max_disappeared: u32,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self { max_disappeared: 50 }
    }
}

/// Tracker assigning stable identities to detections by centroid proximity.
///
/// State is owned by the instance; one tracker per independent video stream.
/// Objects are kept in registration order, which is also the order of every
/// returned snapshot.
pub struct CentroidTracker {
    objects: Vec<TrackedObject>,
    next_id: u64,
    config: TrackerConfig,
}

impl CentroidTracker {
    pub fn new(config: TrackerConfig) -> Self {
        Self {
            objects: Vec::new(),
            next_id: 0,
            config,
        }
    }

    /// Current snapshot of tracked objects, in registration order.
    /// Valid until the next call to [`update`](Self::update).
    pub fn objects(&self) -> &[TrackedObject] {
        &self.objects
    }

    /// Advance the tracker by one frame.
    ///
    /// Matches this frame's detections to tracked objects by minimum total
    /// centroid distance, registers surplus detections as new objects, and
    /// increments the disappearance counter of unmatched objects, forgetting
    /// those past `max_disappeared`. Returns the updated snapshot in
    /// registration order.
    ///
    /// A detection with a non-finite coordinate fails the whole frame before
    /// any state is mutated.
    pub fn update(&mut self, detections: &[Detection]) -> Result<Vec<TrackedObject>, TrackerError> {
        for (index, detection) in detections.iter().enumerate() {
            if !detection.bbox.is_finite() {
                return Err(TrackerError::NonFiniteDetection { index });
            }
        }

        // Step 1: Nothing detected, every tracked object decays
        if detections.is_empty() {
            self.mark_all_disappeared();
            return Ok(self.objects.clone());
        }

        let input_centroids: Vec<Centroid> =
            detections.iter().map(|d| d.bbox.centroid()).collect();

        // Step 2: Nothing tracked yet, register everything in input order
        if self.objects.is_empty() {
            for &centroid in &input_centroids {
                self.register(centroid);
            }
            return Ok(self.objects.clone());
        }

        // Step 3: Associate detections with tracked objects. Rows are
        // existing objects in registration order, columns are detections in
        // input order.
        let object_centroids: Vec<Centroid> = self.objects.iter().map(|o| o.centroid).collect();
        let dists = matching::centroid_distance(&object_centroids, &input_centroids);

        let AssignmentResult {
            matches,
            unmatched_tracks,
            unmatched_detections,
        } = matching::linear_assignment(&dists)?;

        for (row, col) in matches {
            let object = &mut self.objects[row];
            object.centroid = input_centroids[col];
            object.disappeared = 0;
        }

        // Step 4: Surplus detections become new objects
        for col in unmatched_detections {
            self.register(input_centroids[col]);
        }

        // Step 5: Unmatched objects decay; forget those past the threshold
        for row in unmatched_tracks {
            self.objects[row].disappeared += 1;
        }
        self.remove_expired();

        Ok(self.objects.clone())
    }

    fn register(&mut self, centroid: Centroid) {
        self.objects.push(TrackedObject::new(self.next_id, centroid));
        self.next_id += 1;
    }

    fn mark_all_disappeared(&mut self) {
        for object in &mut self.objects {
            object.disappeared += 1;
        }
        self.remove_expired();
    }

    fn remove_expired(&mut self) {
        let max_disappeared = self.config.max_disappeared;
        self.objects.retain(|object| object.disappeared <= max_disappeared);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_finite_detection_rejected_without_mutation() {
        let mut tracker = CentroidTracker::new(TrackerConfig::default());
        tracker
            .update(&[Detection::new(0.0, 0.0, 10.0, 10.0, 1.0)])
            .unwrap();

        let err = tracker
            .update(&[
                Detection::new(0.0, 0.0, 10.0, 10.0, 1.0),
                Detection::new(f32::NAN, 0.0, 10.0, 10.0, 1.0),
            ])
            .unwrap_err();
        assert_eq!(err, TrackerError::NonFiniteDetection { index: 1 });

        // The failed frame left the state untouched.
        assert_eq!(tracker.objects().len(), 1);
        assert_eq!(tracker.objects()[0].disappeared, 0);
    }

    #[test]
    fn test_empty_frame_increments_all_counters() {
        let mut tracker = CentroidTracker::new(TrackerConfig::default());
        tracker
            .update(&[
                Detection::new(0.0, 0.0, 10.0, 10.0, 1.0),
                Detection::new(50.0, 50.0, 60.0, 60.0, 1.0),
            ])
            .unwrap();

        let objects = tracker.update(&[]).unwrap();
        assert_eq!(objects.len(), 2);
        assert!(objects.iter().all(|o| o.disappeared == 1));
        assert!(objects.iter().all(|o| !o.is_visible()));
    }

    #[test]
    fn test_empty_frame_on_empty_tracker_registers_nothing() {
        let mut tracker = CentroidTracker::new(TrackerConfig::default());
        let objects = tracker.update(&[]).unwrap();
        assert!(objects.is_empty());
    }
}
