//! Builder for creating Detection objects from various input formats.

use crate::tracker::Detection;

/// Builder for creating `Detection` objects from various input formats.
///
/// Detection models commonly emit boxes as absolute corner coordinates,
/// center/size pairs, or coordinates normalized to `[0, 1]`; this builder
/// converts any of them to the TLBR form the tracker consumes.
#[derive(Debug, Clone, Default)]
pub struct DetectionBuilder {
    x1: f32,
    y1: f32,
    x2: f32,
    y2: f32,
    score: f32,
}

impl DetectionBuilder {
    /// Create a new detection builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set bounding box in TLBR format (x1, y1, x2, y2).
    pub fn tlbr(mut self, x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        self.x1 = x1;
        self.y1 = y1;
        self.x2 = x2;
        self.y2 = y2;
        self
    }

    /// Set bounding box in XYWH format (center_x, center_y, width, height).
    pub fn xywh(mut self, cx: f32, cy: f32, w: f32, h: f32) -> Self {
        self.x1 = cx - w / 2.0;
        self.y1 = cy - h / 2.0;
        self.x2 = cx + w / 2.0;
        self.y2 = cy + h / 2.0;
        self
    }

    /// Set bounding box in TLWH format (top, left, width, height).
    pub fn tlwh(mut self, t: f32, l: f32, w: f32, h: f32) -> Self {
        self.x1 = l;
        self.y1 = t;
        self.x2 = l + w;
        self.y2 = t + h;
        self
    }

    /// Set bounding box from TLBR corners normalized to `[0, 1]`, scaled to
    /// pixel coordinates by the frame dimensions.
    ///
    /// SSD-style detectors report boxes this way; the scale factors must
    /// come from the same frame the detections were computed on.
    pub fn normalized_tlbr(
        mut self,
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        frame_width: u32,
        frame_height: u32,
    ) -> Self {
        let w = frame_width as f32;
        let h = frame_height as f32;
        self.x1 = x1 * w;
        self.y1 = y1 * h;
        self.x2 = x2 * w;
        self.y2 = y2 * h;
        self
    }

    /// Set the confidence score.
    pub fn score(mut self, score: f32) -> Self {
        self.score = score;
        self
    }

    /// Build the final `Detection`.
    pub fn build(self) -> Detection {
        Detection::new(self.x1, self.y1, self.x2, self.y2, self.score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detection_builder() {
        let det = DetectionBuilder::new()
            .tlbr(10.0, 20.0, 50.0, 80.0)
            .score(0.95)
            .build();

        assert_eq!(det.score, 0.95);
        assert_eq!(det.bbox.to_tlbr(), [10.0, 20.0, 50.0, 80.0]);
    }

    #[test]
    fn test_xywh_conversion() {
        let det = DetectionBuilder::new()
            .xywh(30.0, 50.0, 40.0, 60.0)
            .score(0.5)
            .build();

        assert_eq!(det.bbox.to_tlbr(), [10.0, 20.0, 50.0, 80.0]);
    }

    #[test]
    fn test_normalized_tlbr_scales_by_frame() {
        let det = DetectionBuilder::new()
            .normalized_tlbr(0.25, 0.5, 0.75, 1.0, 400, 300)
            .score(0.9)
            .build();

        assert_eq!(det.bbox.to_tlbr(), [100.0, 150.0, 300.0, 300.0]);
    }
}
