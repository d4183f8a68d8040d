//! Matching utilities for centroid-based tracking.

use ndarray::Array2;

use crate::tracker::error::TrackerError;
use crate::tracker::rect::{Centroid, Rect};

/// Detection input for the tracker.
#[derive(Debug, Clone)]
pub struct Detection {
    /// Bounding box in TLBR format (x1, y1, x2, y2)
    pub bbox: Rect,
    /// Detection confidence score
    pub score: f32,
}

impl Detection {
    pub fn new(x1: f32, y1: f32, x2: f32, y2: f32, score: f32) -> Self {
        Self {
            bbox: Rect::from_tlbr(x1, y1, x2, y2),
            score,
        }
    }

    pub fn from_rect(bbox: Rect, score: f32) -> Self {
        Self { bbox, score }
    }
}

/// Compute the Euclidean distance matrix between tracked-object centroids
/// and detection centroids.
///
/// Returns a matrix of shape (M, N) where M is the number of tracked objects
/// and N the number of detections.
pub fn centroid_distance(object_centroids: &[Centroid], input_centroids: &[Centroid]) -> Array2<f64> {
    let mut dists = Array2::zeros((object_centroids.len(), input_centroids.len()));
    for (i, o) in object_centroids.iter().enumerate() {
        for (j, c) in input_centroids.iter().enumerate() {
            dists[[i, j]] = o.distance_to(c);
        }
    }
    dists
}

#[derive(Debug, Clone)]
pub struct AssignmentResult {
    pub matches: Vec<(usize, usize)>,
    pub unmatched_tracks: Vec<usize>,
    pub unmatched_detections: Vec<usize>,
}

/// Solve the rectangular minimum-cost assignment over the distance matrix.
///
/// Rows are tracked objects, columns are detections. Every row is matched
/// when rows <= columns; every column is matched when columns <= rows. There
/// is no gating threshold: the nearest globally consistent pairing wins
/// regardless of distance.
pub fn linear_assignment(cost_matrix: &Array2<f64>) -> Result<AssignmentResult, TrackerError> {
    let (num_rows, num_cols) = cost_matrix.dim();

    if num_rows == 0 {
        return Ok(AssignmentResult {
            matches: vec![],
            unmatched_tracks: vec![],
            unmatched_detections: (0..num_cols).collect(),
        });
    }

    if num_cols == 0 {
        return Ok(AssignmentResult {
            matches: vec![],
            unmatched_tracks: (0..num_rows).collect(),
            unmatched_detections: vec![],
        });
    }

    // lapjv wants a square matrix; pad with a uniform large cost. Exactly
    // |rows - cols| real rows or columns end up on padding, so the pad value
    // cannot change which real pairing is optimal.
    let size = num_rows.max(num_cols);
    let mut padded = Array2::<f64>::from_elem((size, size), 1e6);

    for i in 0..num_rows {
        for j in 0..num_cols {
            padded[[i, j]] = cost_matrix[[i, j]];
        }
    }

    let (row_to_col, _) =
        lapjv::lapjv(&padded).map_err(|e| TrackerError::Assignment(e.to_string()))?;

    let mut matches = vec![];
    let mut unmatched_tracks = vec![];
    let mut used_rows = vec![false; num_rows];
    let mut used_cols = vec![false; num_cols];

    for (row_idx, &col_idx) in row_to_col.iter().enumerate() {
        if row_idx >= num_rows {
            continue;
        }
        if col_idx >= num_cols {
            unmatched_tracks.push(row_idx);
            continue;
        }
        // A valid assignment visits each row and column at most once.
        debug_assert!(
            !used_rows[row_idx] && !used_cols[col_idx],
            "assignment produced a duplicate row or column"
        );
        if used_rows[row_idx] || used_cols[col_idx] {
            unmatched_tracks.push(row_idx);
            continue;
        }
        used_rows[row_idx] = true;
        used_cols[col_idx] = true;
        matches.push((row_idx, col_idx));
    }

    let unmatched_detections: Vec<usize> = used_cols
        .iter()
        .enumerate()
        .filter_map(|(j, &used)| if used { None } else { Some(j) })
        .collect();

    Ok(AssignmentResult {
        matches,
        unmatched_tracks,
        unmatched_detections,
    })
}
