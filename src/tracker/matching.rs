//! Matching utilities for multi-object tracking.
//!
//! Cost matrices are laid out with one row per detection and one column per
//! track.

use std::cmp::Ordering;

use ndarray::Array2;
use tracing::warn;

use crate::tracker::detection::{Detection, Point};
use crate::tracker::distance::DistanceFunction;

/// Compute the distance matrix between detections and track positions.
pub fn distance_matrix<D>(
    detections: &[Detection],
    track_points: &[Point],
    distance: &D,
) -> Array2<f32>
where
    D: DistanceFunction + ?Sized,
{
    let mut dists = Array2::zeros((detections.len(), track_points.len()));
    for (i, det) in detections.iter().enumerate() {
        for (j, point) in track_points.iter().enumerate() {
            dists[[i, j]] = distance.distance(&det.point, point);
        }
    }
    dists
}

/// Outcome of one association round. Every index appears at most once and
/// all lists are sorted by detection (or track) index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssignmentResult {
    /// Accepted pairs as (detection index, track index)
    pub matches: Vec<(usize, usize)>,
    pub unmatched_detections: Vec<usize>,
    pub unmatched_tracks: Vec<usize>,
}

impl AssignmentResult {
    fn from_matches(mut matches: Vec<(usize, usize)>, num_dets: usize, num_tracks: usize) -> Self {
        matches.sort_unstable();

        let mut det_free = vec![true; num_dets];
        let mut track_free = vec![true; num_tracks];
        for &(d, t) in &matches {
            det_free[d] = false;
            track_free[t] = false;
        }

        Self {
            matches,
            unmatched_detections: free_indices(&det_free),
            unmatched_tracks: free_indices(&track_free),
        }
    }
}

fn free_indices(mask: &[bool]) -> Vec<usize> {
    mask.iter()
        .enumerate()
        .filter_map(|(i, &free)| if free { Some(i) } else { None })
        .collect()
}

/// Greedy nearest-neighbour matching.
///
/// Repeatedly accepts the globally smallest remaining cost, removing its row
/// and column, until the smallest remaining cost exceeds `max_distance`.
/// Ties go to the earliest detection index, then the earliest track index.
/// NaN costs never match.
pub fn greedy_assignment(cost_matrix: &Array2<f32>, max_distance: f32) -> AssignmentResult {
    let (num_dets, num_tracks) = cost_matrix.dim();

    let mut candidates: Vec<(f32, usize, usize)> = cost_matrix
        .indexed_iter()
        .filter(|&(_, &cost)| cost <= max_distance)
        .map(|((d, t), &cost)| (cost, d, t))
        .collect();

    candidates.sort_by(|a, b| {
        a.0.partial_cmp(&b.0)
            .unwrap_or(Ordering::Equal)
            .then(a.1.cmp(&b.1))
            .then(a.2.cmp(&b.2))
    });

    let mut det_taken = vec![false; num_dets];
    let mut track_taken = vec![false; num_tracks];
    let mut matches = Vec::new();

    for (_, d, t) in candidates {
        if det_taken[d] || track_taken[t] {
            continue;
        }
        det_taken[d] = true;
        track_taken[t] = true;
        matches.push((d, t));
    }

    AssignmentResult::from_matches(matches, num_dets, num_tracks)
}

/// Minimum-total-cost matching gated by `max_distance`.
///
/// Pairs above the threshold are never accepted. Falls back to
/// [`greedy_assignment`] if the solver fails.
pub fn optimal_assignment(cost_matrix: &Array2<f32>, max_distance: f32) -> AssignmentResult {
    let (num_dets, num_tracks) = cost_matrix.dim();

    if num_dets == 0 || num_tracks == 0 {
        return AssignmentResult::from_matches(Vec::new(), num_dets, num_tracks);
    }

    // The forbidden cost is scaled from the admissible entries rather than
    // `max_distance`: it must outweigh any full row of admissible costs, and
    // stay close enough to them that the solver keeps their precision.
    let size = num_dets.max(num_tracks);
    let largest = cost_matrix
        .iter()
        .filter(|&&cost| cost <= max_distance)
        .fold(0.0_f64, |acc, &cost| acc.max(cost as f64));
    let forbidden = largest * size as f64 + 1.0;
    let mut padded = Array2::<f64>::from_elem((size, size), forbidden);

    for ((d, t), &cost) in cost_matrix.indexed_iter() {
        if cost <= max_distance {
            padded[[d, t]] = cost as f64;
        }
    }

    match lapjv::lapjv(&padded) {
        Ok((row_to_col, _)) => {
            let matches = row_to_col
                .iter()
                .take(num_dets)
                .enumerate()
                .filter(|&(d, &t)| t < num_tracks && cost_matrix[[d, t]] <= max_distance)
                .map(|(d, &t)| (d, t))
                .collect();
            AssignmentResult::from_matches(matches, num_dets, num_tracks)
        }
        Err(err) => {
            warn!(?err, "optimal assignment failed, falling back to greedy matching");
            greedy_assignment(cost_matrix, max_distance)
        }
    }
}
