use centroid_track::tracker::{greedy_assignment, optimal_assignment};
use centroid_track::{
    AssignmentStrategy, CentroidTracker, Detection, DistanceMetric, TrackState, TrackedObject,
    TrackerConfig,
};
use ndarray::Array2;

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

fn tracker(max_distance: f32, miss_threshold: u32) -> CentroidTracker {
    init_logging();
    CentroidTracker::new(TrackerConfig {
        max_distance,
        miss_threshold,
        ..Default::default()
    })
    .unwrap()
}

fn ids(objects: &[TrackedObject]) -> Vec<u64> {
    objects.iter().map(|o| o.id).collect()
}

#[test]
fn test_single_object_appears_moves_and_vanishes() {
    let mut tracker = tracker(100.0, 0);

    // Frame 1: one detection
    let tracks1 = tracker.update(&[Detection::new(10.0, 10.0, 20.0, 20.0, 0.9, "can")]);
    assert_eq!(ids(&tracks1), vec![1]);
    assert_eq!(tracks1[0].label(), "can");

    // Frame 2: same object moved slightly
    let tracks2 = tracker.update(&[Detection::new(12.0, 11.0, 22.0, 21.0, 0.85, "can")]);
    assert_eq!(ids(&tracks2), vec![1]);
    assert_eq!(tracks2[0].bbox().to_tlbr(), [12, 11, 22, 21]);
    let track = tracker.tracks().next().unwrap();
    assert_eq!(track.hits, 2);
    assert_eq!(track.state, TrackState::Confirmed);

    // Frame 3: object disappears, zero miss tolerance drops it
    let tracks3 = tracker.update(&[]);
    assert!(tracks3.is_empty());
    assert!(tracker.is_empty());
}

#[test]
fn test_distant_simultaneous_detections_get_separate_ids() {
    let mut tracker = tracker(100.0, 0);
    let objects = tracker.update(&[
        Detection::new(0.0, 0.0, 10.0, 10.0, 0.9, "can"),
        Detection::new(500.0, 500.0, 510.0, 510.0, 0.7, "foam"),
    ]);
    assert_eq!(ids(&objects), vec![1, 2]);
    assert_eq!(objects[1].label(), "foam");
}

#[test]
fn test_near_detection_keeps_id_far_one_spawns() {
    let mut tracker = tracker(100.0, 0);
    tracker.update(&[Detection::new(100.0, 100.0, 120.0, 120.0, 0.9, "plastic")]);

    // Far detection listed first to show input order does not matter.
    let objects = tracker.update(&[
        Detection::new(600.0, 100.0, 620.0, 120.0, 0.9, "plastic"),
        Detection::new(105.0, 100.0, 125.0, 120.0, 0.9, "plastic"),
    ]);
    assert_eq!(ids(&objects), vec![1, 2]);
    assert_eq!(objects[0].bbox().x1, 105);
    assert_eq!(objects[1].bbox().x1, 600);
}

#[test]
fn test_track_survives_misses_within_budget() {
    let mut tracker = tracker(100.0, 2);
    tracker.update(&[Detection::new(0.0, 0.0, 10.0, 10.0, 0.9, "can")]);
    tracker.update(&[Detection::new(1.0, 0.0, 11.0, 10.0, 0.9, "can")]);

    assert_eq!(ids(&tracker.update(&[])), vec![1]);
    assert_eq!(ids(&tracker.update(&[])), vec![1]);

    let objects = tracker.update(&[Detection::new(3.0, 0.0, 13.0, 10.0, 0.9, "can")]);
    assert_eq!(ids(&objects), vec![1]);
    let track = tracker.tracks().next().unwrap();
    assert_eq!((track.hits, track.misses, track.age), (1, 0, 5));
    assert_eq!(track.state, TrackState::Confirmed);
}

#[test]
fn test_hits_count_only_the_current_run() {
    let mut tracker = tracker(100.0, 1);
    tracker.update(&[Detection::new(0.0, 0.0, 10.0, 10.0, 0.9, "can")]);
    tracker.update(&[Detection::new(1.0, 0.0, 11.0, 10.0, 0.9, "can")]);
    tracker.update(&[]);
    tracker.update(&[Detection::new(2.0, 0.0, 12.0, 10.0, 0.9, "can")]);

    let track = tracker.tracks().next().unwrap();
    assert_eq!(track.id, 1);
    assert_eq!((track.hits, track.misses, track.age), (1, 0, 4));
}

#[test]
fn test_threshold_excludes_lone_candidate() {
    let mut tracker = tracker(50.0, 5);
    tracker.update(&[Detection::new(0.0, 0.0, 10.0, 10.0, 0.9, "can")]);

    let objects = tracker.update(&[Detection::new(60.0, 0.0, 70.0, 10.0, 0.9, "can")]);
    assert_eq!(ids(&objects), vec![1, 2]);
    assert_eq!(tracker.tracks().next().unwrap().misses, 1);
}

#[test]
fn test_ids_are_never_reused() {
    let mut tracker = tracker(100.0, 0);
    let mut seen = Vec::new();

    for frame in 0..6 {
        let dets = if frame % 2 == 0 {
            vec![Detection::new(0.0, 0.0, 10.0, 10.0, 0.9, "can")]
        } else {
            vec![]
        };
        seen.extend(ids(&tracker.update(&dets)));
    }

    assert_eq!(seen, vec![1, 2, 3]);
}

#[test]
fn test_empty_input_is_idempotent_after_expiry() {
    let mut tracker = tracker(100.0, 1);
    tracker.update(&[
        Detection::new(0.0, 0.0, 10.0, 10.0, 0.9, "can"),
        Detection::new(300.0, 0.0, 310.0, 10.0, 0.9, "foam"),
    ]);

    for _ in 0..2 {
        tracker.update(&[]);
    }
    for _ in 0..10 {
        assert!(tracker.update(&[]).is_empty());
    }
}

#[test]
fn test_identical_detections_resolve_deterministically() {
    let frames: Vec<Vec<Detection>> = vec![
        vec![Detection::new(50.0, 50.0, 60.0, 60.0, 0.9, "can"); 3],
        vec![Detection::new(50.0, 50.0, 60.0, 60.0, 0.8, "can"); 2],
        vec![Detection::new(51.0, 50.0, 61.0, 60.0, 0.7, "can"); 4],
    ];

    let run = || {
        let mut tracker = tracker(100.0, 1);
        frames
            .iter()
            .map(|dets| {
                let objects = tracker.update(dets);
                let states: Vec<(u64, TrackState)> =
                    tracker.tracks().map(|t| (t.id, t.state)).collect();
                (ids(&objects), states)
            })
            .collect::<Vec<_>>()
    };

    let first = run();
    assert_eq!(first, run());
    // Ties go to the earliest track, so ids 1 and 2 are kept on frame 2.
    assert_eq!(
        first[1].1,
        vec![
            (1, TrackState::Confirmed),
            (2, TrackState::Confirmed),
            (3, TrackState::Tentative),
        ]
    );
    assert_eq!(first[2].0, vec![1, 2, 3, 4]);
}

#[test]
fn test_assignments_are_one_to_one() {
    let costs = Array2::from_shape_fn((5, 4), |(d, t)| ((d * 7 + t * 3) % 5) as f32);
    for result in [greedy_assignment(&costs, 3.0), optimal_assignment(&costs, 3.0)] {
        let mut dets: Vec<usize> = result.matches.iter().map(|m| m.0).collect();
        let mut tracks: Vec<usize> = result.matches.iter().map(|m| m.1).collect();
        dets.dedup();
        tracks.sort_unstable();
        tracks.dedup();
        assert_eq!(dets.len(), result.matches.len());
        assert_eq!(tracks.len(), result.matches.len());
        assert_eq!(result.matches.len() + result.unmatched_detections.len(), 5);
        assert_eq!(result.matches.len() + result.unmatched_tracks.len(), 4);
        assert!(result.matches.iter().all(|&(d, t)| costs[[d, t]] <= 3.0));
    }
}

#[test]
fn test_config_from_json() {
    let json = r#"{"max_distance": 40.0, "metric": "manhattan", "assignment": "optimal"}"#;
    let config: TrackerConfig = serde_json::from_str(json).unwrap();
    assert_eq!(config.max_distance, 40.0);
    assert_eq!(config.miss_threshold, 0);
    assert_eq!(config.metric, DistanceMetric::Manhattan);
    assert_eq!(config.assignment, AssignmentStrategy::Optimal);
    assert!(CentroidTracker::new(config).is_ok());

    let bad: TrackerConfig = serde_json::from_str(r#"{"max_distance": -1.0}"#).unwrap();
    assert!(CentroidTracker::new(bad).is_err());
}
