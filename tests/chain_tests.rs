//! Szenarien über die öffentliche Ketten-API.

use approx::assert_abs_diff_eq;
use bezier_chain_editor::core::{Placement, SAMPLE_STEPS};
use bezier_chain_editor::{ChainError, SmoothChainBuilder};
use glam::Vec2;

fn place_all(builder: &mut SmoothChainBuilder, points: &[(f32, f32)]) {
    for &(x, y) in points {
        builder
            .place_point(Vec2::new(x, y))
            .expect("Punkt sollte gesetzt werden");
    }
}

#[test]
fn test_every_segment_starts_and_ends_on_its_points() {
    let mut builder = SmoothChainBuilder::new();
    builder.start_session();
    place_all(
        &mut builder,
        &[(0.0, 0.0), (80.0, 120.0), (200.0, -40.0), (260.0, 300.0), (-90.0, 15.5)],
    );

    let chain = builder.chain();
    for seg in chain.segments() {
        let samples = seg.samples();
        assert_eq!(samples.len(), SAMPLE_STEPS + 1);
        let start = chain.arena().position(seg.start());
        let end = chain.arena().position(seg.end());
        assert_abs_diff_eq!(samples[0].x, start.x, epsilon = 1e-3);
        assert_abs_diff_eq!(samples[0].y, start.y, epsilon = 1e-3);
        assert_abs_diff_eq!(samples[SAMPLE_STEPS].x, end.x, epsilon = 1e-3);
        assert_abs_diff_eq!(samples[SAMPLE_STEPS].y, end.y, epsilon = 1e-3);
    }
}

#[test]
fn test_tangent_continuity_survives_joint_drag() {
    let mut builder = SmoothChainBuilder::new();
    builder.start_session();
    place_all(&mut builder, &[(0.0, 0.0), (100.0, 0.0), (200.0, 0.0)]);
    builder.place_point(Vec2::new(100.0, 0.0)).unwrap();

    for target in [(100.0, 50.0), (130.0, -20.0), (90.0, 75.0)] {
        builder
            .drag_selected_point(Vec2::new(target.0, target.1))
            .unwrap();

        let chain = builder.chain();
        let joint = chain.arena().position(chain.segments()[0].end());
        let c0 = chain.control_position(0).unwrap();
        let c1 = chain.control_position(1).unwrap();

        // Tangente am Ende von Segment 0 und am Anfang von Segment 1 zeigen gleich
        let out_dir = (joint - c0).normalize();
        let in_dir = (c1 - joint).normalize();
        assert_abs_diff_eq!(out_dir.dot(in_dir), 1.0, epsilon = 1e-4);
        assert!(chain
            .segments()
            .iter()
            .all(|s| s.samples().iter().all(|p| p.is_finite())));
    }
}

#[test]
fn test_idle_builder_rejects_nothing_but_adds_nothing() {
    let mut builder = SmoothChainBuilder::new();
    assert_eq!(
        builder.place_point(Vec2::new(1.0, 1.0)).unwrap(),
        Placement::Ignored
    );
    assert_eq!(
        builder.drag_selected_point(Vec2::ONE),
        Err(ChainError::NoSelection)
    );
    assert_eq!(builder.end_session(), Err(ChainError::SessionNotActive));
    assert!(builder.chain().segments().is_empty());
}
