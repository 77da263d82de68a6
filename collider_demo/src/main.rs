//! Collision Demo
//!
//! Replays a few collision scenarios headlessly and logs the outcome of each
//! query:
//! - A circle stepped past a rectangle with repeated transforms
//! - A spinning bar swept through a ring of tracked crates
//!
//! Settings come from an optional config file passed as the first argument
//! (`.toml` or `.ron`).

use polygon_collider::foundation::logging;
use polygon_collider::foundation::math::constants::TAU;
use polygon_collider::prelude::*;
use log::{info, warn};

// Scene settings
const CRATE_COUNT: usize = 8;
const RING_RADIUS: f32 = 30.0;
const CRATE_SIZE: f32 = 6.0;
const BAR_LENGTH: f32 = 40.0;
const BAR_WIDTH: f32 = 2.0;
const FRAMES: usize = 24;

fn load_config() -> Result<CollisionConfig, ConfigError> {
    let config = match std::env::args().nth(1) {
        Some(path) => CollisionConfig::load_from_file(&path)?,
        None => CollisionConfig::default(),
    };
    config.validate()?;
    Ok(config)
}

/// Circle stepped right by 9 units twice against a 10x10 rectangle
fn run_stepping_circle(config: &CollisionConfig) {
    let mut circle = ConvexPolygonCollider::circle_with_segments(5.0, config.circle_segments);
    let rect = ConvexPolygonCollider::rectangle(Vec2::new(10.0, 10.0));
    let step = affine::translation(9.0, 0.0);

    for attempt in 1..=2 {
        circle.apply_transform(&step);
        let hit = circle.collides_with_tolerance(&rect, config.collinear_tolerance);
        info!(
            "Step {}: circle bounds {:?} collides with rectangle: {}",
            attempt,
            circle.global_bounds(),
            hit
        );
    }
}

/// A bar spinning about the origin, tested against crates placed on a ring
fn run_spinning_bar(config: &CollisionConfig) {
    let crates: Vec<TrackedCollider> = (0..CRATE_COUNT)
        .map(|i| {
            let angle = TAU / CRATE_COUNT as f32 * i as f32;
            let pose = Transform2D::from_translation(Vec2::new(
                angle.cos() * RING_RADIUS,
                angle.sin() * RING_RADIUS,
            ))
            .with_origin(Vec2::new(CRATE_SIZE / 2.0, CRATE_SIZE / 2.0))
            .with_rotation(angle);

            let mut tracked = TrackedCollider::new(ConvexPolygonCollider::rectangle(Vec2::new(
                CRATE_SIZE, CRATE_SIZE,
            )));
            tracked.update(&pose.to_matrix());
            tracked
        })
        .collect();

    let mut bar = TrackedCollider::new(ConvexPolygonCollider::rectangle(Vec2::new(
        BAR_LENGTH, BAR_WIDTH,
    )));

    let mut total_hits = 0;
    for frame in 0..FRAMES {
        let angle = TAU / FRAMES as f32 * frame as f32;
        let pose = Transform2D::identity()
            .with_origin(Vec2::new(0.0, BAR_WIDTH / 2.0))
            .with_rotation(angle);
        bar.update(&pose.to_matrix());

        let hits: Vec<usize> = crates
            .iter()
            .enumerate()
            .filter(|(_, c)| {
                bar.transformed()
                    .collides_with_tolerance(c.transformed(), config.collinear_tolerance)
            })
            .map(|(i, _)| i)
            .collect();

        total_hits += hits.len();
        info!("Frame {:2}: bar at {:6.1} deg touches crates {:?}", frame, angle.to_degrees(), hits);
    }

    if total_hits == 0 {
        warn!("Bar never reached the crate ring");
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config()?;
    logging::init_with_level(&config.log_level);

    info!(
        "Collision demo: {} circle segments, collinear tolerance {}",
        config.circle_segments, config.collinear_tolerance
    );

    run_stepping_circle(&config);
    run_spinning_bar(&config);

    Ok(())
}
