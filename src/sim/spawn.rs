//! Obstacle spawning
//!
//! The gap before the next cactus and its shape are both random. Randomness
//! comes in through [`RandomSource`] so tests can script every draw.

use rand::Rng;
use rand_pcg::Pcg32;

use super::state::{GameState, Obstacle, ObstacleKind};

/// Obstacle shapes, each equally likely
pub const OBSTACLE_CATALOG: [ObstacleKind; 3] = [
    ObstacleKind::Small,
    ObstacleKind::Medium,
    ObstacleKind::Large,
];

/// Source of uniform random numbers for the simulation
pub trait RandomSource {
    /// Uniform sample in `[0, 1)`
    fn next_unit(&mut self) -> f32;
}

impl RandomSource for Pcg32 {
    fn next_unit(&mut self) -> f32 {
        self.random::<f32>()
    }
}

/// Pick a shape uniformly from the catalog
pub fn pick_kind(rng: &mut impl RandomSource) -> ObstacleKind {
    let index = (rng.next_unit() * OBSTACLE_CATALOG.len() as f32) as usize;
    OBSTACLE_CATALOG[index.min(OBSTACLE_CATALOG.len() - 1)]
}

/// Distance the newest obstacle must travel before another may spawn:
/// half the screen plus up to another half
pub fn min_spawn_gap(view_width: f32, rng: &mut impl RandomSource) -> f32 {
    let half = view_width / 2.0;
    half + rng.next_unit() * half
}

/// Append a freshly picked obstacle at the right edge
pub fn spawn_obstacle(state: &mut GameState, rng: &mut impl RandomSource) {
    let kind = pick_kind(rng);
    let obstacle = Obstacle::new(kind, &state.viewport);
    log::debug!(
        "Spawned {:?} at x={} (frame {})",
        kind,
        obstacle.pos.x,
        state.score
    );
    state.obstacles.push(obstacle);
}

/// Spawn policy: spawn when the field is empty or the newest obstacle has
/// moved far enough in. Returns true if an obstacle was spawned.
pub fn maybe_spawn(state: &mut GameState, rng: &mut impl RandomSource) -> bool {
    let view_width = state.viewport.width;
    let min_distance = min_spawn_gap(view_width, rng);

    let due = match state.obstacles.last() {
        None => true,
        Some(last) => view_width - last.pos.x > min_distance,
    };
    if due {
        spawn_obstacle(state, rng);
    }
    due
}
