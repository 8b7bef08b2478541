//! Level layout generation
//!
//! Turns a seed into a non-overlapping arrangement of platforms, coins, and a
//! finish marker. Everything below is a pure function of (seed, container
//! size, tuning). Platforms are placed as a chain walk rather than
//! independently: each one sits within a bounded horizontal gap of the
//! previous, which keeps the level navigable without a reachability solver.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::bounds::Aabb;
use super::rng::SeededRandom;
use crate::consts::*;
use crate::tuning::LevelTuning;

/// Semantic role of a body at the engine boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BodyRole {
    Player,
    Platform,
    Ground,
    Coin,
    Finish,
    Wall,
    Background,
}

impl BodyRole {
    /// Roles a candidate coin is allowed to overlap during placement.
    fn placement_exempt(self) -> bool {
        matches!(
            self,
            BodyRole::Ground | BodyRole::Background | BodyRole::Player
        )
    }
}

/// Scaled viewport derived from the real container size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub scale: f64,
}

impl Viewport {
    /// Fit the base 1024x768 playfield into a container, preserving aspect.
    pub fn fit(container_width: f64, container_height: f64) -> Self {
        let scale = (container_width / BASE_WIDTH).min(container_height / BASE_HEIGHT);
        Self {
            width: BASE_WIDTH * scale,
            height: BASE_HEIGHT * scale,
            scale,
        }
    }

    /// Y of the ground plane (top of the ground band).
    pub fn ground_y(&self) -> f64 {
        self.height - GROUND_HEIGHT * self.scale
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::fit(BASE_WIDTH, BASE_HEIGHT)
    }
}

/// Immutable per-session level parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LevelSpec {
    pub seed: i64,
    pub level_width: i32,
    pub ground_y: f64,
    pub viewport: Viewport,
}

impl LevelSpec {
    /// X of the finish marker. Platform and coin placement stop short of it.
    pub fn finish_x(&self) -> f64 {
        f64::from(self.level_width) - FINISH_SETBACK
    }

    /// Platform budget derived from the level width.
    pub fn platform_count(&self) -> i32 {
        self.level_width / PIXELS_PER_PLATFORM
    }
}

/// A static platform rectangle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    pub id: u32,
    pub center: DVec2,
    pub size: DVec2,
}

impl Platform {
    pub fn bounds(&self) -> Aabb {
        Aabb::from_rect(self.center, self.size)
    }
}

/// A collectible, registered with the engine as a non-solid sensor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coin {
    pub id: u32,
    pub center: DVec2,
    pub radius: f64,
    /// Flipped exactly once by the session; a collected coin is logically
    /// removed and further contacts with it are no-ops.
    pub collected: bool,
}

impl Coin {
    pub fn bounds(&self) -> Aabb {
        Aabb::from_circle(self.center, self.radius)
    }
}

/// Goal marker at the right end of the level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinishMarker {
    pub id: u32,
    pub center: DVec2,
    pub size: DVec2,
}

impl FinishMarker {
    pub fn bounds(&self) -> Aabb {
        Aabb::from_rect(self.center, self.size)
    }
}

/// One of the four boundary rectangles. The bottom one carries the Ground
/// role; the player can rest on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wall {
    pub id: u32,
    pub role: BodyRole,
    pub center: DVec2,
    pub size: DVec2,
}

impl Wall {
    pub fn bounds(&self) -> Aabb {
        Aabb::from_rect(self.center, self.size)
    }
}

/// Spawn descriptor for the player's dynamic collider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerSpawn {
    pub id: u32,
    pub position: DVec2,
    pub radius: f64,
}

/// Body descriptor outbound to the engine.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StaticBody {
    pub id: u32,
    pub role: BodyRole,
    pub bounds: Aabb,
    /// Sensors report contacts without physical collision response.
    pub sensor: bool,
}

/// A fully generated level: spec plus every body the engine must register.
///
/// Written once at generation; read-only afterwards except for each coin's
/// single collected-flag flip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Level {
    pub spec: LevelSpec,
    pub platforms: Vec<Platform>,
    pub finish: FinishMarker,
    pub walls: [Wall; 4],
    pub coins: Vec<Coin>,
    pub player: PlayerSpawn,
}

impl Level {
    /// Generate the full level for a seed.
    ///
    /// Draw order is fixed (width, platform chain, finish height, coins) so
    /// a given seed always yields bit-identical geometry.
    pub fn generate(seed: i64, viewport: Viewport, tuning: &LevelTuning) -> Level {
        let mut rng = SeededRandom::new(seed);
        let level_width = rng.between(tuning.min_level_width, tuning.max_level_width);
        let spec = LevelSpec {
            seed,
            level_width,
            ground_y: viewport.ground_y(),
            viewport,
        };
        log::info!(
            "generating level: seed={seed} width={level_width} platforms={}",
            spec.platform_count()
        );

        let mut next_id = 0u32;
        let platforms = walk_platform_chain(&mut rng, &spec, tuning, &mut next_id);
        let finish = place_finish(&mut rng, &spec, &mut next_id);
        let walls = boundary_walls(&spec, &mut next_id);
        let coins = place_coins(&mut rng, &spec, tuning, &platforms, &finish, &walls, &mut next_id);
        let player = PlayerSpawn {
            id: alloc_id(&mut next_id),
            position: DVec2::new(PLAYER_START_X, PLAYER_START_Y),
            radius: PLAYER_RADIUS * viewport.scale,
        };

        log::info!(
            "level ready: {} platforms, {} coins, finish at x={}",
            platforms.len(),
            coins.len(),
            spec.finish_x()
        );
        Level {
            spec,
            platforms,
            finish,
            walls,
            coins,
            player,
        }
    }

    /// Static body list for the engine to register.
    pub fn static_bodies(&self) -> Vec<StaticBody> {
        let mut bodies = Vec::with_capacity(self.platforms.len() + self.coins.len() + 5);
        bodies.extend(self.walls.iter().map(|w| StaticBody {
            id: w.id,
            role: w.role,
            bounds: w.bounds(),
            sensor: false,
        }));
        bodies.extend(self.platforms.iter().map(|p| StaticBody {
            id: p.id,
            role: BodyRole::Platform,
            bounds: p.bounds(),
            sensor: false,
        }));
        bodies.push(StaticBody {
            id: self.finish.id,
            role: BodyRole::Finish,
            bounds: self.finish.bounds(),
            sensor: false,
        });
        bodies.extend(self.coins.iter().map(|c| StaticBody {
            id: c.id,
            role: BodyRole::Coin,
            bounds: c.bounds(),
            sensor: true,
        }));
        bodies
    }

    pub fn coin_mut(&mut self, id: u32) -> Option<&mut Coin> {
        self.coins.iter_mut().find(|c| c.id == id)
    }

    /// Coins still collectible. Always based on the actually-placed count,
    /// which may fall short of the generation target.
    pub fn coins_remaining(&self) -> u32 {
        self.coins.iter().filter(|c| !c.collected).count() as u32
    }
}

fn alloc_id(next: &mut u32) -> u32 {
    let id = *next;
    *next += 1;
    id
}

/// Walk the platform chain left to right, stepping up or down by the vertical
/// step and reversing (never clamping) at the vertical bounds.
fn walk_platform_chain(
    rng: &mut SeededRandom,
    spec: &LevelSpec,
    tuning: &LevelTuning,
    next_id: &mut u32,
) -> Vec<Platform> {
    let s = spec.viewport.scale;
    let size = DVec2::new(PLATFORM_WIDTH * s, PLATFORM_HEIGHT * s);
    let min_gap = tuning.platform_spacing.0 * s;
    let max_gap = tuning.platform_spacing.1 * s;
    let step = tuning.vertical_step * s;
    let min_y = PLATFORM_Y_MARGIN;
    let max_y = spec.ground_y - PLATFORM_Y_MARGIN;
    let finish_x = spec.finish_x();

    let mut platforms = Vec::new();
    let mut last_x = 0.0;
    let mut last_y = max_y;
    for _ in 0..spec.platform_count() {
        let gap = rng.next_f64() * (max_gap - min_gap) + min_gap;
        let x = last_x + gap;
        if x >= finish_x {
            // Reserve room for the finish marker.
            break;
        }
        let y = if rng.next_f64() > 0.5 {
            let raised = last_y - step;
            if raised < min_y { last_y + step } else { raised }
        } else {
            let lowered = last_y + step;
            if lowered > max_y { last_y - step } else { lowered }
        };
        last_x = x;
        last_y = y;
        platforms.push(Platform {
            id: alloc_id(next_id),
            center: DVec2::new(x, y),
            size,
        });
    }
    platforms
}

/// Place the finish marker: fixed X, drawn height, centered vertically within
/// the play area above the ground plane.
fn place_finish(rng: &mut SeededRandom, spec: &LevelSpec, next_id: &mut u32) -> FinishMarker {
    let s = spec.viewport.scale;
    let height = ((rng.next_f64() * 100.0).floor() + 100.0) * s;
    let y = (spec.ground_y - height) / 2.0 + height / 2.0;
    FinishMarker {
        id: alloc_id(next_id),
        center: DVec2::new(spec.finish_x(), y),
        size: DVec2::new(FINISH_WIDTH * s, height),
    }
}

/// The four boundary rectangles: left, right, top plane, ground plane.
fn boundary_walls(spec: &LevelSpec, next_id: &mut u32) -> [Wall; 4] {
    let width = f64::from(spec.level_width);
    let vp = spec.viewport;
    [
        Wall {
            id: alloc_id(next_id),
            role: BodyRole::Wall,
            center: DVec2::new(-WALL_THICKNESS / 2.0, vp.height / 2.0),
            size: DVec2::new(WALL_THICKNESS, vp.height),
        },
        Wall {
            id: alloc_id(next_id),
            role: BodyRole::Wall,
            center: DVec2::new(width + WALL_THICKNESS, vp.height / 2.0),
            size: DVec2::new(WALL_THICKNESS, vp.height),
        },
        Wall {
            id: alloc_id(next_id),
            role: BodyRole::Wall,
            center: DVec2::new(0.0, 0.0),
            size: DVec2::new(width * 2.0, WALL_THICKNESS),
        },
        Wall {
            id: alloc_id(next_id),
            role: BodyRole::Ground,
            center: DVec2::new(0.0, spec.ground_y),
            size: DVec2::new(width * 2.0, GROUND_PLANE_THICKNESS),
        },
    ]
}

/// Rejection-sampling coin placement.
///
/// Per coin, up to the attempt budget of draws; a draw is rejected when its
/// inflated bounds touch any non-exempt body already placed. Exhausting the
/// budget skips the coin silently, so the placed count may fall short of the
/// target. An attempt whose X lands in the reserved finish strip is consumed
/// without drawing a Y.
fn place_coins(
    rng: &mut SeededRandom,
    spec: &LevelSpec,
    tuning: &LevelTuning,
    platforms: &[Platform],
    finish: &FinishMarker,
    walls: &[Wall; 4],
    next_id: &mut u32,
) -> Vec<Coin> {
    let radius = COIN_RADIUS * spec.viewport.scale;
    let target = spec.platform_count() as u32 * tuning.coins_per_platform;
    let x_span = f64::from(spec.level_width) - 2.0 * COIN_X_MARGIN;
    let y_span = spec.ground_y - radius - COIN_GROUND_CLEARANCE - COIN_MIN_Y;
    let finish_x = spec.finish_x();

    let mut coins: Vec<Coin> = Vec::with_capacity(target as usize);
    for _ in 0..target {
        for _ in 0..tuning.max_placement_attempts {
            let x = rng.next_f64() * x_span + COIN_X_MARGIN;
            if x >= finish_x {
                continue;
            }
            let y = rng.next_f64() * y_span + COIN_MIN_Y;
            let center = DVec2::new(x, y);
            let region = Aabb::from_circle(center, radius).inflate(COIN_EXCLUSION_MARGIN);

            let blocked = platforms
                .iter()
                .map(|p| (BodyRole::Platform, p.bounds()))
                .chain(std::iter::once((BodyRole::Finish, finish.bounds())))
                .chain(walls.iter().map(|w| (w.role, w.bounds())))
                .chain(coins.iter().map(|c| (BodyRole::Coin, c.bounds())))
                .any(|(role, bounds)| !role.placement_exempt() && bounds.intersects(&region));
            if !blocked {
                coins.push(Coin {
                    id: alloc_id(next_id),
                    center,
                    radius,
                    collected: false,
                });
                break;
            }
        }
    }
    if (coins.len() as u32) < target {
        log::debug!("coin placement exhausted: placed {}/{target}", coins.len());
    }
    coins
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::LevelTuning;
    use proptest::prelude::*;

    fn generate(seed: i64) -> Level {
        Level::generate(seed, Viewport::default(), &LevelTuning::default())
    }

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "{a} != {b}");
    }

    #[test]
    fn test_seed_one_golden_layout() {
        // Hand-verified reference layout for seed 1, scale 1.
        let level = generate(1);
        assert_eq!(level.spec.level_width, 1000);
        assert_eq!(level.spec.platform_count(), 5);
        assert_close(level.spec.ground_y, 618.0);
        assert_close(level.spec.finish_x(), 900.0);

        // The chain terminates early: the fourth step would cross the
        // reserved finish strip.
        let centers: Vec<(f64, f64)> = level
            .platforms
            .iter()
            .map(|p| (p.center.x, p.center.y))
            .collect();
        assert_eq!(centers.len(), 3);
        let expected = [
            (213.15377881431664, 418.0),
            (459.01879200666156, 318.0),
            (680.9147106394706, 418.0),
        ];
        for ((x, y), (ex, ey)) in centers.iter().zip(expected) {
            assert_close(*x, ex);
            assert_close(*y, ey);
        }

        assert_close(level.finish.center.x, 900.0);
        assert_close(level.finish.center.y, 309.0);
        assert_close(level.finish.size.y, 167.0);

        assert_eq!(level.coins.len(), 20);
        assert_close(level.coins[0].center.x, 814.4170788067472);
        assert_close(level.coins[0].center.y, 67.90835325322503);
        assert_close(level.coins[1].center.x, 75.78855329229896);
        assert_close(level.coins[1].center.y, 324.38470014761424);
        assert_close(level.coins[19].center.x, 72.57978452722531);
        assert_close(level.coins[19].center.y, 444.4643878119366);
    }

    #[test]
    fn test_generation_is_deterministic() {
        for seed in [1, 42, 987654321, -5, i64::MAX] {
            assert_eq!(generate(seed), generate(seed));
        }
    }

    #[test]
    fn test_level_width_and_counts_in_range() {
        let tuning = LevelTuning::default();
        for seed in [1, 2, 3, 1000, 123456789] {
            let level = generate(seed);
            let width = level.spec.level_width;
            assert!((tuning.min_level_width..=tuning.max_level_width).contains(&width));
            assert_eq!(level.spec.platform_count(), width / 200);
            assert!(level.platforms.len() as i32 <= level.spec.platform_count());
            let target = level.spec.platform_count() as u32 * tuning.coins_per_platform;
            assert!(level.coins.len() as u32 <= target);
        }
    }

    #[test]
    fn test_platform_chain_stays_reachable_and_in_bounds() {
        let tuning = LevelTuning::default();
        for seed in [7, 99, 424242] {
            let level = generate(seed);
            let min_y = PLATFORM_Y_MARGIN;
            let max_y = level.spec.ground_y - PLATFORM_Y_MARGIN;
            let mut last_x = 0.0;
            for p in &level.platforms {
                let gap = p.center.x - last_x;
                assert!(gap >= tuning.platform_spacing.0 - 1e-9);
                assert!(gap <= tuning.platform_spacing.1 + 1e-9);
                assert!(p.center.y >= min_y && p.center.y <= max_y);
                assert!(p.center.x < level.spec.finish_x());
                last_x = p.center.x;
            }
        }
    }

    #[test]
    fn test_coins_do_not_overlap_static_geometry() {
        for seed in [1, 55, 987654321] {
            let level = generate(seed);
            for (i, coin) in level.coins.iter().enumerate() {
                let region = coin.bounds().inflate(COIN_EXCLUSION_MARGIN);
                for p in &level.platforms {
                    assert!(!p.bounds().intersects(&region), "seed {seed} coin {i}");
                }
                assert!(!level.finish.bounds().intersects(&region));
                for w in &level.walls {
                    if w.role == BodyRole::Wall {
                        assert!(!w.bounds().intersects(&region));
                    }
                }
                for (j, other) in level.coins.iter().enumerate() {
                    if i != j {
                        assert!(!other.bounds().intersects(&region), "coins {i}/{j}");
                    }
                }
            }
        }
    }

    #[test]
    fn test_finish_marker_fits_play_area() {
        for seed in [1, 9, 31337] {
            let level = generate(seed);
            let bounds = level.finish.bounds();
            assert!(level.finish.size.y >= 100.0 && level.finish.size.y < 200.0);
            assert!(bounds.top() >= 0.0);
            assert!(bounds.bottom() <= level.spec.ground_y);
        }
    }

    #[test]
    fn test_boundary_walls_span_level() {
        let level = generate(42);
        let width = f64::from(level.spec.level_width);
        let roles: Vec<BodyRole> = level.walls.iter().map(|w| w.role).collect();
        assert_eq!(roles.iter().filter(|r| **r == BodyRole::Ground).count(), 1);
        assert!(level.walls[0].center.x < 0.0);
        assert!(level.walls[1].center.x > width);
        assert_close(level.walls[2].center.y, 0.0);
        assert_close(level.walls[3].center.y, level.spec.ground_y);
    }

    #[test]
    fn test_scaled_viewport_scales_geometry() {
        let viewport = Viewport::fit(512.0, 384.0);
        assert_close(viewport.scale, 0.5);
        assert_close(viewport.ground_y(), 309.0);

        let level = Level::generate(42, viewport, &LevelTuning::default());
        for p in &level.platforms {
            assert_close(p.size.x, 50.0);
            assert_close(p.size.y, 20.0);
        }
        for c in &level.coins {
            assert_close(c.radius, 10.0);
        }
        assert_close(level.player.radius, 12.5);
    }

    #[test]
    fn test_zero_seed_matches_showcase_level() {
        // The degenerate zero seed substitutes the showcase stream.
        let zero = generate(0);
        let showcase = generate(SHOWCASE_SEED);
        assert_eq!(zero.platforms, showcase.platforms);
        assert_eq!(zero.coins, showcase.coins);
    }

    #[test]
    fn test_static_bodies_cover_all_geometry() {
        let level = generate(1);
        let bodies = level.static_bodies();
        assert_eq!(
            bodies.len(),
            4 + level.platforms.len() + 1 + level.coins.len()
        );
        // Only coins are sensors, and ids never repeat.
        let mut ids: Vec<u32> = bodies.iter().map(|b| b.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), bodies.len());
        for body in &bodies {
            assert_eq!(body.sensor, body.role == BodyRole::Coin);
        }
    }

    proptest! {
        #[test]
        fn prop_any_seed_yields_consistent_level(seed in any::<i64>()) {
            let tuning = LevelTuning::default();
            let level = generate(seed);
            let width = level.spec.level_width;
            prop_assert!(width >= tuning.min_level_width && width <= tuning.max_level_width);
            let target = level.spec.platform_count() as u32 * tuning.coins_per_platform;
            prop_assert!(level.coins.len() as u32 <= target);
            prop_assert!(level.platforms.len() as i32 <= level.spec.platform_count());
            prop_assert_eq!(generate(seed), level);
        }
    }
}
