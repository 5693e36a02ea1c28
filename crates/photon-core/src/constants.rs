//! Simulation constants and tuning parameters.

// --- Arena ---

/// Default arena width in meters.
pub const ARENA_WIDTH_METERS: f64 = 80.0;

/// Default arena height in meters.
pub const ARENA_HEIGHT_METERS: f64 = 45.0;

/// Footprint of a unit in meters.
pub const UNIT_SIZE_METERS: f64 = 1.0;

/// Footprint of a base in meters.
pub const BASE_SIZE_METERS: f64 = 3.0;

/// Maximum size a warp gate grows to while being summoned.
pub const WARP_GATE_MAX_SIZE_METERS: f64 = 4.0;

/// Upper bound the host must clamp frame time to before ticking.
pub const MAX_FRAME_DT: f64 = 0.1;

/// Slack for countdown timers compared against zero.
pub const TIMER_EPSILON: f64 = 1e-9;

// --- Economy ---

/// Income rate grows by one every this many seconds.
pub const INCOME_STEP_SECS: f64 = 10.0;

/// Payout interval for accumulated income.
pub const INCOME_PAYOUT_INTERVAL_SECS: f64 = 1.0;

/// Starting hit points of each base.
pub const BASE_START_HP: f64 = 1000.0;

// --- Movement and promotion ---

/// Distance below which a move target counts as reached.
pub const ARRIVAL_EPSILON: f64 = 0.1;

/// Promotion credit needed for one promotion.
pub const PROMOTION_DISTANCE_THRESHOLD: f64 = 10.0;

/// Damage multiplier factor applied per promotion.
pub const PROMOTION_MULTIPLIER: f64 = 1.1;

/// Extra credit fraction per pending move node in the queue.
pub const QUEUE_BONUS_PER_NODE: f64 = 0.1;

/// Base movement speed (m/s).
pub const BASE_MOVE_SPEED: f64 = 1.0;

// --- Abilities ---

/// Shots fired by one burst.
pub const BURST_SHOT_COUNT: u32 = 10;

/// Flat damage per burst shot before promotion.
pub const BURST_SHOT_DAMAGE: f64 = 2.0;

/// Search radius around the dash target point.
pub const DASH_SEARCH_RADIUS: f64 = 2.0;

/// Dash damage as a multiple of the caster's attack damage.
pub const DASH_DAMAGE_FACTOR: f64 = 5.0;

/// How long the dash animation flag stays raised.
pub const DASH_FLASH_SECS: f64 = 0.2;

/// Maximum line-jump distance.
pub const LINE_JUMP_MAX_RANGE: f64 = 10.0;

/// Telegraph duration before the jump resolves.
pub const LINE_JUMP_DELAY_SECS: f64 = 0.5;

/// Path samples per meter when resolving a jump.
pub const LINE_JUMP_SAMPLES_PER_METER: f64 = 10.0;

/// Distance from a sampled path point that counts as a hit.
pub const LINE_JUMP_HIT_RADIUS: f64 = UNIT_SIZE_METERS;

/// Damage dealt to each enemy crossed by a jump, before promotion.
pub const LINE_JUMP_DAMAGE: f64 = 20.0;

// --- Base turrets ---

/// Range of a base laser.
pub const BASE_LASER_RANGE: f64 = 8.0;

/// Damage per base laser shot.
pub const BASE_LASER_DAMAGE: f64 = 25.0;

/// Seconds between base laser shots.
pub const BASE_LASER_COOLDOWN_SECS: f64 = 1.5;

// --- Field particles ---

pub const FIELD_PARTICLE_COUNT: usize = 1000;
pub const FIELD_PARTICLE_SIZE: f64 = 0.15;
/// Very low mass so repulsion moves particles easily.
pub const FIELD_PARTICLE_MASS: f64 = 0.05;
pub const FIELD_PARTICLE_OPACITY: f64 = 0.6;

pub const UNIT_REPULSION_RADIUS: f64 = 3.0;
pub const UNIT_REPULSION_FORCE: f64 = 8.0;
pub const STRUCTURE_REPULSION_RADIUS: f64 = 4.0;
pub const STRUCTURE_REPULSION_FORCE: f64 = 7.0;
pub const MINING_DEPOT_REPULSION_RADIUS: f64 = 4.5;
pub const MINING_DEPOT_REPULSION_FORCE: f64 = 7.5;
pub const PROJECTILE_REPULSION_RADIUS: f64 = 2.0;
pub const PROJECTILE_REPULSION_FORCE: f64 = 5.0;
pub const SHELL_REPULSION_RADIUS: f64 = 1.6;
pub const SHELL_REPULSION_FORCE: f64 = 4.0;
/// Seconds a shell casing stays on the field.
pub const SHELL_LIFETIME_SECS: f64 = 10.0;
pub const BASE_REPULSION_RADIUS: f64 = 4.0;
pub const BASE_REPULSION_FORCE: f64 = 6.0;
pub const WARP_GATE_REPULSION_RADIUS: f64 = WARP_GATE_MAX_SIZE_METERS * 0.75;
pub const WARP_GATE_REPULSION_FORCE: f64 = 9.0;

/// Per-tick multiplicative velocity damping.
pub const PARTICLE_DAMPING: f64 = 0.95;
pub const PARTICLE_MAX_SPEED: f64 = 8.0;
pub const PARTICLE_MAX_SPEED_SQUARED: f64 = PARTICLE_MAX_SPEED * PARTICLE_MAX_SPEED;

/// Inset from every arena edge that particles are kept within.
pub const BOUNDARY_MARGIN: f64 = 2.0;

/// Fraction of the normal velocity kept after an edge bounce.
pub const BOUNCE_DAMPING_FACTOR: f64 = 0.5;

/// Repulsion is skipped closer than this.
pub const MIN_REPULSION_DISTANCE: f64 = 0.01;

/// How far base colors are pulled toward the scheme's neutral tone before
/// influence tinting.
pub const NEUTRAL_BLEND_RATIO: f64 = 0.5;
