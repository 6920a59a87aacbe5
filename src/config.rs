/// Fixed game tunables.
///
/// There is no runtime configuration: everything is a constant, gathered
/// into `Config` so level generation and the tick can take it explicitly.

use std::time::Duration;

// ── Field & timing ───────────────────────────────────────────────────────────

pub const FIELD_WIDTH: i32 = 800;
pub const FIELD_HEIGHT: i32 = 600;
pub const FPS: u64 = 60;
pub const FRUIT_SPAWN_INTERVAL: Duration = Duration::from_millis(4000);

// ── Player ───────────────────────────────────────────────────────────────────

pub const PLAYER_SIZE: i32 = 28;
pub const PLAYER_SPEED: i32 = 4;
pub const STARTING_LIVES: i32 = 3;
/// Distance the player is thrown back (up and left) when caught.
pub const KNOCKBACK: i32 = 60;

// ── Bushes ───────────────────────────────────────────────────────────────────

pub const BUSH_COUNT: usize = 12;
pub const BUSH_MIN_SIZE: i32 = 80;
pub const BUSH_MAX_SIZE: i32 = 160;
pub const BUSH_PLACEMENT_ATTEMPTS: u32 = 2000;

// ── Enemies ──────────────────────────────────────────────────────────────────

pub const ENEMY_COUNT: usize = 3;
pub const ENEMY_SIZE: i32 = 30;
pub const ENEMY_SPEED: i32 = 2;
/// Per-bush, per-tick chance that an enemy inside it reverses direction.
pub const ENEMY_TURN_CHANCE: f64 = 0.02;
/// Multiplier applied to an enemy's velocity when it bumps a hidden player.
pub const HIDDEN_PUSH_FACTOR: i32 = 10;

// ── Fruit ────────────────────────────────────────────────────────────────────

pub const FRUIT_SIZE: i32 = 12;
pub const FRUIT_MARGIN: i32 = 8;
pub const FRUIT_SCORE: u32 = 10;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Config {
    pub field_width: i32,
    pub field_height: i32,
    pub player_size: i32,
    pub player_speed: i32,
    pub starting_lives: i32,
    pub knockback: i32,
    pub bush_count: usize,
    pub bush_min_size: i32,
    pub bush_max_size: i32,
    pub bush_placement_attempts: u32,
    pub enemy_count: usize,
    pub enemy_size: i32,
    pub enemy_speed: i32,
    pub enemy_turn_chance: f64,
    pub hidden_push_factor: i32,
    pub fruit_size: i32,
    pub fruit_margin: i32,
    pub fruit_score: u32,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,
            player_size: PLAYER_SIZE,
            player_speed: PLAYER_SPEED,
            starting_lives: STARTING_LIVES,
            knockback: KNOCKBACK,
            bush_count: BUSH_COUNT,
            bush_min_size: BUSH_MIN_SIZE,
            bush_max_size: BUSH_MAX_SIZE,
            bush_placement_attempts: BUSH_PLACEMENT_ATTEMPTS,
            enemy_count: ENEMY_COUNT,
            enemy_size: ENEMY_SIZE,
            enemy_speed: ENEMY_SPEED,
            enemy_turn_chance: ENEMY_TURN_CHANCE,
            hidden_push_factor: HIDDEN_PUSH_FACTOR,
            fruit_size: FRUIT_SIZE,
            fruit_margin: FRUIT_MARGIN,
            fruit_score: FRUIT_SCORE,
        }
    }
}
