/// All game entity types. Pure data, no logic.

use crate::config::Config;
use crate::geometry::Rect;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Running,
    Paused,
    GameOver,
}

// ── Input ─────────────────────────────────────────────────────────────────────

/// Direction keys currently held down.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HeldKeys {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

/// Discrete events queued during a frame and drained at the start of the tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEvent {
    TogglePause,
    /// Only honoured while the game is over.
    Restart,
    /// Fired by the wall-clock fruit timer.
    SpawnFruit,
}

/// Everything the simulation needs from the outside world for one frame.
#[derive(Clone, Debug, Default)]
pub struct FrameInput {
    pub keys: HeldKeys,
    pub events: Vec<GameEvent>,
}

// ── Entities ──────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub rect: Rect,
    pub speed: i32,
    /// Fully inside a bush this tick. Recomputed every tick.
    pub hidden: bool,
    pub score: u32,
    /// May go below zero when several enemies hit in the same tick.
    pub lives: i32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    pub rect: Rect,
    pub vx: i32,
    pub vy: i32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Bush {
    pub rect: Rect,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Fruit {
    pub rect: Rect,
}

/// One thing to draw, tagged by kind.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Drawable<'a> {
    Bush(&'a Bush),
    Fruit(&'a Fruit),
    Player(&'a Player),
    Enemy(&'a Enemy),
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The entire game state. Cloneable so the tick can return a new copy
/// without mutating the original.
#[derive(Clone, Debug)]
pub struct GameState {
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub bushes: Vec<Bush>,
    pub fruits: Vec<Fruit>,
    pub status: GameStatus,
    /// Simulation steps taken while running.
    pub frame: u64,
    pub config: Config,
}

impl GameState {
    /// Entities in back-to-front order: bushes, fruits, player, enemies.
    pub fn drawables(&self) -> impl Iterator<Item = Drawable<'_>> {
        self.bushes
            .iter()
            .map(Drawable::Bush)
            .chain(self.fruits.iter().map(Drawable::Fruit))
            .chain(std::iter::once(Drawable::Player(&self.player)))
            .chain(self.enemies.iter().map(Drawable::Enemy))
    }
}
