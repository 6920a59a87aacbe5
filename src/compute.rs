/// Pure game-logic functions.
///
/// Every public function takes immutable references to the current state
/// (and, where needed, an RNG handle) and returns new values. Side effects
/// are limited to the injected RNG and log output.

use log::info;
use rand::Rng;

use crate::config::Config;
use crate::entities::{
    Bush, Enemy, FrameInput, Fruit, GameEvent, GameState, GameStatus, HeldKeys, Player,
};
use crate::geometry::{contains, intersects};
use crate::level::{reset_level, spawn_fruit};

// ── Movement ──────────────────────────────────────────────────────────────────

/// Move the player by its speed along each held axis, then clamp it inside
/// the field. When both keys of an axis are held, right and down win.
pub fn move_player(player: &Player, keys: &HeldKeys, config: &Config) -> Player {
    let mut dx = 0;
    let mut dy = 0;
    if keys.left {
        dx = -player.speed;
    }
    if keys.right {
        dx = player.speed;
    }
    if keys.up {
        dy = -player.speed;
    }
    if keys.down {
        dy = player.speed;
    }

    let mut rect = player.rect;
    rect.x = (rect.x + dx).min(config.field_width - rect.width).max(0);
    rect.y = (rect.y + dy).min(config.field_height - rect.height).max(0);

    Player {
        rect,
        ..player.clone()
    }
}

/// Advance an enemy one step: bounce off the field walls, then roll a
/// chance to reverse for every bush it is currently touching.
pub fn move_enemy(enemy: &Enemy, bushes: &[Bush], config: &Config, rng: &mut impl Rng) -> Enemy {
    let mut e = enemy.clone();
    e.rect.x += e.vx;
    e.rect.y += e.vy;

    if e.rect.left() <= 0 || e.rect.right() >= config.field_width {
        e.vx = -e.vx;
    }
    if e.rect.top() <= 0 || e.rect.bottom() >= config.field_height {
        e.vy = -e.vy;
    }
    e.rect.x = e.rect.x.min(config.field_width - e.rect.width).max(0);
    e.rect.y = e.rect.y.min(config.field_height - e.rect.height).max(0);

    for bush in bushes {
        if intersects(&e.rect, &bush.rect) && rng.gen_bool(config.enemy_turn_chance) {
            e.vx = -e.vx;
            e.vy = -e.vy;
        }
    }
    e
}

// ── Concealment ───────────────────────────────────────────────────────────────

/// True iff the player sits entirely inside at least one bush.
pub fn is_hidden(player: &Player, bushes: &[Bush]) -> bool {
    bushes.iter().any(|b| contains(&b.rect, &player.rect))
}

// ── Collisions ────────────────────────────────────────────────────────────────

/// Outcome of checking every enemy against the player for one tick.
#[derive(Clone, Debug)]
pub struct ContactOutcome {
    pub player: Player,
    pub enemies: Vec<Enemy>,
    /// Lives ran out during this tick.
    pub caught: bool,
}

/// Apply every enemy/player overlap in order.
///
/// An exposed player loses a life per touching enemy and is knocked up and
/// left (floored at zero only). A hidden player is left alone and the enemy
/// is shoved along its own heading instead.
pub fn resolve_enemy_contacts(player: &Player, enemies: &[Enemy], config: &Config) -> ContactOutcome {
    let mut player = player.clone();
    let mut caught = false;

    let enemies = enemies
        .iter()
        .map(|enemy| {
            let mut e = enemy.clone();
            if !intersects(&e.rect, &player.rect) {
                return e;
            }
            if player.hidden {
                if e.vx == 0 && e.vy == 0 {
                    e.vx = config.enemy_speed;
                }
                e.rect.x += e.vx * config.hidden_push_factor;
                e.rect.y += e.vy * config.hidden_push_factor;
            } else {
                player.lives -= 1;
                player.rect.x = (player.rect.x - config.knockback).max(0);
                player.rect.y = (player.rect.y - config.knockback).max(0);
                if player.lives <= 0 {
                    caught = true;
                }
            }
            e
        })
        .collect();

    ContactOutcome {
        player,
        enemies,
        caught,
    }
}

/// Eat every fruit the player overlaps. Returns the scored player and the
/// fruits left over.
pub fn collect_fruits(player: &Player, fruits: &[Fruit], config: &Config) -> (Player, Vec<Fruit>) {
    let (eaten, remaining): (Vec<Fruit>, Vec<Fruit>) = fruits
        .iter()
        .cloned()
        .partition(|f| intersects(&f.rect, &player.rect));

    let player = Player {
        score: player.score + config.fruit_score * eaten.len() as u32,
        ..player.clone()
    };
    (player, remaining)
}

/// Keep only fruits that still touch some bush.
pub fn prune_stranded_fruits(fruits: &[Fruit], bushes: &[Bush]) -> Vec<Fruit> {
    fruits
        .iter()
        .filter(|f| bushes.iter().any(|b| intersects(&b.rect, &f.rect)))
        .cloned()
        .collect()
}

// ── Discrete events ───────────────────────────────────────────────────────────

/// Apply one queued event. Events that make no sense in the current status
/// (restart while playing, fruit while paused) are dropped.
pub fn apply_event(state: &GameState, event: GameEvent, rng: &mut impl Rng) -> GameState {
    match (event, state.status) {
        (GameEvent::TogglePause, GameStatus::Running) => {
            info!("paused at frame {}", state.frame);
            GameState {
                status: GameStatus::Paused,
                ..state.clone()
            }
        }
        (GameEvent::TogglePause, GameStatus::Paused) => {
            info!("resumed at frame {}", state.frame);
            GameState {
                status: GameStatus::Running,
                ..state.clone()
            }
        }
        (GameEvent::Restart, GameStatus::GameOver) => {
            info!("restarting after final score {}", state.player.score);
            reset_level(&state.config, rng)
        }
        (GameEvent::SpawnFruit, GameStatus::Running) => {
            let mut fruits = state.fruits.clone();
            fruits.extend(spawn_fruit(&state.bushes, &state.config, rng));
            GameState {
                fruits,
                ..state.clone()
            }
        }
        _ => state.clone(),
    }
}

// ── Per-frame tick (RNG is injected) ─────────────────────────────────

/// One simulation step of a running game.
pub fn step(state: &GameState, keys: &HeldKeys, rng: &mut impl Rng) -> GameState {
    let config = &state.config;

    // ── 1. Player movement & concealment ─────────────────────────────────────
    let moved = move_player(&state.player, keys, config);
    let player = Player {
        hidden: is_hidden(&moved, &state.bushes),
        ..moved
    };

    // ── 2. Enemy patrol ──────────────────────────────────────────────────────
    let enemies: Vec<Enemy> = state
        .enemies
        .iter()
        .map(|e| move_enemy(e, &state.bushes, config, rng))
        .collect();

    // ── 3. Enemy ↔ player ────────────────────────────────────────────────────
    let contact = resolve_enemy_contacts(&player, &enemies, config);
    let status = if contact.caught {
        info!(
            "game over at frame {} with score {}",
            state.frame + 1,
            contact.player.score
        );
        GameStatus::GameOver
    } else {
        state.status
    };

    // ── 4. Fruit ─────────────────────────────────────────────────────────────
    let (player, fruits) = collect_fruits(&contact.player, &state.fruits, config);
    let fruits = prune_stranded_fruits(&fruits, &state.bushes);

    GameState {
        player,
        enemies: contact.enemies,
        fruits,
        status,
        frame: state.frame + 1,
        ..state.clone()
    }
}

/// Advance the game by one frame: drain the frame's events in order, then
/// step the simulation if the game is (still) running.
pub fn tick(state: &GameState, input: &FrameInput, rng: &mut impl Rng) -> GameState {
    let state = input
        .events
        .iter()
        .fold(state.clone(), |s, &event| apply_event(&s, event, rng));

    if state.status == GameStatus::Running {
        step(&state, &input.keys, rng)
    } else {
        state
    }
}
