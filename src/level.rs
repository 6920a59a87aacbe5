/// Level layout: bush placement, fruit and enemy spawning, full resets.
///
/// Like `compute`, every function here is pure apart from the injected RNG.

use log::{debug, warn};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::config::Config;
use crate::entities::{Bush, Enemy, Fruit, GameState, GameStatus, Player};
use crate::geometry::{intersects, Rect};

/// Place up to `config.bush_count` non-overlapping bushes.
///
/// Each attempt draws a random size and position fully inside the field and
/// is rejected if it touches an already placed bush. After
/// `bush_placement_attempts` tries the layout is returned as-is, possibly
/// with fewer bushes than requested.
pub fn generate_bushes(config: &Config, rng: &mut impl Rng) -> Vec<Bush> {
    let mut placed: Vec<Rect> = Vec::with_capacity(config.bush_count);
    let mut attempts = 0;

    while placed.len() < config.bush_count && attempts < config.bush_placement_attempts {
        let w = rng.gen_range(config.bush_min_size..=config.bush_max_size);
        let h = rng.gen_range(config.bush_min_size / 2..=config.bush_max_size / 2);
        let x = rng.gen_range(0..=(config.field_width - w).max(0));
        let y = rng.gen_range(0..=(config.field_height - h).max(0));
        let candidate = Rect::new(x, y, w, h);

        if !placed.iter().any(|b| intersects(&candidate, b)) {
            placed.push(candidate);
        }
        attempts += 1;
    }

    if placed.len() < config.bush_count {
        warn!(
            "placed {} of {} bushes after {} attempts",
            placed.len(),
            config.bush_count,
            attempts
        );
    } else {
        debug!("placed {} bushes in {} attempts", placed.len(), attempts);
    }

    placed.into_iter().map(|rect| Bush { rect }).collect()
}

/// Random coordinate for a fruit of `size` inside `[start, start + extent)`,
/// keeping `margin` clear of both edges. Centres the fruit when the span is
/// too small to honour the margin.
fn fruit_coord(start: i32, extent: i32, size: i32, margin: i32, rng: &mut impl Rng) -> i32 {
    let lo = start + margin;
    let hi = start + extent - size - margin;
    if hi < lo {
        start + (extent - size) / 2
    } else {
        rng.gen_range(lo..=hi)
    }
}

/// Drop a fruit somewhere inside a randomly chosen bush.
///
/// Returns `None` when there are no bushes.
pub fn spawn_fruit(bushes: &[Bush], config: &Config, rng: &mut impl Rng) -> Option<Fruit> {
    let bush = bushes.choose(rng)?;
    let r = &bush.rect;
    let size = config.fruit_size;
    let x = fruit_coord(r.x, r.width, size, config.fruit_margin, rng);
    let y = fruit_coord(r.y, r.height, size, config.fruit_margin, rng);
    debug!("fruit spawned at ({}, {})", x, y);
    Some(Fruit {
        rect: Rect::new(x, y, size, size),
    })
}

/// A new enemy at a random position with a random diagonal heading.
pub fn spawn_enemy(config: &Config, rng: &mut impl Rng) -> Enemy {
    let size = config.enemy_size;
    let x = rng.gen_range(0..=(config.field_width - size).max(0));
    let y = rng.gen_range(0..=(config.field_height - size).max(0));
    let speed = config.enemy_speed;
    let vx = if rng.gen_bool(0.5) { speed } else { -speed };
    let vy = if rng.gen_bool(0.5) { speed } else { -speed };
    Enemy {
        rect: Rect::new(x, y, size, size),
        vx,
        vy,
    }
}

/// Player centred in the field with a fresh score and full lives.
pub fn new_player(config: &Config) -> Player {
    let size = config.player_size;
    Player {
        rect: Rect::new(
            config.field_width / 2 - size / 2,
            config.field_height / 2 - size / 2,
            size,
            size,
        ),
        speed: config.player_speed,
        hidden: false,
        score: 0,
        lives: config.starting_lives,
    }
}

/// Build a complete, running level: new bushes, enemies, and one fruit.
pub fn reset_level(config: &Config, rng: &mut impl Rng) -> GameState {
    let bushes = generate_bushes(config, rng);
    let enemies = (0..config.enemy_count)
        .map(|_| spawn_enemy(config, rng))
        .collect();
    let fruits = spawn_fruit(&bushes, config, rng).into_iter().collect();

    GameState {
        player: new_player(config),
        enemies,
        bushes,
        fruits,
        status: GameStatus::Running,
        frame: 0,
        config: *config,
    }
}
