use std::time::{Duration, Instant};

use bush_game::clock::*;

const PERIOD: Duration = Duration::from_millis(4000);

#[test]
fn timer_silent_before_first_period() {
    let start = Instant::now();
    let mut t = SpawnTimer::new(start, PERIOD);
    assert_eq!(t.poll(start), 0);
    assert_eq!(t.poll(start + Duration::from_millis(3999)), 0);
}

#[test]
fn timer_fires_once_per_period() {
    let start = Instant::now();
    let mut t = SpawnTimer::new(start, PERIOD);
    assert_eq!(t.poll(start + PERIOD), 1);
    assert_eq!(t.poll(start + PERIOD + Duration::from_millis(10)), 0);
    assert_eq!(t.poll(start + PERIOD * 2), 1);
}

#[test]
fn timer_catches_up_after_stall() {
    let start = Instant::now();
    let mut t = SpawnTimer::new(start, PERIOD);
    assert_eq!(t.poll(start + Duration::from_millis(10_500)), 2);
    assert_eq!(t.poll(start + Duration::from_millis(12_000)), 1);
}

#[test]
fn timer_is_frame_rate_independent() {
    // Polling every frame or once at the end yields the same firings.
    let start = Instant::now();
    let mut every_frame = SpawnTimer::new(start, PERIOD);
    let mut total = 0;
    for ms in (0..=9000).step_by(16) {
        total += every_frame.poll(start + Duration::from_millis(ms));
    }
    let mut once = SpawnTimer::new(start, PERIOD);
    assert_eq!(total, once.poll(start + Duration::from_millis(8992)));
    assert_eq!(total, 2);
}

#[test]
fn zero_period_never_fires() {
    let start = Instant::now();
    let mut t = SpawnTimer::new(start, Duration::ZERO);
    assert_eq!(t.poll(start + Duration::from_secs(60)), 0);
}

#[test]
fn pacer_frame_length_matches_rate() {
    let start = Instant::now();
    let pacer = FramePacer::new(60, start);
    assert_eq!(pacer.remaining(start), Duration::from_micros(16_666));
    assert_eq!(
        pacer.remaining(start + Duration::from_millis(10)),
        Duration::from_micros(6_666)
    );
}

#[test]
fn pacer_has_nothing_left_after_overrun() {
    let start = Instant::now();
    let pacer = FramePacer::new(60, start);
    assert_eq!(pacer.remaining(start + Duration::from_millis(50)), Duration::ZERO);
}
