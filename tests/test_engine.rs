use poopdrop::game::engine::*;

use rand::rngs::StdRng;
use rand::SeedableRng;

fn started() -> GameState {
    let mut state = GameState::new(0);
    state.start();
    state
}

fn item(id: u32, x: f32, y: f32, speed: f32, kind: ItemKind) -> FallingItem {
    FallingItem { id, x, y, speed, kind }
}

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

// ── start / phase transitions ─────────────────────────────────────────────────

#[test]
fn new_state_is_idle() {
    let state = GameState::new(0);
    assert_eq!(state.phase, Phase::Idle);
    assert_eq!(state.score, 0);
    assert_eq!(state.lives, START_LIVES);
    assert!(state.items.is_empty());
}

#[test]
fn start_resets_session() {
    let mut state = started();
    state.score = 120;
    state.lives = 1;
    state.level = 2;
    state.catcher_x = 20.0;
    state.items.push(item(0, 10.0, 50.0, 2.0, ItemKind::Poop));
    state.phase = Phase::Ended;

    state.start();
    assert_eq!(state.phase, Phase::Running);
    assert_eq!(state.score, 0);
    assert_eq!(state.lives, 3);
    assert_eq!(state.level, 0);
    assert_eq!(state.catcher_x, 50.0);
    assert!(state.items.is_empty());
    assert!(state.notice.is_none());
}

#[test]
fn start_is_noop_while_running() {
    let mut state = started();
    state.score = 40;
    state.start();
    assert_eq!(state.score, 40);
}

#[test]
fn start_preserves_high_score() {
    let mut state = GameState::new(777);
    state.start();
    assert_eq!(state.high_score, 777);
}

// ── spawn ─────────────────────────────────────────────────────────────────────

#[test]
fn spawn_is_noop_when_idle() {
    let mut state = GameState::new(0);
    state.spawn_tick(&mut seeded_rng());
    assert!(state.items.is_empty());
}

#[test]
fn spawn_is_noop_when_ended() {
    let mut state = started();
    state.phase = Phase::Ended;
    state.spawn_tick(&mut seeded_rng());
    assert!(state.items.is_empty());
}

#[test]
fn spawn_places_item_above_field_in_range() {
    let mut state = started();
    let mut rng = seeded_rng();
    for _ in 0..100 {
        state.spawn_tick(&mut rng);
    }
    assert_eq!(state.items.len(), 100);
    for it in &state.items {
        assert_eq!(it.y, SPAWN_Y);
        assert!((0.0..SPAWN_X_MAX).contains(&it.x));
        assert!((MIN_SPEED..MAX_SPEED).contains(&it.speed));
    }
}

#[test]
fn spawn_ids_are_monotonic_and_never_reused() {
    let mut state = started();
    let mut rng = seeded_rng();
    state.spawn_tick(&mut rng);
    state.spawn_tick(&mut rng);
    assert_eq!(state.items[0].id, 0);
    assert_eq!(state.items[1].id, 1);

    // Drain the field; the counter must not rewind
    state.items.clear();
    state.spawn_tick(&mut rng);
    assert_eq!(state.items[0].id, 2);
}

// ── catcher movement ──────────────────────────────────────────────────────────

#[test]
fn move_left_and_right_step_by_five() {
    let mut state = started();
    state.move_left();
    assert_eq!(state.catcher_x, 45.0);
    state.move_right();
    state.move_right();
    assert_eq!(state.catcher_x, 55.0);
}

#[test]
fn move_clamps_at_boundaries() {
    let mut state = started();
    state.catcher_x = 6.0;
    state.move_left();
    assert_eq!(state.catcher_x, CATCHER_MIN_X);
    state.move_left();
    assert_eq!(state.catcher_x, CATCHER_MIN_X);

    state.catcher_x = 94.0;
    state.move_right();
    assert_eq!(state.catcher_x, CATCHER_MAX_X);
    state.move_right();
    assert_eq!(state.catcher_x, CATCHER_MAX_X);
}

#[test]
fn move_is_ignored_outside_running() {
    let mut state = GameState::new(0);
    state.move_left();
    assert_eq!(state.catcher_x, 50.0);
    state.phase = Phase::Ended;
    state.move_right();
    assert_eq!(state.catcher_x, 50.0);
}

// ── update: motion, catch, miss ───────────────────────────────────────────────

#[test]
fn update_advances_items_by_speed() {
    let mut state = started();
    state.catcher_x = 90.0; // out of the way
    state.items.push(item(0, 10.0, 20.0, 1.5, ItemKind::Paper));
    state.update_tick();
    assert_eq!(state.items[0].y, 21.5);
}

#[test]
fn update_is_noop_when_idle() {
    let mut state = GameState::new(0);
    state.items.push(item(0, 10.0, 20.0, 2.0, ItemKind::Paper));
    state.update_tick();
    assert_eq!(state.items[0].y, 20.0);
}

#[test]
fn update_is_noop_when_ended() {
    let mut state = started();
    state.phase = Phase::Ended;
    state.items.push(item(0, 10.0, 20.0, 2.0, ItemKind::Poop));
    state.update_tick();
    assert_eq!(state.items[0].y, 20.0);
    assert_eq!(state.score, 0);
}

#[test]
fn catch_scores_and_removes_item_same_tick() {
    let mut state = started(); // catcher at 50
    state.items.push(item(0, 50.0, 84.0, 1.0, ItemKind::Toilet));
    state.update_tick(); // y=85: overlaps [85,95]
    assert_eq!(state.score, 30);
    assert!(state.items.is_empty());
    assert_eq!(state.lives, 3);
}

#[test]
fn catch_sets_flash_then_decays() {
    let mut state = started();
    state.items.push(item(0, 50.0, 84.0, 1.0, ItemKind::Paper));
    state.update_tick();
    assert_eq!(state.catch_flash, CATCH_FLASH_TICKS);
    for _ in 0..CATCH_FLASH_TICKS {
        state.update_tick();
    }
    assert_eq!(state.catch_flash, 0);
}

#[test]
fn item_outside_catcher_span_is_not_caught() {
    let mut state = started(); // catcher box [46, 54]
    state.items.push(item(0, 60.0, 84.0, 1.0, ItemKind::Pill));
    state.update_tick();
    assert_eq!(state.score, 0);
    assert_eq!(state.items.len(), 1);
}

#[test]
fn missed_poop_costs_exactly_one_life() {
    let mut state = started();
    state.catcher_x = 90.0;
    state.items.push(item(0, 10.0, 98.0, 3.0, ItemKind::Poop));
    state.update_tick(); // y=101 > 100
    assert_eq!(state.lives, 2);
    assert!(state.items.is_empty());
    assert_eq!(state.score, 0);
}

#[test]
fn missed_bonus_items_are_forgiven() {
    let mut state = started();
    state.catcher_x = 90.0;
    state.items.push(item(0, 10.0, 98.0, 3.0, ItemKind::Paper));
    state.items.push(item(1, 20.0, 98.0, 3.0, ItemKind::Toilet));
    state.items.push(item(2, 30.0, 98.0, 3.0, ItemKind::Pill));
    state.update_tick();
    assert_eq!(state.lives, 3);
    assert!(state.items.is_empty());
}

#[test]
fn lives_saturate_at_zero() {
    let mut state = started();
    state.catcher_x = 90.0;
    state.lives = 1;
    state.items.push(item(0, 10.0, 98.0, 3.0, ItemKind::Poop));
    state.items.push(item(1, 20.0, 98.0, 3.0, ItemKind::Poop));
    state.update_tick();
    assert_eq!(state.lives, 0);
}

#[test]
fn multiple_items_resolved_in_one_tick() {
    let mut state = started(); // catcher box [46, 54]
    state.items.push(item(0, 48.0, 84.0, 1.0, ItemKind::Poop));
    state.items.push(item(1, 50.0, 84.0, 1.0, ItemKind::Pill));
    state.update_tick();
    assert_eq!(state.score, 60);
    assert!(state.items.is_empty());
}

// ── level progression ─────────────────────────────────────────────────────────

fn catch_pill(state: &mut GameState) {
    let id = state.next_id;
    state.next_id += 1;
    state.items.push(item(id, state.catcher_x, 84.0, 1.0, ItemKind::Pill));
    state.update_tick();
}

#[test]
fn level_tracks_score_over_fifty() {
    let mut state = started();
    catch_pill(&mut state);
    assert_eq!(state.score, 50);
    assert_eq!(state.level, 1);
    catch_pill(&mut state);
    assert_eq!(state.level, 2);
    catch_pill(&mut state);
    assert_eq!(state.score, 150);
    assert_eq!(state.level, 3);
}

#[test]
fn each_level_transition_emits_one_notice() {
    let mut state = started();
    catch_pill(&mut state);
    assert_eq!(state.notice, Some("Toilet Rookie"));

    // No new transition, the notice only counts down
    state.update_tick();
    state.update_tick();
    assert_eq!(state.notice, Some("Toilet Rookie"));

    catch_pill(&mut state);
    assert_eq!(state.notice, Some("Poop Pro"));
    catch_pill(&mut state);
    assert_eq!(state.notice, Some("Flush Master"));
}

#[test]
fn notice_clears_after_its_window() {
    let mut state = started();
    catch_pill(&mut state);
    assert!(state.notice.is_some());
    for _ in 0..NOTICE_TICKS {
        state.update_tick();
    }
    assert!(state.notice.is_none());
}

#[test]
fn level_name_clamps_to_last_entry() {
    let mut state = started();
    state.score = 50 * (LEVEL_NAMES.len() as u32 + 5);
    state.level = state.score / LEVEL_STEP - 1; // force one more transition
    state.update_tick();
    assert_eq!(state.notice, Some("Ultimate Toilet Master"));
}

// ── session end ───────────────────────────────────────────────────────────────

#[test]
fn session_ends_shortly_after_last_life() {
    let mut state = started();
    state.catcher_x = 90.0;
    state.lives = 1;
    state.items.push(item(0, 10.0, 98.0, 3.0, ItemKind::Poop));

    state.update_tick();
    assert_eq!(state.lives, 0);
    assert_eq!(state.phase, Phase::Running); // end is delayed
    for _ in 0..END_DELAY_TICKS {
        state.update_tick();
    }
    assert_eq!(state.phase, Phase::Ended);
}

#[test]
fn session_does_not_end_while_lives_remain() {
    let mut state = started();
    for _ in 0..200 {
        state.update_tick();
    }
    assert_eq!(state.phase, Phase::Running);
}

#[test]
fn high_score_updates_on_end_when_beaten() {
    let mut state = started();
    catch_pill(&mut state); // score 50, high 0
    state.lives = 0;
    for _ in 0..=END_DELAY_TICKS {
        state.update_tick();
    }
    assert_eq!(state.phase, Phase::Ended);
    assert_eq!(state.high_score, 50);
    assert!(state.new_high);
}

#[test]
fn high_score_keeps_old_value_when_not_beaten() {
    let mut state = GameState::new(100);
    state.start();
    catch_pill(&mut state); // score 50 < high 100
    state.lives = 0;
    for _ in 0..=END_DELAY_TICKS {
        state.update_tick();
    }
    assert_eq!(state.phase, Phase::Ended);
    assert_eq!(state.high_score, 100);
    assert!(!state.new_high);
}

// ── invariants over a random session ──────────────────────────────────────────

#[test]
fn invariants_hold_over_many_random_ticks() {
    let mut state = started();
    let mut rng = seeded_rng();
    let mut prev_score = 0;
    let mut prev_lives = state.lives;
    let mut prev_level = 0;

    for tick in 0..800 {
        if tick % 16 == 0 {
            state.spawn_tick(&mut rng);
        }
        state.update_tick();

        assert!(state.score >= prev_score, "score must be non-decreasing");
        assert!(state.lives <= prev_lives, "lives must never increase");
        assert!(state.level >= prev_level, "level must never decrease");
        assert_eq!(state.level, state.score / LEVEL_STEP);
        for it in &state.items {
            assert!(it.y <= FIELD_BOTTOM, "no retained item below the field");
        }
        if state.phase == Phase::Ended {
            assert_eq!(state.lives, 0, "only zero lives ends a session");
            break;
        }
        prev_score = state.score;
        prev_lives = state.lives;
        prev_level = state.level;
    }
}

// ── spec scenario: pill caught at the center ──────────────────────────────────

#[test]
fn scenario_pill_catch_at_center() {
    let mut state = started(); // catcher already at 50
    state.items.push(item(0, 50.0, SPAWN_Y, 2.0, ItemKind::Pill));

    for _ in 0..100 {
        state.update_tick();
        if state.items.is_empty() {
            break;
        }
    }
    assert_eq!(state.score, 50);
    assert!(state.items.is_empty());
    assert_eq!(state.lives, 3);
}

#[test]
fn scenario_unattended_poop_falls_through() {
    let mut state = started();
    state.catcher_x = 90.0;
    state.items.push(item(0, 10.0, SPAWN_Y, 2.0, ItemKind::Poop));

    for _ in 0..100 {
        state.update_tick();
        if state.items.is_empty() {
            break;
        }
    }
    assert_eq!(state.lives, 2);
    assert_eq!(state.score, 0);
    assert!(state.items.is_empty());
}
