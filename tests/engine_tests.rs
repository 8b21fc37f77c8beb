use pig::{GameEngine, OpponentKind, Roll, RuleMode, Seat, TARGET_SCORE};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn single_die_engine() -> GameEngine {
    GameEngine::new(RuleMode::SingleDie, OpponentKind::Human)
}

fn double_die_engine() -> GameEngine {
    GameEngine::new(RuleMode::DoubleDie, OpponentKind::Human)
}

#[test]
fn fresh_engine_starts_clean() {
    let engine = single_die_engine();
    let view = engine.snapshot();
    assert_eq!(view.active, Seat::First);
    assert_eq!(view.turn_points, 0);
    assert_eq!(view.last_roll, None);
    assert!(!view.forced);
    assert!(!view.game_over);
    assert_eq!(view.winner, None);
    assert!(engine.can_roll());
    assert!(!engine.can_hold());
}

#[test]
fn rolls_accumulate_turn_points() {
    let mut engine = single_die_engine();
    engine.apply_roll(Roll::Single(4));
    engine.apply_roll(Roll::Single(5));
    let view = engine.snapshot();
    assert_eq!(view.turn_points, 9);
    assert_eq!(view.active, Seat::First);
    assert_eq!(view.last_roll, Some(Roll::Single(5)));
}

#[test]
fn single_one_busts_the_turn_but_not_the_total() {
    let mut engine = single_die_engine();
    engine.apply_roll(Roll::Single(6));
    engine.hold(); // First banks 6
    engine.apply_roll(Roll::Single(3)); // Second's turn
    engine.hold(); // Second banks 3, back to First
    engine.apply_roll(Roll::Single(4));
    engine.apply_roll(Roll::Single(1));
    let view = engine.snapshot();
    assert_eq!(view.turn_points, 0);
    assert_eq!(view.active, Seat::Second);
    assert_eq!(view.players[Seat::First].total, 6); // untouched by the bust
}

#[test]
fn hold_banks_and_hands_over() {
    let mut engine = single_die_engine();
    engine.apply_roll(Roll::Single(4));
    engine.apply_roll(Roll::Single(6));
    assert!(engine.can_hold());
    engine.hold();
    let view = engine.snapshot();
    assert_eq!(view.players[Seat::First].total, 10);
    assert_eq!(view.turn_points, 0);
    assert_eq!(view.active, Seat::Second);
    assert!(!view.game_over);
}

#[test]
fn hold_with_nothing_banked_is_a_noop() {
    let mut engine = single_die_engine();
    let before = engine.snapshot();
    engine.hold();
    assert_eq!(engine.snapshot(), before);
}

#[test]
fn forced_pair_bars_holding() {
    let mut engine = double_die_engine();
    engine.apply_roll(Roll::Double(5, 5));
    let before = engine.snapshot();
    assert_eq!(before.turn_points, 10);
    assert!(before.forced);
    assert_eq!(before.active, Seat::First);
    assert!(!engine.can_hold());
    engine.hold();
    assert_eq!(engine.snapshot(), before);
}

#[test]
fn forced_flag_clears_on_the_next_roll() {
    let mut engine = double_die_engine();
    engine.apply_roll(Roll::Double(5, 5));
    engine.apply_roll(Roll::Double(3, 4));
    let view = engine.snapshot();
    assert_eq!(view.turn_points, 17);
    assert!(!view.forced);
    assert!(engine.can_hold());
}

#[test]
fn one_one_die_in_double_mode_busts_without_total_reset() {
    let mut engine = double_die_engine();
    engine.apply_roll(Roll::Double(6, 5));
    engine.hold(); // First banks 11
    engine.apply_roll(Roll::Double(2, 6)); // Second's turn
    engine.apply_roll(Roll::Double(1, 5)); // bust
    let view = engine.snapshot();
    assert_eq!(view.turn_points, 0);
    assert_eq!(view.active, Seat::First);
    assert_eq!(view.players[Seat::First].total, 11);
    assert_eq!(view.players[Seat::Second].total, 0);
}

#[test]
fn double_ones_wipe_the_roller_banked_total() {
    let mut engine = double_die_engine();
    engine.apply_roll(Roll::Double(6, 5));
    engine.hold(); // First banks 11
    engine.apply_roll(Roll::Double(2, 3));
    engine.hold(); // Second banks 5, back to First
    engine.apply_roll(Roll::Double(4, 6));
    engine.apply_roll(Roll::Double(1, 1));
    let view = engine.snapshot();
    assert_eq!(view.turn_points, 0);
    assert_eq!(view.players[Seat::First].total, 0); // wiped
    assert_eq!(view.players[Seat::Second].total, 5); // opponent untouched
    assert_eq!(view.active, Seat::Second);
    assert!(!view.game_over);
}

#[test]
fn winning_hold_sets_terminal_state_without_handover() {
    let mut engine = single_die_engine();
    for _ in 0..17 {
        engine.apply_roll(Roll::Single(6));
    }
    assert_eq!(engine.snapshot().turn_points, 102);
    engine.hold();
    let view = engine.snapshot();
    assert!(view.game_over);
    assert_eq!(view.winner, Some(Seat::First));
    assert_eq!(view.active, Seat::First); // no handover on a win
    assert!(view.players[Seat::First].total >= TARGET_SCORE);
    assert_eq!(view.players[Seat::First].wins, 1);
    assert_eq!(view.players[Seat::First].losses, 0);
    assert_eq!(view.players[Seat::Second].wins, 0);
    assert_eq!(view.players[Seat::Second].losses, 1);
}

#[test]
fn everything_is_a_noop_after_game_over() {
    let mut engine = single_die_engine();
    for _ in 0..17 {
        engine.apply_roll(Roll::Single(6));
    }
    engine.hold();
    let terminal = engine.snapshot();
    assert!(!engine.can_roll());
    assert!(!engine.can_hold());
    engine.apply_roll(Roll::Single(5));
    engine.hold();
    let mut rng = SmallRng::seed_from_u64(1);
    engine.roll(&mut rng);
    assert_eq!(engine.snapshot(), terminal);
}

#[test]
fn ninety_five_plus_four_is_not_a_win() {
    let mut engine = single_die_engine();
    for _ in 0..19 {
        engine.apply_roll(Roll::Single(5));
    }
    engine.hold(); // First banks 95
    engine.apply_roll(Roll::Single(2));
    engine.hold(); // Second banks 2, back to First
    engine.apply_roll(Roll::Single(4));
    engine.hold();
    let view = engine.snapshot();
    assert_eq!(view.players[Seat::First].total, 99);
    assert!(!view.game_over);
    assert_eq!(view.active, Seat::Second); // ordinary handover
}

#[test]
fn pair_at_ninety_forces_a_further_roll() {
    let mut engine = double_die_engine();
    for _ in 0..9 {
        engine.apply_roll(Roll::Double(6, 4));
    }
    engine.hold(); // First banks 90
    engine.apply_roll(Roll::Double(2, 3));
    engine.hold(); // Second banks 5, back to First
    engine.apply_roll(Roll::Double(6, 4));
    engine.apply_roll(Roll::Double(5, 5));
    let view = engine.snapshot();
    assert_eq!(view.players[Seat::First].total, 90);
    assert_eq!(view.turn_points, 20);
    assert!(view.forced);
    assert_eq!(view.active, Seat::First);
    assert!(!engine.can_hold());
}

#[test]
fn reset_preserving_stats_keeps_the_record() {
    let mut engine = single_die_engine();
    for _ in 0..17 {
        engine.apply_roll(Roll::Single(6));
    }
    engine.hold(); // First wins
    engine.reset(true);
    let view = engine.snapshot();
    assert_eq!(view.players[Seat::First].total, 0);
    assert_eq!(view.players[Seat::First].wins, 1);
    assert_eq!(view.players[Seat::Second].losses, 1);
    assert_eq!(view.active, Seat::First);
    assert_eq!(view.turn_points, 0);
    assert_eq!(view.last_roll, None);
    assert!(!view.forced);
    assert!(!view.game_over);
    assert_eq!(view.winner, None);
}

#[test]
fn reset_without_preserving_clears_the_record() {
    let mut engine = single_die_engine();
    for _ in 0..17 {
        engine.apply_roll(Roll::Single(6));
    }
    engine.hold();
    engine.reset(false);
    let view = engine.snapshot();
    assert_eq!(view.players[Seat::First].wins, 0);
    assert_eq!(view.players[Seat::Second].losses, 0);
}

#[test]
fn rule_mode_switch_restarts_but_keeps_stats() {
    let mut engine = single_die_engine();
    for _ in 0..17 {
        engine.apply_roll(Roll::Single(6));
    }
    engine.hold();
    engine.set_rule_mode(RuleMode::DoubleDie);
    let view = engine.snapshot();
    assert_eq!(view.mode, RuleMode::DoubleDie);
    assert_eq!(view.players[Seat::First].total, 0);
    assert_eq!(view.players[Seat::First].wins, 1);
    assert!(!view.game_over);
}

#[test]
fn opponent_switch_renames_seat_two_and_clears_stats() {
    let mut engine = single_die_engine();
    for _ in 0..17 {
        engine.apply_roll(Roll::Single(6));
    }
    engine.hold();
    engine.set_opponent(OpponentKind::Computer);
    let view = engine.snapshot();
    assert_eq!(view.players[Seat::Second].name, "Computer");
    assert_eq!(view.players[Seat::First].wins, 0);
    assert_eq!(view.players[Seat::Second].losses, 0);
    engine.set_opponent(OpponentKind::Human);
    assert_eq!(engine.snapshot().players[Seat::Second].name, "Player 2");
}

#[test]
fn rng_rolls_draw_per_mode() {
    let mut rng = SmallRng::seed_from_u64(42);
    let mut single = GameEngine::new(RuleMode::SingleDie, OpponentKind::Computer);
    single.roll(&mut rng);
    match single.snapshot().last_roll {
        Some(Roll::Single(f)) => assert!((1..=6).contains(&f)),
        other => panic!("expected a single-die roll, got {:?}", other),
    }

    let mut double = GameEngine::new(RuleMode::DoubleDie, OpponentKind::Computer);
    double.roll(&mut rng);
    match double.snapshot().last_roll {
        Some(Roll::Double(a, b)) => {
            assert!((1..=6).contains(&a));
            assert!((1..=6).contains(&b));
        }
        other => panic!("expected a double-die roll, got {:?}", other),
    }
}
