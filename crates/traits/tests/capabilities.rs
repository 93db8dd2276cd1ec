//! # Capability Tests (Session 22)
//!
//! End-to-end checks of the capability model:
//! - Default `can_fly` and its override
//! - `description` for every bird
//! - Top speed over full and partial fields
//! - Boost accumulation
//! - The unknown swallow fault

use std::rc::Rc;

use compositional_traits::{
    top_speed, Bird, Boostable, Describable, FlappyBird, Flyable, Hummingbird, Motorcycle,
    Ostrich, Penguin, RaceExt, Racer, Swallow, ToyBird,
};

fn all_birds() -> Vec<Box<dyn Bird>> {
    vec![
        Box::new(Penguin::new("Pingu")),
        Box::new(FlappyBird::new("Felipe", 2.0, 10.0)),
        Box::new(Hummingbird::new("Hum", 1.0, 10.0)),
        Box::new(Ostrich::new("Olga", 4.0, 3.0)),
        Box::new(Swallow::African),
        Box::new(Swallow::European),
        Box::new(Swallow::Unknown),
        Box::new(ToyBird::new(5.0)),
    ]
}

// ============================================================================
// Default Behavior
// ============================================================================

#[test]
fn test_flyable_birds_default_to_can_fly() {
    let flappy = FlappyBird::new("Felipe", 2.0, 10.0);
    let hummer = Hummingbird::new("Hum", 1.0, 10.0);

    assert!(flappy.as_flyable().is_some());
    assert!(flappy.can_fly());
    assert!(hummer.as_flyable().is_some());
    assert!(hummer.can_fly());
}

#[test]
fn test_non_flyable_birds_default_to_grounded() {
    let pingu = Penguin::new("Pingu");
    let olga = Ostrich::new("Olga", 4.0, 3.0);

    assert!(pingu.as_flyable().is_none());
    assert!(!pingu.can_fly());
    assert!(olga.as_flyable().is_none());
    assert!(!olga.can_fly());
}

#[test]
fn test_swallow_override_beats_structural_default() {
    let flags: Vec<bool> = Swallow::ALL.iter().map(|s| s.can_fly()).collect();
    assert_eq!(flags, vec![true, true, false]);

    // The structural default would say every swallow flies.
    assert!(Swallow::ALL.iter().all(|s| s.as_flyable().is_some()));
}

#[test]
fn test_description_matches_can_fly_for_every_bird() {
    for bird in all_birds() {
        let expected = if bird.can_fly() { "can fly" } else { "cannot fly" };
        assert_eq!(bird.description(), expected, "bird {}", bird.name());
    }
}

// ============================================================================
// Uniform Operations
// ============================================================================

#[test]
fn test_top_speed_of_nothing_is_zero() {
    let nobody: Vec<Box<dyn Racer>> = Vec::new();
    assert_eq!(top_speed(&nobody), 0.0);
    assert_eq!(nobody.top_speed(), 0.0);
}

#[test]
fn test_top_speed_over_mixed_field() {
    let racers: Vec<Box<dyn Racer>> = vec![
        Box::new(Motorcycle::new("Giacomo", 200.0)),
        Box::new(FlappyBird::new("Felipe", 2.0, 10.0)),
        Box::new(Penguin::new("Pingu")),
        Box::new(Swallow::African),
        Box::new(Swallow::European),
        Box::new(Swallow::Unknown),
    ];

    let speeds: Vec<f64> = racers.iter().map(|r| r.speed()).collect();
    assert_eq!(speeds, vec![200.0, 60.0, 42.0, 10.0, 9.9, 0.0]);

    assert_eq!(top_speed(&racers), 200.0);
    assert_eq!(racers.top_speed(), 200.0);
    assert_eq!(racers.fastest(), Some(0));
}

#[test]
fn test_top_speed_over_sub_range() {
    let racers: Vec<Box<dyn Racer>> = vec![
        Box::new(Motorcycle::new("Giacomo", 200.0)),
        Box::new(FlappyBird::new("Felipe", 2.0, 10.0)),
        Box::new(Swallow::African),
        Box::new(Swallow::European),
        Box::new(Penguin::new("Pingu")),
        Box::new(Swallow::Unknown),
    ];

    assert_eq!(racers[2..5].top_speed(), 42.0);
    assert_eq!(top_speed(&racers[2..5]), 42.0);
}

#[test]
fn test_standings_rank_mixed_field() {
    let bike = Rc::new(Motorcycle::new("Giacomo", 200.0));
    let racers: Vec<Box<dyn Racer>> = vec![
        Box::new(Penguin::new("Pingu")),
        Box::new(Rc::clone(&bike)),
        Box::new(Swallow::Unknown),
        Box::new(FlappyBird::new("Felipe", 2.0, 10.0)),
    ];

    let order: Vec<usize> = racers.standings().iter().map(|s| s.index).collect();
    assert_eq!(order, vec![1, 3, 0, 2]);
}

// ============================================================================
// Boosting
// ============================================================================

#[test]
fn test_boost_accumulates() {
    let mut toy = ToyBird::new(5.0);
    assert_eq!(toy.maximum_speed(), 5000.0);

    toy.boost(3.0);
    assert_eq!(toy.maximum_speed(), 5015.0);

    toy.boost(3.0);
    assert_eq!(toy.maximum_speed(), 5030.0);
    assert_eq!(toy.speed(), 5030.0);
}

#[test]
fn test_boosted_toy_wins_race() {
    let mut toy = ToyBird::new(0.1);
    toy.boost(2000.0);

    let field: [&dyn Racer; 2] = [&Motorcycle::new("Giacomo", 200.0), &toy];
    assert_eq!(field.fastest(), Some(1));
    assert!((field.top_speed() - 300.0).abs() < 1e-9);
}

// ============================================================================
// Fatal Case
// ============================================================================

#[test]
#[should_panic]
fn test_unknown_swallow_airspeed_faults() {
    let swallow = Swallow::Unknown;
    let flyable: &dyn Flyable = &swallow;
    flyable.maximum_speed();
}
