//! Session 22: Protocol-Oriented Capabilities
//!
//! Run with: cargo run --example session22_protocols
//! More detail: RUST_LOG=debug cargo run --example session22_protocols
//!
//! This example demonstrates:
//! - Default behavior supplied once through traits
//! - Overriding a default for one type only
//! - Retroactive conformance: racing birds and motorcycles together
//! - Uniform operations over heterogeneous collections and sub-slices
//! - Mutating capabilities (boosting)

use compositional_traits::{
    top_speed, Bird, Boostable, Describable, FlappyBird, Flyable, Lineup, LineupError, Motorcycle,
    Ostrich, Penguin, RaceExt, Racer, Swallow, ToyBird,
};
use tracing_subscriber::EnvFilter;

const LINEUP: &str = r#"{
    "entrants": [
        { "kind": "motorcycle", "name": "Giacomo", "speed": 200.0 },
        { "kind": "hummingbird", "name": "Hum", "amplitude": 1.0, "frequency": 10.0 },
        { "kind": "ostrich", "name": "Olga", "stride_length": 5.0, "stride_rate": 3.0 },
        { "kind": "swallow", "variant": "european" },
        { "kind": "toy_bird", "version": 2.0 }
    ]
}"#;

fn main() -> Result<(), LineupError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    println!("=== Session 22: Protocol-Oriented Capabilities ===\n");

    // -------------------------------------------------------------------------
    // Default Behavior
    // -------------------------------------------------------------------------
    println!("1. Default Behavior");
    println!("-------------------");

    let birds: Vec<Box<dyn Bird>> = vec![
        Box::new(Penguin::new("Pingu")),
        Box::new(FlappyBird::new("Felipe", 2.0, 10.0)),
        Box::new(Ostrich::new("Olga", 5.0, 3.0)),
        Box::new(ToyBird::new(5.0)),
    ];
    for bird in &birds {
        let airspeed = bird
            .as_flyable()
            .map(|f| format!("{:.1}", f.maximum_speed()))
            .unwrap_or_else(|| "-".to_string());
        println!("{:<10} {:<11} airspeed {}", bird.name(), bird.description(), airspeed);
    }
    println!();

    // -------------------------------------------------------------------------
    // Overriding a Default
    // -------------------------------------------------------------------------
    println!("2. Overriding a Default");
    println!("-----------------------");

    // Every swallow is Flyable, but the unknown one overrides can_fly.
    for swallow in Swallow::ALL {
        println!(
            "{:<17} declares Flyable? {}  {}",
            swallow.name(),
            swallow.as_flyable().is_some(),
            swallow.description()
        );
    }
    println!();

    // -------------------------------------------------------------------------
    // Racing
    // -------------------------------------------------------------------------
    println!("3. Racing");
    println!("---------");

    let racers: Vec<Box<dyn Racer>> = vec![
        Box::new(Motorcycle::new("Giacomo", 200.0)),
        Box::new(FlappyBird::new("Felipe", 2.0, 10.0)),
        Box::new(Penguin::new("Pingu")),
        Box::new(Swallow::African),
        Box::new(Swallow::European),
        Box::new(Swallow::Unknown),
    ];

    let speeds: Vec<f64> = racers.iter().map(|r| r.speed()).collect();
    println!("Speeds:              {:?}", speeds);
    println!("Top speed:           {}", top_speed(&racers));
    println!("Top speed [2..5]:    {}", racers[2..5].top_speed());
    println!("Top speed (nobody):  {}", top_speed(Vec::<Penguin>::new()));
    println!();

    // -------------------------------------------------------------------------
    // Boosting
    // -------------------------------------------------------------------------
    println!("4. Boosting");
    println!("-----------");

    let mut toy = ToyBird::new(5.0);
    println!("{} starts at {}", toy.name(), toy.maximum_speed());
    toy.boost(3.0);
    println!("after boost(3.0):   {}", toy.maximum_speed());
    toy.boost(3.0);
    println!("after boost(3.0):   {}", toy.maximum_speed());
    println!();

    // -------------------------------------------------------------------------
    // Lineups
    // -------------------------------------------------------------------------
    println!("5. Lineups");
    println!("----------");

    let lineup = Lineup::from_json(LINEUP)?;
    let field = lineup.racers();
    for standing in field.standings() {
        println!(
            "#{} {:<17} {:>8.1}",
            standing.position,
            lineup.entrants[standing.index].label(),
            standing.speed
        );
    }

    println!("\n=== Session 22 Complete ===");
    Ok(())
}
