//! # Compositional Traits - Protocol-Oriented Capabilities (Session 22)
//!
//! This crate shows how unrelated types acquire shared behavior through
//! traits, and are then operated on uniformly through those traits:
//!
//! - **Capabilities**: `Flyable`, `Bird`, `Describable`, `Racer`, `Boostable`
//! - **Defaults**: behavior supplied once, applied to every type with the
//!   right capability set (`can_fly`, `description`)
//! - **Entities**: birds and a motorcycle, each choosing its capabilities
//! - **Retroactive conformance**: `Racer` attached after the fact, in its
//!   own module, without touching any entity definition
//! - **Uniform operations**: `top_speed`, `fastest`, `standings` over any
//!   collection of racers, including sub-slices
//!
//! ## Example
//!
//! ```rust
//! use compositional_traits::{top_speed, Bird, Describable, FlappyBird, Motorcycle, Penguin, Racer};
//!
//! let flappy = FlappyBird::new("Felipe", 2.0, 10.0);
//! let pingu = Penguin::new("Pingu");
//! assert!(flappy.can_fly());
//! assert_eq!(pingu.description(), "cannot fly");
//!
//! let field: Vec<Box<dyn Racer>> = vec![
//!     Box::new(flappy),
//!     Box::new(pingu),
//!     Box::new(Motorcycle::new("Giacomo", 200.0)),
//! ];
//! assert_eq!(top_speed(&field), 200.0);
//! ```
//!
//! ## Design Philosophy
//!
//! Behavior is composed from capabilities, not inherited from a base type.
//! A `Penguin` and a `Motorcycle` share nothing but `Racer`, and that is
//! all a race needs to know about them.

pub mod birds;
pub mod capability;
pub mod defaults;
pub mod error;
pub mod lineup;
pub mod race;
pub mod racing;
pub mod vehicle;

pub use birds::{FlappyBird, Hummingbird, Ostrich, Penguin, Swallow, ToyBird, BASELINE_SPEED_FACTOR};
pub use capability::{Bird, Boostable, Describable, Flyable, Racer};
pub use defaults::flight_description;
pub use error::LineupError;
pub use lineup::{Entrant, Lineup};
pub use race::{top_speed, RaceExt, Standing};
pub use vehicle::Motorcycle;
