//! # Retroactive Racing
//!
//! `Racer` is attached here, after the fact, to types defined elsewhere.
//! None of the entity modules mention racing; each type gets exactly one
//! impl block below.
//!
//! | Type            | `speed`                                  |
//! |-----------------|------------------------------------------|
//! | [`Motorcycle`]  | its stored speed                         |
//! | [`FlappyBird`]  | `maximum_speed`                          |
//! | [`Hummingbird`] | `maximum_speed`                          |
//! | [`Penguin`]     | [`PENGUIN_SPEED`]                        |
//! | [`Ostrich`]     | running speed                            |
//! | [`Swallow`]     | `maximum_speed` if it can fly, else 0.0  |
//! | [`ToyBird`]     | `maximum_speed`, boosts included         |

use crate::birds::{FlappyBird, Hummingbird, Ostrich, Penguin, Swallow, ToyBird};
use crate::capability::{Bird, Flyable, Racer};
use crate::vehicle::Motorcycle;

/// Racing speed of a penguin. Penguins do not fly; they get 42 anyway.
pub const PENGUIN_SPEED: f64 = 42.0;

impl Racer for Motorcycle {
    fn speed(&self) -> f64 {
        self.speed
    }
}

impl Racer for FlappyBird {
    fn speed(&self) -> f64 {
        self.maximum_speed()
    }
}

impl Racer for Hummingbird {
    fn speed(&self) -> f64 {
        self.maximum_speed()
    }
}

impl Racer for Penguin {
    fn speed(&self) -> f64 {
        PENGUIN_SPEED
    }
}

impl Racer for Ostrich {
    fn speed(&self) -> f64 {
        self.running_speed()
    }
}

impl Racer for Swallow {
    fn speed(&self) -> f64 {
        // Guard first: the unknown swallow has no airspeed to read.
        if self.can_fly() {
            self.maximum_speed()
        } else {
            0.0
        }
    }
}

impl Racer for ToyBird {
    fn speed(&self) -> f64 {
        self.maximum_speed()
    }
}
