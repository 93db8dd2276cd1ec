//! # Lineups
//!
//! A declarative description of who is racing, read from JSON text.
//!
//! ```json
//! {
//!   "entrants": [
//!     { "kind": "motorcycle", "name": "Giacomo", "speed": 200.0 },
//!     { "kind": "flappy_bird", "name": "Felipe", "amplitude": 2.0, "frequency": 10.0 },
//!     { "kind": "swallow", "variant": "unknown" },
//!     { "kind": "toy_bird", "version": 5.0 }
//!   ]
//! }
//! ```
//!
//! A lineup turns into trait objects: [`Lineup::racers`] for a race,
//! [`Lineup::birds`] for the bird entrants only.

use serde::{Deserialize, Serialize};

use crate::birds::{FlappyBird, Hummingbird, Ostrich, Penguin, Swallow, ToyBird};
use crate::capability::{Bird, Racer};
use crate::error::LineupError;
use crate::vehicle::Motorcycle;

/// One entrant in a lineup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Entrant {
    Penguin(Penguin),
    Ostrich(Ostrich),
    FlappyBird(FlappyBird),
    Hummingbird(Hummingbird),
    Swallow { variant: Swallow },
    ToyBird { version: f64 },
    Motorcycle { name: String, speed: f64 },
}

impl Entrant {
    /// Name used in error messages and console output.
    pub fn label(&self) -> String {
        match self {
            Entrant::Penguin(p) => p.name(),
            Entrant::Ostrich(o) => o.name(),
            Entrant::FlappyBird(f) => f.name(),
            Entrant::Hummingbird(h) => h.name(),
            Entrant::Swallow { variant } => variant.name(),
            Entrant::ToyBird { version } => ToyBird::new(*version).name(),
            Entrant::Motorcycle { name, .. } => name.clone(),
        }
    }

    /// Check that every measure is finite and non-negative.
    pub fn validate(&self) -> Result<(), LineupError> {
        let measures: Vec<(&'static str, f64)> = match self {
            Entrant::Penguin(_) | Entrant::Swallow { .. } => vec![],
            Entrant::Ostrich(o) => vec![
                ("stride_length", o.stride_length),
                ("stride_rate", o.stride_rate),
            ],
            Entrant::FlappyBird(f) => vec![("amplitude", f.amplitude), ("frequency", f.frequency)],
            Entrant::Hummingbird(h) => vec![("amplitude", h.amplitude), ("frequency", h.frequency)],
            Entrant::ToyBird { version } => vec![("version", *version)],
            Entrant::Motorcycle { speed, .. } => vec![("speed", *speed)],
        };

        for (field, value) in measures {
            if !value.is_finite() || value < 0.0 {
                return Err(LineupError::InvalidMeasure {
                    entrant: self.label(),
                    field,
                    value,
                });
            }
        }
        Ok(())
    }

    /// Build the entity as a racer.
    pub fn to_racer(&self) -> Box<dyn Racer> {
        match self.clone() {
            Entrant::Penguin(p) => Box::new(p),
            Entrant::Ostrich(o) => Box::new(o),
            Entrant::FlappyBird(f) => Box::new(f),
            Entrant::Hummingbird(h) => Box::new(h),
            Entrant::Swallow { variant } => Box::new(variant),
            Entrant::ToyBird { version } => Box::new(ToyBird::new(version)),
            Entrant::Motorcycle { name, speed } => Box::new(Motorcycle::new(name, speed)),
        }
    }

    /// Build the entity as a bird, or `None` for non-birds.
    pub fn to_bird(&self) -> Option<Box<dyn Bird>> {
        let bird: Box<dyn Bird> = match self.clone() {
            Entrant::Penguin(p) => Box::new(p),
            Entrant::Ostrich(o) => Box::new(o),
            Entrant::FlappyBird(f) => Box::new(f),
            Entrant::Hummingbird(h) => Box::new(h),
            Entrant::Swallow { variant } => Box::new(variant),
            Entrant::ToyBird { version } => Box::new(ToyBird::new(version)),
            Entrant::Motorcycle { .. } => return None,
        };
        Some(bird)
    }
}

/// An ordered list of entrants.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Lineup {
    pub entrants: Vec<Entrant>,
}

impl Lineup {
    pub fn new(entrants: Vec<Entrant>) -> Self {
        Self { entrants }
    }

    /// Parse and validate a lineup from JSON text.
    pub fn from_json(text: &str) -> Result<Self, LineupError> {
        let lineup: Lineup = serde_json::from_str(text)?;
        for entrant in &lineup.entrants {
            entrant.validate()?;
        }
        tracing::debug!(entrants = lineup.entrants.len(), "parsed lineup");
        Ok(lineup)
    }

    /// Serialize back to pretty JSON.
    pub fn to_json(&self) -> Result<String, LineupError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Every entrant as a racer, in lineup order.
    pub fn racers(&self) -> Vec<Box<dyn Racer>> {
        self.entrants.iter().map(Entrant::to_racer).collect()
    }

    /// The bird entrants, in lineup order.
    pub fn birds(&self) -> Vec<Box<dyn Bird>> {
        self.entrants.iter().filter_map(Entrant::to_bird).collect()
    }

    pub fn len(&self) -> usize {
        self.entrants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entrants.is_empty()
    }
}
