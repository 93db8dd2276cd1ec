//! A racing vehicle: shares no capability with birds except, later, `Racer`.
//!
//! A motorcycle is an identity, not a value: share one with `Rc` rather
//! than cloning it, so every holder sees the same machine.

use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct Motorcycle {
    pub name: String,
    pub speed: f64,
}

impl Motorcycle {
    pub fn new(name: impl Into<String>, speed: f64) -> Self {
        Self {
            name: name.into(),
            speed,
        }
    }
}
