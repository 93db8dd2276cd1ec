//! # Birds
//!
//! Concrete entities, each choosing which capabilities it declares:
//!
//! | Type          | Flyable | `can_fly`                     |
//! |---------------|---------|-------------------------------|
//! | [`Penguin`]     | no      | default (false)               |
//! | [`FlappyBird`]  | yes     | default (true)                |
//! | [`Hummingbird`] | yes     | default (true)                |
//! | [`Ostrich`]     | no      | default (false)               |
//! | [`Swallow`]     | yes     | overridden per variant        |
//! | [`ToyBird`]     | yes     | declared `true` by the author |
//!
//! None of these types knows about racing. `Racer` is attached later, in
//! [`crate::racing`].

use serde::{Deserialize, Serialize};

use crate::capability::{Bird, Boostable, Flyable};

// ============================================================================
// Non-Flying Birds
// ============================================================================

/// A plain bird that does not fly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Penguin {
    pub name: String,
}

impl Penguin {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Bird for Penguin {
    fn name(&self) -> String {
        self.name.clone()
    }
}

/// A large flightless bird that runs instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ostrich {
    pub name: String,
    /// Metres per stride.
    pub stride_length: f64,
    /// Strides per second.
    pub stride_rate: f64,
}

impl Ostrich {
    pub fn new(name: impl Into<String>, stride_length: f64, stride_rate: f64) -> Self {
        Self {
            name: name.into(),
            stride_length,
            stride_rate,
        }
    }

    /// Running speed on the ground.
    pub fn running_speed(&self) -> f64 {
        self.stride_length * self.stride_rate
    }
}

impl Bird for Ostrich {
    fn name(&self) -> String {
        self.name.clone()
    }
}

// ============================================================================
// Flapping Birds
// ============================================================================

/// A bird whose airspeed comes from how hard and how often it flaps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlappyBird {
    pub name: String,
    pub amplitude: f64,
    pub frequency: f64,
}

impl FlappyBird {
    pub fn new(name: impl Into<String>, amplitude: f64, frequency: f64) -> Self {
        Self {
            name: name.into(),
            amplitude,
            frequency,
        }
    }
}

impl Flyable for FlappyBird {
    fn maximum_speed(&self) -> f64 {
        3.0 * self.amplitude * self.frequency
    }
}

impl Bird for FlappyBird {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn as_flyable(&self) -> Option<&dyn Flyable> {
        Some(self)
    }
}

/// Same shape as [`FlappyBird`], but an independent type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hummingbird {
    pub name: String,
    pub amplitude: f64,
    pub frequency: f64,
}

impl Hummingbird {
    pub fn new(name: impl Into<String>, amplitude: f64, frequency: f64) -> Self {
        Self {
            name: name.into(),
            amplitude,
            frequency,
        }
    }
}

impl Flyable for Hummingbird {
    fn maximum_speed(&self) -> f64 {
        3.0 * self.amplitude * self.frequency
    }
}

impl Bird for Hummingbird {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn as_flyable(&self) -> Option<&dyn Flyable> {
        Some(self)
    }
}

// ============================================================================
// Swallows
// ============================================================================

/// A migratory bird with a closed set of kinds.
///
/// Every variant is syntactically [`Flyable`], but only the known ones
/// actually fly: `can_fly` overrides the structural default.
///
/// # Panics
///
/// [`Flyable::maximum_speed`] panics for [`Swallow::Unknown`]. Nobody knows
/// the airspeed of an unknown swallow, and asking is a logic error. Check
/// [`Bird::can_fly`] first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Swallow {
    African,
    European,
    Unknown,
}

impl Swallow {
    /// All variants, in declaration order.
    pub const ALL: [Swallow; 3] = [Swallow::African, Swallow::European, Swallow::Unknown];
}

impl Flyable for Swallow {
    fn maximum_speed(&self) -> f64 {
        match self {
            Swallow::African => 10.0,
            Swallow::European => 9.9,
            Swallow::Unknown => panic!("airspeed of an unknown swallow is undefined"),
        }
    }
}

impl Bird for Swallow {
    fn name(&self) -> String {
        match self {
            Swallow::African => "African Swallow",
            Swallow::European => "European Swallow",
            Swallow::Unknown => "Unknown Swallow",
        }
        .to_string()
    }

    fn as_flyable(&self) -> Option<&dyn Flyable> {
        Some(self)
    }

    fn can_fly(&self) -> bool {
        !matches!(self, Swallow::Unknown)
    }
}

// ============================================================================
// Toy Birds
// ============================================================================

/// Starting value of a [`ToyBird`]'s internal speed factor.
pub const BASELINE_SPEED_FACTOR: f64 = 1000.0;

/// A versioned toy bird that can be boosted.
///
/// `maximum_speed = version × speed_factor`. The factor starts at
/// [`BASELINE_SPEED_FACTOR`] and only changes through [`Boostable::boost`].
///
/// Deliberately not `Clone`: a boost must land on the one owned instance.
///
/// ```
/// use compositional_traits::{Boostable, Flyable, ToyBird};
///
/// let mut toy = ToyBird::new(5.0);
/// assert_eq!(toy.maximum_speed(), 5000.0);
/// toy.boost(3.0);
/// assert_eq!(toy.maximum_speed(), 5015.0);
/// ```
#[derive(Debug, PartialEq)]
pub struct ToyBird {
    pub version: f64,
    speed_factor: f64,
}

impl ToyBird {
    pub fn new(version: f64) -> Self {
        Self {
            version,
            speed_factor: BASELINE_SPEED_FACTOR,
        }
    }
}

impl Flyable for ToyBird {
    fn maximum_speed(&self) -> f64 {
        self.version * self.speed_factor
    }
}

impl Bird for ToyBird {
    fn name(&self) -> String {
        format!("Toy {}", self.version)
    }

    fn as_flyable(&self) -> Option<&dyn Flyable> {
        Some(self)
    }

    fn can_fly(&self) -> bool {
        true
    }
}

impl Boostable for ToyBird {
    fn boost(&mut self, power: f64) {
        self.speed_factor += power;
        tracing::debug!(
            version = self.version,
            power,
            speed_factor = self.speed_factor,
            "toy bird boosted"
        );
    }
}
