//! # Capability Interfaces
//!
//! Each trait is a contract with named properties and no state of its own.
//! Concrete types opt into any subset of them.
//!
//! ## The Capabilities
//!
//! - [`Flyable`]: has a maximum airspeed
//! - [`Bird`]: has a name and may or may not fly
//! - [`Describable`]: can describe itself (every [`Bird`] gets this for free)
//! - [`Racer`]: has a speed, whether or not it is a bird
//! - [`Boostable`]: can mutate itself to go faster
//!
//! All traits are object safe, so heterogeneous collections can hold
//! `Box<dyn Racer>` or `&dyn Bird`.

use std::rc::Rc;

/// Something that flies, characterized by its top airspeed.
pub trait Flyable {
    /// Maximum airspeed. Non-negative for every well-formed entity.
    fn maximum_speed(&self) -> f64;
}

/// A bird: a name, and whether it can fly.
///
/// `can_fly` has a default derived from the declared capability set:
/// a bird that declares itself [`Flyable`] through [`Bird::as_flyable`]
/// can fly. Implementors may override `can_fly` and diverge from that
/// structural default.
///
/// Every `Bird` is also [`Describable`] through the blanket impl in
/// [`crate::defaults`].
///
/// # Example
///
/// ```
/// use compositional_traits::{Bird, Describable, Flyable};
///
/// struct Kestrel;
///
/// impl Flyable for Kestrel {
///     fn maximum_speed(&self) -> f64 { 64.0 }
/// }
///
/// impl Bird for Kestrel {
///     fn name(&self) -> String { "Kestrel".to_string() }
///     fn as_flyable(&self) -> Option<&dyn Flyable> { Some(self) }
/// }
///
/// assert!(Kestrel.can_fly());
/// assert_eq!(Kestrel.description(), "can fly");
/// ```
pub trait Bird {
    /// Display name.
    fn name(&self) -> String;

    /// The flight capability this bird declares, if any.
    ///
    /// Flyable birds return `Some(self)`.
    fn as_flyable(&self) -> Option<&dyn Flyable> {
        None
    }

    /// Whether this bird can fly. Defaults to "declares [`Flyable`]".
    fn can_fly(&self) -> bool {
        self.as_flyable().is_some()
    }
}

/// Something with a short human-readable description.
pub trait Describable {
    fn description(&self) -> String;
}

/// Anything that can take part in a race.
pub trait Racer {
    /// How fast this racer goes.
    fn speed(&self) -> f64;
}

/// A capability to cheat: `boost` mutates the implementor in place so that
/// subsequent speed reads go up.
pub trait Boostable {
    fn boost(&mut self, power: f64);
}

// ============================================================================
// Forwarding Impls
// ============================================================================

impl<R: Racer + ?Sized> Racer for &R {
    fn speed(&self) -> f64 {
        (**self).speed()
    }
}

impl<R: Racer + ?Sized> Racer for &mut R {
    fn speed(&self) -> f64 {
        (**self).speed()
    }
}

impl<R: Racer + ?Sized> Racer for Box<R> {
    fn speed(&self) -> f64 {
        (**self).speed()
    }
}

impl<R: Racer + ?Sized> Racer for Rc<R> {
    fn speed(&self) -> f64 {
        (**self).speed()
    }
}
