//! # Default Behavior
//!
//! Behavior supplied once and picked up by every type with the matching
//! capability set:
//!
//! - **D1** `can_fly`: lives on [`Bird`] as a default method, derived from
//!   [`Bird::as_flyable`]. Overridable per type.
//! - **D2** `description`: every [`Bird`] is [`Describable`] through the
//!   blanket impl below, reading whatever `can_fly` resolves to for that
//!   type, overridden or not.
//!
//! Both are resolved per call: a type that starts declaring [`crate::Flyable`],
//! or overrides `can_fly`, changes its own description and nobody else's.

use crate::capability::{Bird, Describable};

/// The description of a bird given whether it can fly.
pub fn flight_description(can_fly: bool) -> &'static str {
    if can_fly {
        "can fly"
    } else {
        "cannot fly"
    }
}

impl<B: Bird + ?Sized> Describable for B {
    fn description(&self) -> String {
        flight_description(self.can_fly()).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::Flyable;

    struct Grounded;

    impl Bird for Grounded {
        fn name(&self) -> String {
            "Grounded".to_string()
        }
    }

    // Declares flight but overrides the default away.
    struct Moulting;

    impl Flyable for Moulting {
        fn maximum_speed(&self) -> f64 {
            12.0
        }
    }

    impl Bird for Moulting {
        fn name(&self) -> String {
            "Moulting".to_string()
        }

        fn as_flyable(&self) -> Option<&dyn Flyable> {
            Some(self)
        }

        fn can_fly(&self) -> bool {
            false
        }
    }

    #[test]
    fn test_flight_description() {
        assert_eq!(flight_description(true), "can fly");
        assert_eq!(flight_description(false), "cannot fly");
    }

    #[test]
    fn test_description_follows_default_can_fly() {
        assert_eq!(Grounded.description(), "cannot fly");
    }

    #[test]
    fn test_description_follows_override() {
        assert!(Moulting.as_flyable().is_some());
        assert_eq!(Moulting.description(), "cannot fly");
    }

    #[test]
    fn test_description_on_trait_object() {
        let bird: &dyn Bird = &Grounded;
        assert_eq!(bird.description(), "cannot fly");
    }
}
