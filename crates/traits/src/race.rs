//! # Uniform Operations
//!
//! Operations over any collection of [`Racer`]s. They never name a
//! concrete entity: a motorcycle, a penguin and a toy bird are all just
//! things with a `speed`.
//!
//! - [`top_speed()`]: free function over anything iterable
//! - [`RaceExt`]: the same as methods on slices, so sub-ranges work with
//!   plain slicing: `field[3..6].top_speed()`
//!
//! Only speeds are observable. When several racers tie for first, which
//! one counts as "the" fastest is unspecified.

use std::cmp::Ordering;

use crate::capability::Racer;

/// The highest speed among `racers`, or `0.0` if there are none.
///
/// Works with owned racers, references, and boxed trait objects:
///
/// ```
/// use compositional_traits::{top_speed, Penguin, Racer, Swallow};
///
/// let field: Vec<Box<dyn Racer>> = vec![Box::new(Penguin::new("Pingu")), Box::new(Swallow::African)];
/// assert_eq!(top_speed(&field), 42.0);
/// assert_eq!(top_speed(Vec::<Penguin>::new()), 0.0);
/// ```
pub fn top_speed<I>(racers: I) -> f64
where
    I: IntoIterator,
    I::Item: Racer,
{
    let mut count = 0usize;
    let top = racers
        .into_iter()
        .map(|r| {
            count += 1;
            r.speed()
        })
        .reduce(f64::max)
        .unwrap_or(0.0);
    tracing::trace!(count, top, "computed top speed");
    top
}

/// A racer's place in a race.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Standing {
    /// 1-based finishing position.
    pub position: usize,
    /// Index of the racer in the input slice.
    pub index: usize,
    pub speed: f64,
}

/// Race operations on any slice of racers.
pub trait RaceExt {
    /// The highest speed, or `0.0` for an empty slice.
    fn top_speed(&self) -> f64;

    /// Index of a fastest racer, `None` for an empty slice.
    fn fastest(&self) -> Option<usize>;

    /// All racers ordered fastest first. Ties keep their input order.
    fn standings(&self) -> Vec<Standing>;
}

impl<R: Racer> RaceExt for [R] {
    fn top_speed(&self) -> f64 {
        top_speed(self)
    }

    fn fastest(&self) -> Option<usize> {
        self.iter()
            .enumerate()
            .max_by(|(_, a), (_, b)| a.speed().total_cmp(&b.speed()))
            .map(|(index, _)| index)
    }

    fn standings(&self) -> Vec<Standing> {
        let mut by_speed: Vec<(usize, f64)> = self
            .iter()
            .enumerate()
            .map(|(index, r)| (index, r.speed()))
            .collect();
        by_speed.sort_by(|(_, a), (_, b)| descending(*a, *b));

        by_speed
            .into_iter()
            .enumerate()
            .map(|(rank, (index, speed))| Standing {
                position: rank + 1,
                index,
                speed,
            })
            .collect()
    }
}

fn descending(a: f64, b: f64) -> Ordering {
    b.total_cmp(&a)
}
