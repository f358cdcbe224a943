use std::{fmt::Display, iter::FromIterator, ops::Deref};
use rand::Rng;
use crate::DieSize;


/// Rolls a single die with `sides` faces using the thread-local random source.
///
/// The result is uniformly distributed over `1..=sides`. Any positive side
/// count is accepted, not just the sizes enumerated by [`DieSize`].
///
/// # Panics
/// Panics if `sides` is 0; a zero-sided die has no faces to land on.
///
/// # Examples
/// ```
/// use dice_tray::roll_sides;
///
/// let face = roll_sides(6);
/// assert!((1..=6).contains(&face));
/// ```
pub fn roll_sides(sides: u16) -> u16 {
    roll_sides_with(&mut rand::rng(), sides)
}

/// Rolls a single die with `sides` faces using the provided random source.
///
/// # Panics
/// Panics if `sides` is 0.
///
/// # Examples
/// ```
/// use dice_tray::roll_sides_with;
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let mut rng = StdRng::seed_from_u64(1);
/// let face = roll_sides_with(&mut rng, 13);
/// assert!((1..=13).contains(&face));
/// ```
pub fn roll_sides_with<R: Rng + ?Sized>(rng: &mut R, sides: u16) -> u16 {
    rng.random_range(1..=sides)
}


/// A pool of identical dice: which die to roll and how many of it.
///
/// This is the roll-many form of the engine. A pool always holds at least
/// one die; asking for zero dice quietly becomes one, the same
/// default-to-one rule the session applies to unparseable count text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DicePool {
    die: DieSize,
    count: u16,
}

impl DicePool {
    /// Creates a pool of `count` dice of the given size.
    ///
    /// A `count` of 0 is clamped to 1.
    ///
    /// # Examples
    /// ```
    /// use dice_tray::{DicePool, DieSize};
    ///
    /// let pool = DicePool::new(DieSize::D6, 3);
    /// assert_eq!(format!("{pool}"), "3d6");
    ///
    /// let clamped = DicePool::new(DieSize::D20, 0);
    /// assert_eq!(clamped.count(), 1);
    /// ```
    pub fn new(die: DieSize, count: u16) -> Self {
        Self {
            die,
            count: count.max(1),
        }
    }

    /// The die this pool rolls.
    pub const fn die(&self) -> DieSize {
        self.die
    }

    /// The number of dice in this pool, always at least 1.
    pub const fn count(&self) -> u16 {
        self.count
    }

    /// Rolls every die in the pool using the thread-local random source.
    ///
    /// Each die is an independent draw; the outcome keeps them in roll
    /// order.
    ///
    /// # Examples
    /// ```
    /// use dice_tray::{DicePool, DieSize};
    ///
    /// let outcome = DicePool::new(DieSize::D6, 3).roll();
    /// assert_eq!(outcome.len(), 3);
    /// assert_eq!(outcome.total(), outcome.iter().map(|&f| u32::from(f)).sum());
    /// ```
    pub fn roll(&self) -> RollOutcome {
        self.roll_with(&mut rand::rng())
    }

    /// Rolls every die in the pool using the provided random source.
    ///
    /// # Examples
    /// ```
    /// use dice_tray::{DicePool, DieSize};
    /// use rand::{rngs::StdRng, SeedableRng};
    ///
    /// let mut rng = StdRng::seed_from_u64(42);
    /// let outcome = DicePool::new(DieSize::D10, 5).roll_with(&mut rng);
    /// assert!(outcome.iter().all(|&face| (1..=10).contains(&face)));
    /// ```
    pub fn roll_with<R: Rng + ?Sized>(&self, rng: &mut R) -> RollOutcome {
        (0..self.count)
            .map(|_| self.die.roll_with(rng))
            .collect()
    }

    /// The minimum possible total for this pool: every die shows a 1.
    ///
    /// # Examples
    /// ```
    /// use dice_tray::{DicePool, DieSize};
    ///
    /// assert_eq!(DicePool::new(DieSize::D20, 3).min(), 3);
    /// ```
    pub const fn min(&self) -> u32 {
        self.count as u32
    }

    /// The maximum possible total: every die shows its highest face.
    ///
    /// # Examples
    /// ```
    /// use dice_tray::{DicePool, DieSize};
    ///
    /// assert_eq!(DicePool::new(DieSize::D20, 3).max(), 60);
    /// ```
    pub const fn max(&self) -> u32 {
        self.count as u32 * self.die.sides() as u32
    }

    /// The average total for this pool.
    ///
    /// # Examples
    /// ```
    /// use dice_tray::{DicePool, DieSize};
    ///
    /// // 1d6: (1 + 6) / 2 = 3.5
    /// assert_eq!(DicePool::new(DieSize::D6, 1).avg(), 3.5);
    /// ```
    pub const fn avg(&self) -> f32 {
        (self.min() as f32 + self.max() as f32) / 2.0
    }

    /// Returns `(self.min(), self.max())`.
    ///
    /// # Examples
    /// ```
    /// use dice_tray::{DicePool, DieSize};
    ///
    /// assert_eq!(DicePool::new(DieSize::D10, 2).possible_values(), (2, 20));
    /// ```
    pub const fn possible_values(&self) -> (u32, u32) {
        (self.min(), self.max())
    }
}

impl Display for DicePool {
    /// Formats the pool as standard dice notation.
    ///
    /// # Examples
    /// ```
    /// use dice_tray::{DicePool, DieSize};
    ///
    /// assert_eq!(DicePool::new(DieSize::D100, 1).to_string(), "1d100");
    /// ```
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.count, self.die)
    }
}


/// The faces produced by one roll action, in roll order.
///
/// Dereferences to the underlying `Vec<u16>` for direct slice access. An
/// outcome produced by [`DicePool::roll`] is never empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RollOutcome(Vec<u16>);

impl RollOutcome {
    /// Creates an outcome from already-rolled faces.
    pub fn new(faces: Vec<u16>) -> Self {
        Self(faces)
    }

    /// The sum of every face in the outcome.
    ///
    /// # Examples
    /// ```
    /// use dice_tray::RollOutcome;
    ///
    /// let outcome = RollOutcome::new(vec![5, 1, 3]);
    /// assert_eq!(outcome.total(), 9);
    /// ```
    pub fn total(&self) -> u32 {
        self.iter().map(|&face| u32::from(face)).sum()
    }
}

impl FromIterator<u16> for RollOutcome {
    fn from_iter<T: IntoIterator<Item = u16>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Deref for RollOutcome {
    type Target = Vec<u16>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}


/// A macro for conveniently creating [`DicePool`] instances.
///
/// # Syntax
/// - `pool!(DIE)`: a single die of the given size (e.g. `pool!(D6)` for 1d6).
/// - `pool!(DIE, COUNT)`: `COUNT` dice of the given size
///   (e.g. `pool!(D10, 3)` for 3d10).
///
/// # Examples
/// ```
/// use dice_tray::pool;
///
/// let single = pool!(D20);
/// assert_eq!(single.to_string(), "1d20");
///
/// let triple = pool!(D10, 3);
/// assert_eq!(triple.to_string(), "3d10");
/// ```
#[macro_export]
macro_rules! pool {
    ($die:ident) => {
        $crate::DicePool::new($crate::DieSize::$die, 1)
    };

    ($die:ident, $count:expr) => {
        $crate::DicePool::new($crate::DieSize::$die, $count)
    };
}


#[cfg(test)]
mod test {
    use std::collections::HashSet;
    use proptest::prelude::*;
    use rand::{rngs::StdRng, SeedableRng};
    use super::*;
    use crate::roll_test_strategies::{die_size_strategy, pool_strategy};


    proptest! {
        #[test]
        fn test_roll_sides_in_range(sides in 1..=200u16, seed: u64) {
            let mut rng = StdRng::seed_from_u64(seed);
            let face = roll_sides_with(&mut rng, sides);
            prop_assert!(face >= 1 && face <= sides);
        }

        #[test]
        fn test_pool_outcome_length(pool in pool_strategy(), seed: u64) {
            let mut rng = StdRng::seed_from_u64(seed);
            let outcome = pool.roll_with(&mut rng);

            prop_assert_eq!(outcome.len(), pool.count() as usize);
            prop_assert!(!outcome.is_empty());
        }

        #[test]
        fn test_pool_faces_in_range(pool in pool_strategy(), seed: u64) {
            let mut rng = StdRng::seed_from_u64(seed);
            let outcome = pool.roll_with(&mut rng);

            for &face in outcome.iter() {
                prop_assert!(face >= 1 && face <= pool.die().sides());
            }
        }

        #[test]
        fn test_pool_total_within_bounds(pool in pool_strategy(), seed: u64) {
            let mut rng = StdRng::seed_from_u64(seed);
            let total = pool.roll_with(&mut rng).total();

            prop_assert!(total >= pool.min());
            prop_assert!(total <= pool.max());
        }

        #[test]
        fn test_pool_bounds(die in die_size_strategy(), count in 1..=50u16) {
            let pool = DicePool::new(die, count);

            prop_assert_eq!(pool.min(), count as u32);
            prop_assert_eq!(pool.max(), count as u32 * die.sides() as u32);
            prop_assert_eq!(pool.avg(), (pool.min() as f32 + pool.max() as f32) / 2.0);
            prop_assert_eq!(pool.possible_values(), (pool.min(), pool.max()));
        }

        #[test]
        fn test_pool_display(die in die_size_strategy(), count in 1..=50u16) {
            let pool = DicePool::new(die, count);
            prop_assert_eq!(pool.to_string(), format!("{}d{}", count, die.sides()));
        }

        #[test]
        fn test_zero_count_clamps_to_one(die in die_size_strategy()) {
            let pool = DicePool::new(die, 0);

            prop_assert_eq!(pool.count(), 1);
            prop_assert_eq!(pool.roll().len(), 1);
        }

        #[test]
        fn test_outcome_total(faces in prop::collection::vec(1..=100u16, 1..20)) {
            let expected: u32 = faces.iter().map(|&f| u32::from(f)).sum();
            let outcome = RollOutcome::new(faces);

            prop_assert_eq!(outcome.total(), expected);
        }

        #[test]
        fn test_outcome_from_iterator(faces in prop::collection::vec(1..=100u16, 1..20)) {
            let outcome: RollOutcome = faces.clone().into_iter().collect();

            prop_assert_eq!(outcome.len(), faces.len());
            prop_assert_eq!(outcome.to_vec(), faces);
        }
    }

    #[test]
    fn test_roll_sides_covers_every_face() {
        let mut rng = StdRng::seed_from_u64(0xFACE);
        let seen: HashSet<u16> = (0..5_000).map(|_| roll_sides_with(&mut rng, 20)).collect();
        assert_eq!(seen.len(), 20);
    }

    // Two pools rolled from the same seed must replay face for face.
    #[test]
    fn test_rolls_are_reproducible_from_seed() {
        let pool = DicePool::new(DieSize::D12, 8);

        let first = pool.roll_with(&mut StdRng::seed_from_u64(99));
        let second = pool.roll_with(&mut StdRng::seed_from_u64(99));

        assert_eq!(first, second);
    }

    #[test]
    fn test_pool_macro() {
        assert_eq!(pool!(D6), DicePool::new(DieSize::D6, 1));
        assert_eq!(pool!(D8, 4), DicePool::new(DieSize::D8, 4));
        assert_eq!(pool!(D100).to_string(), "1d100");
    }
}
