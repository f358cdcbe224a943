use std::fmt::Display;
use rand::Rng;
use crate::Error;


/// The die sizes offered by the tray.
///
/// Each variant names a standard polyhedral die; [`DieSize::D100`] is the
/// percentile die, rolled as a single value in `1..=100` and rendered as a
/// tens/units pair of ten-sided dice (see [`crate::percentile_asset`]).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DieSize {
    /// Four-sided die.
    D4,
    /// Six-sided die. The tray starts on this one.
    #[default]
    D6,
    /// Eight-sided die.
    D8,
    /// Ten-sided die.
    D10,
    /// Twelve-sided die.
    D12,
    /// Twenty-sided die.
    D20,
    /// Percentile die.
    D100,
}

impl DieSize {
    /// All sizes, smallest to largest.
    ///
    /// # Examples
    /// ```
    /// use dice_tray::DieSize;
    ///
    /// assert_eq!(DieSize::ALL.len(), 7);
    /// assert_eq!(DieSize::ALL[0], DieSize::D4);
    /// assert_eq!(DieSize::ALL[6], DieSize::D100);
    /// ```
    pub const ALL: [DieSize; 7] = [
        DieSize::D4,
        DieSize::D6,
        DieSize::D8,
        DieSize::D10,
        DieSize::D12,
        DieSize::D20,
        DieSize::D100,
    ];

    /// The number of faces on this die.
    ///
    /// # Examples
    /// ```
    /// use dice_tray::DieSize;
    ///
    /// assert_eq!(DieSize::D6.sides(), 6);
    /// assert_eq!(DieSize::D100.sides(), 100);
    /// ```
    pub const fn sides(self) -> u16 {
        match self {
            DieSize::D4 => 4,
            DieSize::D6 => 6,
            DieSize::D8 => 8,
            DieSize::D10 => 10,
            DieSize::D12 => 12,
            DieSize::D20 => 20,
            DieSize::D100 => 100,
        }
    }

    /// Rolls this die once using the thread-local random source.
    ///
    /// The result is uniformly distributed over `1..=self.sides()`.
    pub fn roll(self) -> u16 {
        self.roll_with(&mut rand::rng())
    }

    /// Rolls this die once using the provided random source.
    ///
    /// # Examples
    /// ```
    /// use dice_tray::DieSize;
    /// use rand::{rngs::StdRng, SeedableRng};
    ///
    /// let mut rng = StdRng::seed_from_u64(7);
    /// let face = DieSize::D20.roll_with(&mut rng);
    /// assert!((1..=20).contains(&face));
    /// ```
    pub fn roll_with<R: Rng + ?Sized>(self, rng: &mut R) -> u16 {
        rng.random_range(1..=self.sides())
    }
}

impl TryFrom<u16> for DieSize {
    type Error = Error;

    /// Converts a side count into a [`DieSize`].
    ///
    /// # Errors
    /// Returns [`Error::UnsupportedSides`] for any count other than
    /// 4, 6, 8, 10, 12, 20 or 100.
    ///
    /// # Examples
    /// ```
    /// use dice_tray::{DieSize, Error};
    ///
    /// assert_eq!(DieSize::try_from(12), Ok(DieSize::D12));
    /// assert_eq!(DieSize::try_from(7), Err(Error::UnsupportedSides(7)));
    /// ```
    fn try_from(sides: u16) -> Result<Self, Self::Error> {
        match sides {
            4 => Ok(DieSize::D4),
            6 => Ok(DieSize::D6),
            8 => Ok(DieSize::D8),
            10 => Ok(DieSize::D10),
            12 => Ok(DieSize::D12),
            20 => Ok(DieSize::D20),
            100 => Ok(DieSize::D100),
            other => Err(Error::UnsupportedSides(other)),
        }
    }
}

impl From<DieSize> for u16 {
    fn from(die: DieSize) -> Self {
        die.sides()
    }
}

impl Display for DieSize {
    /// Formats the die in standard dice notation.
    ///
    /// # Examples
    /// ```
    /// use dice_tray::DieSize;
    ///
    /// assert_eq!(DieSize::D8.to_string(), "d8");
    /// ```
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "d{}", self.sides())
    }
}
