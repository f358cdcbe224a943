use std::fmt::Display;
use crate::DieSize;


/// A symbolic face-image identifier.
///
/// The tray itself never touches pixels; the presentation layer turns these
/// names into whatever image resources it ships. Names are stable:
/// `d4_1`..`d20_20` for the plain dice, `d10_00`..`d10_90` for percentile
/// decades and `d10_0`..`d10_9` for percentile units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AssetId(&'static str);

impl AssetId {
    /// The symbolic name of the face image.
    ///
    /// # Examples
    /// ```
    /// use dice_tray::{face_asset, DieSize};
    ///
    /// assert_eq!(face_asset(DieSize::D6, 4).name(), "d6_4");
    /// ```
    pub const fn name(self) -> &'static str {
        self.0
    }
}

impl Display for AssetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}


/// Which physical ten-sided die of a percentile pair is being rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PercentileDie {
    /// The decade die, faced `00`, `10`, .. `90`.
    Tens,
    /// The units die, faced `0`, `1`, .. `9`.
    Units,
}


const D4_FACES: [&str; 4] = ["d4_1", "d4_2", "d4_3", "d4_4"];

const D6_FACES: [&str; 6] = ["d6_1", "d6_2", "d6_3", "d6_4", "d6_5", "d6_6"];

const D8_FACES: [&str; 8] = [
    "d8_1", "d8_2", "d8_3", "d8_4", "d8_5", "d8_6", "d8_7", "d8_8",
];

const D10_FACES: [&str; 10] = [
    "d10_1", "d10_2", "d10_3", "d10_4", "d10_5", "d10_6", "d10_7", "d10_8",
    "d10_9", "d10_10",
];

const D12_FACES: [&str; 12] = [
    "d12_1", "d12_2", "d12_3", "d12_4", "d12_5", "d12_6", "d12_7", "d12_8",
    "d12_9", "d12_10", "d12_11", "d12_12",
];

const D20_FACES: [&str; 20] = [
    "d20_1", "d20_2", "d20_3", "d20_4", "d20_5", "d20_6", "d20_7", "d20_8",
    "d20_9", "d20_10", "d20_11", "d20_12", "d20_13", "d20_14", "d20_15",
    "d20_16", "d20_17", "d20_18", "d20_19", "d20_20",
];

const TENS_FACES: [&str; 10] = [
    "d10_00", "d10_10", "d10_20", "d10_30", "d10_40", "d10_50", "d10_60",
    "d10_70", "d10_80", "d10_90",
];

const UNITS_FACES: [&str; 10] = [
    "d10_0", "d10_1", "d10_2", "d10_3", "d10_4", "d10_5", "d10_6", "d10_7",
    "d10_8", "d10_9",
];


/// Resolves the face image for a rolled value.
///
/// A total function: a `value` outside `1..=die.sides()` (including 0)
/// resolves to the face-1 image instead of failing. For [`DieSize::D100`]
/// this returns the tens half of the percentile pair; use
/// [`percentile_asset`] or [`percentile_pair`] to render both halves.
///
/// # Examples
/// ```
/// use dice_tray::{face_asset, DieSize};
///
/// assert_eq!(face_asset(DieSize::D20, 17).name(), "d20_17");
///
/// // Out of range falls back to face 1.
/// assert_eq!(face_asset(DieSize::D8, 0), face_asset(DieSize::D8, 1));
/// assert_eq!(face_asset(DieSize::D8, 9), face_asset(DieSize::D8, 1));
/// ```
pub fn face_asset(die: DieSize, value: u16) -> AssetId {
    match die {
        DieSize::D4 => face(&D4_FACES, value),
        DieSize::D6 => face(&D6_FACES, value),
        DieSize::D8 => face(&D8_FACES, value),
        DieSize::D10 => face(&D10_FACES, value),
        DieSize::D12 => face(&D12_FACES, value),
        DieSize::D20 => face(&D20_FACES, value),
        DieSize::D100 => percentile_asset(value, PercentileDie::Tens),
    }
}

/// Resolves one half of the percentile (d100) composite for a rolled value.
///
/// - [`PercentileDie::Tens`] buckets the raw value into decades: `1..=9`
///   shows `d10_00`, `10..=19` shows `d10_10`, up to `90..=99` showing
///   `d10_90`. Any value outside `1..=99` shows `d10_00` - notably a raw
///   100, which lands past the last decade bucket.
/// - [`PercentileDie::Units`] shows `value % 10`, with a remainder of 0
///   showing the units face `d10_0` (not the decade face `d10_00`).
///
/// # Examples
/// ```
/// use dice_tray::{percentile_asset, PercentileDie};
///
/// assert_eq!(percentile_asset(42, PercentileDie::Tens).name(), "d10_40");
/// assert_eq!(percentile_asset(42, PercentileDie::Units).name(), "d10_2");
///
/// assert_eq!(percentile_asset(100, PercentileDie::Tens).name(), "d10_00");
/// assert_eq!(percentile_asset(30, PercentileDie::Units).name(), "d10_0");
/// ```
pub fn percentile_asset(value: u16, half: PercentileDie) -> AssetId {
    match half {
        PercentileDie::Tens => {
            let decade = match value {
                1..=99 => (value / 10) as usize,
                _ => 0,
            };
            AssetId(TENS_FACES[decade])
        }
        PercentileDie::Units => AssetId(UNITS_FACES[(value % 10) as usize]),
    }
}

/// Resolves both halves of the percentile composite, tens first.
///
/// # Examples
/// ```
/// use dice_tray::percentile_pair;
///
/// let [tens, units] = percentile_pair(67);
/// assert_eq!(tens.name(), "d10_60");
/// assert_eq!(units.name(), "d10_7");
/// ```
pub fn percentile_pair(value: u16) -> [AssetId; 2] {
    [
        percentile_asset(value, PercentileDie::Tens),
        percentile_asset(value, PercentileDie::Units),
    ]
}

// Face tables are indexed by value - 1; anything that misses the table
// resolves to the first face.
fn face(table: &'static [&'static str], value: u16) -> AssetId {
    let index = value
        .checked_sub(1)
        .map(usize::from)
        .filter(|&index| index < table.len())
        .unwrap_or(0);

    AssetId(table[index])
}
