use rand::Rng;
use crate::{DicePool, DieSize, RollOutcome};


/// One snapshot of the rolling session: the selected die, the last outcome,
/// the pending dice-count text and whether a roll has happened yet.
///
/// Transitions consume the snapshot and hand back the next one, so a
/// front end can hold exactly one `Session` value and replace it on every
/// user action.
///
/// # Examples
/// ```
/// use dice_tray::{DieSize, Session};
///
/// let session = Session::new()
///     .select_die(DieSize::D8)
///     .edit_count_input("3");
///
/// let (session, outcome) = session.roll();
///
/// assert_eq!(outcome.len(), 3);
/// assert!(outcome.iter().all(|&face| (1..=8).contains(&face)));
/// assert_eq!(session.last_total(), outcome.total());
/// assert_eq!(session.count_input(), "1");
/// assert!(session.has_rolled());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Session {
    die: DieSize,
    last_roll: RollOutcome,
    count_input: String,
    has_rolled: bool,
}

impl Session {
    /// A fresh session: a d6 selected, nothing rolled, empty count text.
    pub fn new() -> Self {
        Self {
            die: DieSize::default(),
            last_roll: RollOutcome::default(),
            count_input: String::new(),
            has_rolled: false,
        }
    }

    /// The currently selected die.
    pub const fn die(&self) -> DieSize {
        self.die
    }

    /// The faces of the last roll; empty until the first [`Session::roll`].
    pub const fn last_roll(&self) -> &RollOutcome {
        &self.last_roll
    }

    /// The sum of the last roll, 0 until the first roll.
    pub fn last_total(&self) -> u32 {
        self.last_roll.total()
    }

    /// The raw pending dice-count text, exactly as last accepted.
    pub fn count_input(&self) -> &str {
        &self.count_input
    }

    /// The dice count the next roll will use: the pending text parsed as a
    /// positive integer, or 1 when it is empty, unparseable or zero.
    ///
    /// # Examples
    /// ```
    /// use dice_tray::Session;
    ///
    /// assert_eq!(Session::new().pending_count(), 1);
    /// assert_eq!(Session::new().edit_count_input("12").pending_count(), 12);
    /// assert_eq!(Session::new().edit_count_input("0").pending_count(), 1);
    /// ```
    pub fn pending_count(&self) -> u16 {
        self.count_input
            .parse()
            .ok()
            .filter(|&count| count >= 1)
            .unwrap_or(1)
    }

    /// Whether a roll has happened in this session.
    pub const fn has_rolled(&self) -> bool {
        self.has_rolled
    }

    /// Whether the front end should offer the dice-count input at all.
    ///
    /// The d20 and the percentile die are rolled one at a time, so the
    /// input is hidden for them. Hiding is the only effect: previously
    /// typed text stays stored and is still honored at roll time.
    ///
    /// # Examples
    /// ```
    /// use dice_tray::{DieSize, Session};
    ///
    /// assert!(Session::new().count_input_visible());
    /// assert!(!Session::new().select_die(DieSize::D20).count_input_visible());
    /// assert!(!Session::new().select_die(DieSize::D100).count_input_visible());
    /// ```
    pub const fn count_input_visible(&self) -> bool {
        !matches!(self.die, DieSize::D20 | DieSize::D100)
    }

    /// Switches to a different die.
    ///
    /// Nothing else moves: the last outcome and the pending count text are
    /// both kept as they are.
    ///
    /// # Examples
    /// ```
    /// use dice_tray::{DieSize, Session};
    ///
    /// let (session, outcome) = Session::new().roll();
    /// let session = session.select_die(DieSize::D12);
    ///
    /// assert_eq!(session.die(), DieSize::D12);
    /// assert_eq!(session.last_roll(), &outcome);
    /// ```
    #[must_use]
    pub fn select_die(self, die: DieSize) -> Self {
        Self { die, ..self }
    }

    /// Replaces the pending count text, if every character is a decimal
    /// digit.
    ///
    /// A non-digit anywhere rejects the whole edit and the previous text
    /// stays put; nothing is reported back. The empty string counts as all
    /// digits and is accepted.
    ///
    /// # Examples
    /// ```
    /// use dice_tray::Session;
    ///
    /// let session = Session::new().edit_count_input("42");
    /// assert_eq!(session.count_input(), "42");
    ///
    /// let session = session.edit_count_input("12a");
    /// assert_eq!(session.count_input(), "42");
    ///
    /// let session = session.edit_count_input("");
    /// assert_eq!(session.count_input(), "");
    /// ```
    #[must_use]
    pub fn edit_count_input(self, text: &str) -> Self {
        if text.chars().all(|ch| ch.is_ascii_digit()) {
            Self {
                count_input: text.to_owned(),
                ..self
            }
        } else {
            self
        }
    }

    /// Rolls [`Session::pending_count`] dice of the selected size using the
    /// thread-local random source.
    ///
    /// Stores the outcome in the next snapshot, marks the session as
    /// rolled and forces the count text back to `"1"`. The outcome is also
    /// handed back directly so callers can report the individual faces and
    /// their [`RollOutcome::total`] without reaching into the snapshot.
    #[must_use]
    pub fn roll(self) -> (Self, RollOutcome) {
        self.roll_with(&mut rand::rng())
    }

    /// Rolls using the provided random source.
    ///
    /// # Examples
    /// ```
    /// use dice_tray::{DieSize, Session};
    /// use rand::{rngs::StdRng, SeedableRng};
    ///
    /// let session = Session::new().select_die(DieSize::D6).edit_count_input("2");
    ///
    /// let mut rng = StdRng::seed_from_u64(5);
    /// let (session, outcome) = session.roll_with(&mut rng);
    ///
    /// assert_eq!(outcome.len(), 2);
    /// assert_eq!(session.count_input(), "1");
    /// ```
    #[must_use]
    pub fn roll_with<R: Rng + ?Sized>(self, rng: &mut R) -> (Self, RollOutcome) {
        let pool = DicePool::new(self.die, self.pending_count());
        let outcome = pool.roll_with(rng);

        let next = Self {
            last_roll: outcome.clone(),
            count_input: "1".to_owned(),
            has_rolled: true,
            ..self
        };

        (next, outcome)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
