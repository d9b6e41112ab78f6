//! Game configuration options.

use core::time::Duration;

use crate::deck::PENALTY_CARDS;

/// Configuration options for a slap game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use core::time::Duration;
/// use slaprs::GameOptions;
///
/// let options = GameOptions::default()
///     .with_wait_time(Duration::from_millis(750))
///     .with_show_intro(false);
/// assert_eq!(options.penalty_cards, 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    /// Length of the slap window. A slap must arrive strictly before it closes.
    pub wait_time: Duration,
    /// Cards moved onto the discard pile by a false slap.
    pub penalty_cards: usize,
    /// Whether to show the start prompt and instructions before the first turn.
    pub show_intro: bool,
    /// How long the board stays up after a drawing turn ends.
    pub turn_pause: Duration,
    /// How long a slap result stays up before the board is redrawn.
    pub result_pause: Duration,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            wait_time: Duration::from_secs(1),
            penalty_cards: PENALTY_CARDS,
            show_intro: true,
            turn_pause: Duration::from_millis(600),
            result_pause: Duration::from_millis(100),
        }
    }
}

impl GameOptions {
    /// Sets the slap window.
    ///
    /// # Example
    ///
    /// ```
    /// use core::time::Duration;
    /// use slaprs::GameOptions;
    ///
    /// let options = GameOptions::default().with_wait_time(Duration::from_millis(500));
    /// assert_eq!(options.wait_time, Duration::from_millis(500));
    /// ```
    #[must_use]
    pub const fn with_wait_time(mut self, wait_time: Duration) -> Self {
        self.wait_time = wait_time;
        self
    }

    /// Sets the number of cards lost to a false slap.
    ///
    /// A false slap always costs at least one card, so zero is raised to one.
    ///
    /// # Example
    ///
    /// ```
    /// use slaprs::GameOptions;
    ///
    /// assert_eq!(GameOptions::default().with_penalty_cards(0).penalty_cards, 1);
    /// ```
    #[must_use]
    pub const fn with_penalty_cards(mut self, cards: usize) -> Self {
        self.penalty_cards = if cards == 0 { 1 } else { cards };
        self
    }

    /// Sets the pause after each drawing turn.
    #[must_use]
    pub const fn with_turn_pause(mut self, pause: Duration) -> Self {
        self.turn_pause = pause;
        self
    }

    /// Sets the pause after each slap result.
    #[must_use]
    pub const fn with_result_pause(mut self, pause: Duration) -> Self {
        self.result_pause = pause;
        self
    }

    /// Sets whether the intro sequence is shown.
    ///
    /// # Example
    ///
    /// ```
    /// use slaprs::GameOptions;
    ///
    /// let options = GameOptions::default().with_show_intro(false);
    /// assert!(!options.show_intro);
    /// ```
    #[must_use]
    pub const fn with_show_intro(mut self, show: bool) -> Self {
        self.show_intro = show;
        self
    }
}
