//! Table configuration.

/// Configuration options for a blackjack table.
///
/// Use the builder methods to customize options:
///
/// ```
/// use blackjack_core::TableOptions;
///
/// let options = TableOptions::default()
///     .with_bet_limits(10, 500)
///     .with_dealer_stands_on(17);
/// assert_eq!(options.min_bet, 10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TableOptions {
    /// Smallest accepted bet (inclusive).
    pub min_bet: u32,
    /// Largest accepted bet (inclusive).
    pub max_bet: u32,
    /// The dealer keeps drawing while below this value.
    pub dealer_stands_on: u8,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            min_bet: 5,
            max_bet: 150,
            dealer_stands_on: 17,
        }
    }
}

impl TableOptions {
    /// Sets the inclusive bet limits.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack_core::TableOptions;
    ///
    /// let options = TableOptions::default().with_bet_limits(1, 1000);
    /// assert_eq!((options.min_bet, options.max_bet), (1, 1000));
    /// ```
    #[must_use]
    pub const fn with_bet_limits(mut self, min: u32, max: u32) -> Self {
        self.min_bet = min;
        self.max_bet = max;
        self
    }

    /// Sets the value at which the dealer stops drawing.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack_core::TableOptions;
    ///
    /// let options = TableOptions::default().with_dealer_stands_on(18);
    /// assert_eq!(options.dealer_stands_on, 18);
    /// ```
    #[must_use]
    pub const fn with_dealer_stands_on(mut self, value: u8) -> Self {
        self.dealer_stands_on = value;
        self
    }

    /// Returns whether `amount` is within the bet limits.
    #[must_use]
    pub const fn accepts_bet(&self, amount: u32) -> bool {
        amount >= self.min_bet && amount <= self.max_bet
    }
}
