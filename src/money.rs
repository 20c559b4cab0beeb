//! Player money and open bets.

extern crate alloc;

use alloc::vec::Vec;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::error::BetError;
use crate::options::RoundingMode;
use crate::result::Payout;

#[cfg(feature = "std")]
fn round_amount(amount: f64, mode: RoundingMode) -> usize {
    match mode {
        RoundingMode::Up => amount.ceil() as usize,
        RoundingMode::Down => amount.floor() as usize,
        RoundingMode::Nearest => amount.round() as usize,
    }
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
fn round_amount(amount: f64, mode: RoundingMode) -> usize {
    match mode {
        RoundingMode::Up => libm::ceil(amount) as usize,
        RoundingMode::Down => libm::floor(amount) as usize,
        RoundingMode::Nearest => libm::round(amount) as usize,
    }
}

/// Identifier of an open bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BetId(u32);

/// A player's money and the bets currently on the table.
///
/// Placing a bet moves its value out of the available money; resolving it
/// pays back `floor(value * multiplier)` under the default rounding.
#[derive(Debug, Clone)]
pub struct Wallet {
    money: usize,
    min_bet: usize,
    max_bet: usize,
    rounding: RoundingMode,
    next_bet: u32,
    bets: HashMap<BetId, usize>,
}

impl Wallet {
    /// Creates a wallet with bet limits.
    #[must_use]
    pub fn new(money: usize, min_bet: usize, max_bet: usize) -> Self {
        Self {
            money,
            min_bet,
            max_bet,
            rounding: RoundingMode::Down,
            next_bet: 0,
            bets: HashMap::new(),
        }
    }

    /// Sets how fractional payouts are rounded.
    #[must_use]
    pub const fn with_rounding(mut self, rounding: RoundingMode) -> Self {
        self.rounding = rounding;
        self
    }

    /// Money not committed to a bet.
    #[must_use]
    pub const fn money(&self) -> usize {
        self.money
    }

    /// Smallest accepted bet.
    #[must_use]
    pub const fn min_bet(&self) -> usize {
        self.min_bet
    }

    /// Largest accepted bet.
    #[must_use]
    pub const fn max_bet(&self) -> usize {
        self.max_bet
    }

    /// Places a new bet within the table limits.
    ///
    /// # Errors
    ///
    /// Returns an error if the amount is outside the limits or exceeds the
    /// available money.
    pub fn create_bet(&mut self, amount: usize) -> Result<BetId, BetError> {
        if amount < self.min_bet {
            return Err(BetError::BelowMinimum);
        }
        if amount > self.max_bet {
            return Err(BetError::AboveMaximum);
        }
        self.create_bet_with_value(amount)
    }

    /// Places a bet of an exact amount, ignoring the table limits.
    ///
    /// Used for the second bet of a split, which matches the first.
    ///
    /// # Errors
    ///
    /// Returns [`BetError::InsufficientFunds`] if the amount exceeds the
    /// available money.
    pub fn create_bet_with_value(&mut self, amount: usize) -> Result<BetId, BetError> {
        if amount > self.money {
            return Err(BetError::InsufficientFunds);
        }
        let id = BetId(self.next_bet);
        self.next_bet += 1;
        self.money -= amount;
        self.bets.insert(id, amount);
        Ok(id)
    }

    /// Returns the value of an open bet.
    #[must_use]
    pub fn bet_value(&self, id: BetId) -> Option<usize> {
        self.bets.get(&id).copied()
    }

    /// Values of every open bet, ordered by placement.
    #[must_use]
    pub fn open_bets(&self) -> Vec<usize> {
        let mut bets: Vec<(BetId, usize)> = self.bets.iter().map(|(id, v)| (*id, *v)).collect();
        bets.sort_by_key(|(id, _)| *id);
        bets.into_iter().map(|(_, value)| value).collect()
    }

    /// Closes a bet and pays back its value times the payout multiplier.
    ///
    /// Returns the amount paid back.
    ///
    /// # Errors
    ///
    /// Returns [`BetError::UnknownBet`] if the bet is not open.
    pub fn resolve_bet(&mut self, id: BetId, payout: Payout) -> Result<usize, BetError> {
        let value = self.bets.remove(&id).ok_or(BetError::UnknownBet)?;
        #[expect(
            clippy::cast_precision_loss,
            reason = "f64 has sufficient precision for monetary values"
        )]
        let paid = round_amount(value as f64 * payout.multiplier(), self.rounding);
        self.money += paid;
        Ok(paid)
    }

    /// Scales an open bet by `multiplier`, taking the difference from the
    /// available money.
    ///
    /// Returns `false`, leaving everything unchanged, if the bet is unknown,
    /// the multiplier would shrink it, or the money does not cover it.
    pub fn try_adjust_bet(&mut self, id: BetId, multiplier: usize) -> bool {
        let Some(value) = self.bets.get_mut(&id) else {
            return false;
        };
        let Some(new_value) = value.checked_mul(multiplier) else {
            return false;
        };
        let Some(needed) = new_value.checked_sub(*value) else {
            return false;
        };
        if needed > self.money {
            return false;
        }
        self.money -= needed;
        *value = new_value;
        true
    }
}
