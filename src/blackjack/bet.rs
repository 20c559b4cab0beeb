use alloc::vec::Vec;

use tracing::{debug, info};

use crate::deck::Deck;
use crate::error::{BetError, DealError};
use crate::event::Severity;
use crate::money::BetId;

use super::{Blackjack, GameState, Seat};

/// Name of the player's first seat.
pub const PLAYER_NAME: &str = "PLAYER";

impl Blackjack {
    /// Places the round's bet and prepares a freshly shuffled shoe.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is already in progress, the amount is
    /// outside the table limits, or the player lacks funds.
    pub fn place_bet(&mut self, amount: usize) -> Result<BetId, BetError> {
        if self.state != GameState::AwaitingBet {
            return Err(BetError::InvalidState);
        }

        let bet = self.wallet.create_bet(amount)?;

        self.shoe = self.fresh_shoe();
        self.seats = alloc::vec![Seat::new(PLAYER_NAME, bet, Deck::empty())];
        self.dealer.clear();
        self.results = Vec::new();
        self.state = GameState::Dealing;

        info!(amount, money = self.wallet.money(), "bet placed");
        Ok(bet)
    }

    /// Deals two cards to the player and two to the dealer, in the order
    /// player, player, dealer, dealer. The dealer's second card stays hidden.
    ///
    /// # Errors
    ///
    /// Returns an error if no bet has been placed or the shoe holds fewer
    /// than four cards.
    pub fn deal(&mut self) -> Result<(), DealError> {
        if self.state != GameState::Dealing {
            return Err(DealError::InvalidState);
        }
        if self.cards_remaining() < 4 {
            return Err(DealError::NotEnoughCards);
        }

        for _ in 0..2 {
            if let Some(card) = self.draw() {
                debug!(card = %card, "dealt to player");
                self.seats[0].hand.insert_top(card);
            }
            self.pause();
        }
        for _ in 0..2 {
            if let Some(card) = self.draw() {
                debug!(card = %card, "dealt to dealer");
                self.dealer.add_card(card);
            }
            self.pause();
        }

        if let Some(up) = self.dealer.up_card().copied() {
            self.notify(Severity::Info, alloc::format!("Dealer shows the {up}"));
        }
        self.state = GameState::PlayerTurn(0);
        Ok(())
    }
}
