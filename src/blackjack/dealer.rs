use alloc::format;
use alloc::vec::Vec;

use tracing::{debug, info};

use crate::card::Card;
use crate::error::ShowdownError;
use crate::event::Severity;
use crate::hand::BLACKJACK;
use crate::options::DealerRule;
use crate::result::{HandOutcome, RoundResult};

use super::{Blackjack, GameState, SeatStatus};

/// Highest dealer total that still draws.
const DEALER_DRAWS_ON: u16 = 16;

impl Blackjack {
    fn any_standing(&self) -> bool {
        self.seats
            .iter()
            .any(|seat| seat.status == SeatStatus::Standing)
    }

    /// Dealer reveals the hole card and plays their hand.
    ///
    /// Under [`DealerRule::HitOnceOnSixteen`] the dealer draws exactly one
    /// card on 16 or less and never a second, whatever the new total. Under
    /// [`DealerRule::StandOnSeventeen`] the dealer draws until reaching 17.
    /// When every seat is already resolved the dealer does not draw.
    ///
    /// Returns the cards drawn by the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in dealer turn state or the shoe is
    /// empty while the dealer must draw.
    pub fn dealer_play(&mut self) -> Result<Vec<Card>, ShowdownError> {
        if self.state != GameState::DealerTurn {
            return Err(ShowdownError::InvalidState);
        }

        self.dealer.reveal_hole();
        self.pause();
        let mut drawn_cards = Vec::new();

        if self.any_standing() {
            loop {
                let value = self.dealer.value();
                let must_draw = match self.options.dealer_rule {
                    DealerRule::HitOnceOnSixteen => {
                        drawn_cards.is_empty() && value <= DEALER_DRAWS_ON
                    }
                    DealerRule::StandOnSeventeen => value <= DEALER_DRAWS_ON,
                };
                if !must_draw {
                    break;
                }

                let card = self.draw().ok_or(ShowdownError::NoCards)?;
                debug!(card = %card, "dealer draws");
                self.dealer.add_card(card);
                drawn_cards.push(card);
                self.pause();
            }
        }

        let value = self.dealer.value();
        self.notify(Severity::Info, format!("Dealer has {value}"));
        self.state = GameState::Settlement;

        Ok(drawn_cards)
    }

    /// Pays out every seat still in the round and returns to
    /// [`GameState::AwaitingBet`]. Seats and dealer cards stay readable until
    /// the next bet.
    ///
    /// A dealer bust pays every remaining seat double. Otherwise each seat is
    /// compared to the dealer in turn order: higher pays double, equal returns
    /// the stake, lower loses it.
    ///
    /// # Errors
    ///
    /// Returns an error if the dealer has not played yet.
    pub fn settle(&mut self) -> Result<RoundResult, ShowdownError> {
        if self.state != GameState::Settlement {
            return Err(ShowdownError::InvalidState);
        }

        let dealer_value = self.dealer.value();
        let dealer_bust = dealer_value > BLACKJACK;
        if dealer_bust {
            self.notify(Severity::Success, "Dealer busts!");
        }

        for index in 0..self.seats.len() {
            if !self.seats[index].is_active() {
                continue;
            }
            let player_value = self.seats[index].value();
            let outcome = if dealer_bust || player_value > dealer_value {
                HandOutcome::Win
            } else if player_value == dealer_value {
                HandOutcome::Push
            } else {
                HandOutcome::Lose
            };
            self.resolve_seat(index, outcome);
        }

        let result = RoundResult {
            seats: core::mem::take(&mut self.results),
            dealer_value,
            dealer_bust,
            money: self.wallet.money(),
        };
        info!(
            dealer_value,
            dealer_bust,
            net = result.net(),
            money = result.money,
            "round settled"
        );

        self.state = GameState::AwaitingBet;
        Ok(result)
    }
}
