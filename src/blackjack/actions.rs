use alloc::format;
use alloc::vec::Vec;

use tracing::{debug, warn};

use crate::card::Card;
use crate::deck::Deck;
use crate::error::ActionError;
use crate::event::Severity;
use crate::result::{HandOutcome, SeatResult};

use super::bet::PLAYER_NAME;
use super::{Action, Blackjack, GameState, Seat, SeatStatus};

impl Blackjack {
    fn turn_index(&self) -> Result<usize, ActionError> {
        match self.state {
            GameState::PlayerTurn(index) if index < self.seats.len() => Ok(index),
            _ => Err(ActionError::InvalidState),
        }
    }

    fn can_double(&self, seat: &Seat) -> bool {
        if self.shoe.is_empty() {
            return false;
        }
        let affordable = self
            .wallet
            .bet_value(seat.bet)
            .is_some_and(|bet| bet <= self.wallet.money());
        affordable
            && seat
                .totals()
                .totals()
                .iter()
                .any(|&total| self.options.double.allows(total))
    }

    fn can_split(&self, seat: &Seat) -> bool {
        if self.shoe.len() < 2 {
            return false;
        }
        let cards = seat.hand.cards();
        let pair = cards.len() == 2 && cards[0].rank() == cards[1].rank();
        let affordable = self
            .wallet
            .bet_value(seat.bet)
            .is_some_and(|bet| bet <= self.wallet.money());
        seat.decisions == 0 && pair && affordable
    }

    /// Actions the current seat may take. Empty outside a player turn.
    ///
    /// Actions that draw are left out when the shoe cannot cover them.
    #[must_use]
    pub fn available_actions(&self) -> Vec<Action> {
        let Some(seat) = self.current_seat() else {
            return Vec::new();
        };

        let mut actions = Vec::new();
        if !self.shoe.is_empty() {
            actions.push(Action::Hit);
        }
        actions.push(Action::Stand);
        if self.can_double(seat) {
            actions.push(Action::DoubleDown);
        }
        if self.can_split(seat) {
            actions.push(Action::Split);
        }
        if seat.decisions >= 1 {
            actions.push(Action::Surrender);
        }
        actions
    }

    /// Runs an action for the current seat.
    ///
    /// # Errors
    ///
    /// Returns the error of the underlying action.
    pub fn act(&mut self, action: Action) -> Result<(), ActionError> {
        match action {
            Action::Hit => self.hit().map(|_| ()),
            Action::Stand => self.stand(),
            Action::DoubleDown => self.double_down().map(|_| ()),
            Action::Split => self.split(),
            Action::Surrender => self.surrender().map(|_| ()),
        }
    }

    /// Player action: Hit (draw a card).
    ///
    /// A bust resolves the seat's bet as a loss and moves on.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not a player turn or the shoe is empty.
    pub fn hit(&mut self) -> Result<Card, ActionError> {
        let index = self.turn_index()?;
        let card = self.draw().ok_or(ActionError::NoCards)?;

        let seat = &mut self.seats[index];
        seat.hand.insert_top(card);
        seat.decisions += 1;
        debug!(seat = %seat.name, card = %card, value = seat.value(), "hit");

        let message = format!("{} draws the {card}", seat.name);
        self.notify(Severity::Info, message);

        if self.seats[index].totals().is_bust() {
            self.resolve_seat(index, HandOutcome::Bust);
            self.advance_turn();
        }
        Ok(card)
    }

    /// Player action: Stand (keep current hand).
    ///
    /// # Errors
    ///
    /// Returns an error if it is not a player turn.
    pub fn stand(&mut self) -> Result<(), ActionError> {
        let index = self.turn_index()?;

        let seat = &mut self.seats[index];
        seat.decisions += 1;
        seat.status = SeatStatus::Standing;
        debug!(seat = %seat.name, value = seat.value(), "stand");

        self.advance_turn();
        Ok(())
    }

    /// Player action: Double down (double bet, receive one card, then stand).
    ///
    /// # Errors
    ///
    /// Returns an error if it is not a player turn, no total is eligible, the
    /// player lacks funds, or the shoe is empty. The turn is left unchanged.
    pub fn double_down(&mut self) -> Result<Card, ActionError> {
        let index = self.turn_index()?;

        let seat = &self.seats[index];
        let eligible = seat
            .totals()
            .totals()
            .iter()
            .any(|&total| self.options.double.allows(total));
        if !eligible {
            return Err(ActionError::CannotDouble);
        }
        if self.shoe.is_empty() {
            return Err(ActionError::NoCards);
        }
        let bet = seat.bet;
        if !self.wallet.try_adjust_bet(bet, 2) {
            warn!(seat = %seat.name, "double down refused: insufficient funds");
            return Err(ActionError::InsufficientFunds);
        }

        let card = self.draw().ok_or(ActionError::NoCards)?;
        let seat = &mut self.seats[index];
        seat.hand.insert_top(card);
        seat.decisions += 1;
        debug!(seat = %seat.name, card = %card, value = seat.value(), "double down");

        let message = format!("{} doubles down and draws the {card}", seat.name);
        self.notify(Severity::Info, message);

        if self.seats[index].totals().is_bust() {
            self.resolve_seat(index, HandOutcome::Bust);
        } else {
            self.seats[index].status = SeatStatus::Standing;
        }
        self.advance_turn();
        Ok(card)
    }

    /// Player action: Split (split a pair into two hands).
    ///
    /// The second card moves to a new seat with a bet of equal value, placed
    /// right after the current seat. Both hands draw one card and start over
    /// at their first decision.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not a player turn, the hand is not an
    /// undecided pair, the player lacks funds, or the shoe holds fewer than
    /// two cards. The turn is left unchanged.
    pub fn split(&mut self) -> Result<(), ActionError> {
        let index = self.turn_index()?;

        let seat = &self.seats[index];
        let cards = seat.hand.cards();
        if seat.decisions != 0 || cards.len() != 2 || cards[0].rank() != cards[1].rank() {
            return Err(ActionError::CannotSplit);
        }
        if self.shoe.len() < 2 {
            return Err(ActionError::NoCards);
        }
        let value = self
            .wallet
            .bet_value(seat.bet)
            .ok_or(ActionError::CannotSplit)?;
        let new_bet = self
            .wallet
            .create_bet_with_value(value)
            .map_err(|_| ActionError::InsufficientFunds)?;

        let split_count = self.seats.len();
        let seat = &mut self.seats[index];
        let moved = seat.hand.draw().ok_or(ActionError::CannotSplit)?;
        let name = format!("{PLAYER_NAME} (split {split_count})");
        let mut new_seat = Seat::new(name, new_bet, Deck::new(alloc::vec![moved]));

        let first = self.draw().ok_or(ActionError::NoCards)?;
        let second = self.draw().ok_or(ActionError::NoCards)?;
        self.seats[index].hand.insert_top(first);
        new_seat.hand.insert_top(second);
        debug!(seat = %self.seats[index].name, new_seat = %new_seat.name, "split");

        let message = format!("{} splits into two hands", self.seats[index].name);
        self.seats.insert(index + 1, new_seat);
        self.notify(Severity::Info, message);
        Ok(())
    }

    /// Player action: Surrender (forfeit half the bet).
    ///
    /// Only offered once the hand has taken at least one decision. Returns
    /// the amount paid back.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not a player turn or this is the hand's
    /// first decision.
    pub fn surrender(&mut self) -> Result<usize, ActionError> {
        let index = self.turn_index()?;
        if self.seats[index].decisions == 0 {
            return Err(ActionError::CannotSurrender);
        }

        let paid = self.resolve_seat(index, HandOutcome::Surrendered);
        self.advance_turn();
        Ok(paid)
    }

    /// Resolves a seat's bet and takes it out of the round.
    pub(super) fn resolve_seat(&mut self, index: usize, outcome: HandOutcome) -> usize {
        let seat = &mut self.seats[index];
        seat.status = SeatStatus::Resolved(outcome);
        let bet = seat.bet;
        let player_value = seat.value();
        let name = seat.name.clone();

        let value = self.wallet.bet_value(bet).unwrap_or_default();
        let paid = match self.wallet.resolve_bet(bet, outcome.payout()) {
            Ok(paid) => paid,
            Err(err) => {
                warn!(seat = %name, %err, "seat has no open bet, paying nothing");
                0
            }
        };
        debug!(seat = %name, ?outcome, bet = value, paid, "seat resolved");

        let (severity, text) = match outcome {
            HandOutcome::Win => (Severity::Success, format!("{name} wins {paid}")),
            HandOutcome::Push => (Severity::Info, format!("{name} pushes")),
            HandOutcome::Lose => (Severity::Error, format!("{name} loses")),
            HandOutcome::Bust => (Severity::Error, format!("{name} busts with {player_value}")),
            HandOutcome::Surrendered => (Severity::Warn, format!("{name} surrenders")),
        };
        self.notify(severity, text);

        self.results.push(SeatResult {
            name,
            outcome,
            bet: value,
            paid,
            player_value,
        });
        paid
    }

    /// Moves to the next seat still deciding, or to the dealer.
    fn advance_turn(&mut self) {
        let GameState::PlayerTurn(current) = self.state else {
            return;
        };
        let next = self
            .seats
            .iter()
            .enumerate()
            .skip(current + 1)
            .find(|(_, seat)| seat.status == SeatStatus::Deciding)
            .map(|(index, _)| index);

        self.state = match next {
            Some(index) => GameState::PlayerTurn(index),
            None => GameState::DealerTurn,
        };
        debug!(state = ?self.state, "turn advanced");
    }
}
