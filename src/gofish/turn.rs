use alloc::format;

use tracing::{debug, info, warn};

use crate::card::Rank;
use crate::error::GoFishError;
use crate::event::{Event, Severity};

use super::{GoFish, Phase, PlayerKind, TurnOutcome};

impl GoFish {
    fn ensure_turn(&self, kind: PlayerKind) -> Result<usize, GoFishError> {
        let current = self.current_player().ok_or(GoFishError::InvalidState)?;
        if self.players[current].kind != kind {
            return Err(match kind {
                PlayerKind::Human => GoFishError::NotHumanTurn,
                PlayerKind::Opponent => GoFishError::NotOpponentTurn,
            });
        }
        Ok(current)
    }

    /// The human asks `target` for every card of `rank`.
    ///
    /// # Errors
    ///
    /// Returns an error if turns are not running, it is an opponent's turn,
    /// or `target` is not another active player.
    pub fn ask(&mut self, target: usize, rank: Rank) -> Result<TurnOutcome, GoFishError> {
        let asker = self.ensure_turn(PlayerKind::Human)?;
        if !self.valid_targets().contains(&target) {
            return Err(GoFishError::InvalidTarget);
        }
        self.run_turn(asker, target, rank)
    }

    /// The human draws from the pile because nobody is left to ask.
    ///
    /// # Errors
    ///
    /// Returns an error if turns are not running, it is an opponent's turn,
    /// or there is still someone to ask.
    pub fn fish(&mut self) -> Result<TurnOutcome, GoFishError> {
        let asker = self.ensure_turn(PlayerKind::Human)?;
        if !self.valid_targets().is_empty() {
            return Err(GoFishError::InvalidState);
        }
        self.go_fish(asker)
    }

    /// Plays the current opponent's turn with the built-in policy.
    ///
    /// # Errors
    ///
    /// Returns an error if turns are not running or it is the human's turn.
    pub fn play_opponent_turn(&mut self) -> Result<TurnOutcome, GoFishError> {
        let asker = self.ensure_turn(PlayerKind::Opponent)?;
        match self.opponent_choice(asker) {
            Some((target, rank)) => self.run_turn(asker, target, rank),
            None => self.go_fish(asker),
        }
    }

    /// Resolves "`target`, do you have any `rank`s?".
    ///
    /// On a catch every matching card moves to the asker, who keeps the turn.
    /// On a miss the asker goes fishing.
    fn run_turn(
        &mut self,
        asker: usize,
        target: usize,
        rank: Rank,
    ) -> Result<TurnOutcome, GoFishError> {
        let asker_name = self.players[asker].name.clone();
        let target_name = self.players[target].name.clone();
        debug!(asker = %asker_name, target = %target_name, %rank, "ask");
        self.notify(
            Severity::Info,
            format!("{asker_name}: {target_name}, do you have any {}?", rank.plural_name()),
        );

        let matches = self.players[target].hand.take_rank(rank);
        if matches.is_empty() {
            self.notify(Severity::Info, format!("{target_name}: Go fish!"));
            return self.go_fish(asker);
        }

        let count = matches.len();
        self.players[asker].hand.extend(matches);
        self.notify(
            Severity::Success,
            format!("{asker_name} took {count} {} from {target_name}", rank_word(rank, count)),
        );
        let books = self.lay_down_books(asker)?;
        self.events.push(Event::Pause(self.options.turn_delay));

        Ok(TurnOutcome::Caught {
            from: target,
            rank,
            count,
            books,
        })
    }

    /// Draws one card for the asker and passes the turn. With an empty pile
    /// the asker is eliminated instead.
    fn go_fish(&mut self, asker: usize) -> Result<TurnOutcome, GoFishError> {
        let outcome = if let Some(card) = self.pile.draw() {
            debug!(player = %self.players[asker].name, %card, "fished");
            self.players[asker].hand.insert_top(card);
            let books = self.lay_down_books(asker)?;
            self.round = self.round.advanced();
            TurnOutcome::GoFish { drew: card, books }
        } else {
            let name = self.players[asker].name.clone();
            warn!(player = %name, "pile empty, player eliminated");
            self.notify(Severity::Warn, format!("{name} is out of the game"));
            self.round = self.round.without(asker).advanced();
            TurnOutcome::Eliminated
        };

        if self.round.is_over() {
            self.finish();
        } else {
            self.announce_turn();
        }
        Ok(outcome)
    }

    fn finish(&mut self) {
        let winner = (0..self.players.len())
            .max_by_key(|&index| (self.books.book_count(index), core::cmp::Reverse(index)))
            .unwrap_or(0);
        self.phase = Phase::RoundOver { winner };

        let name = self.players[winner].name.clone();
        let books = self.books.book_count(winner);
        info!(winner = %name, books, "go fish game over");
        self.notify(Severity::Success, format!("{name} wins with {books} books!"));
    }
}

fn rank_word(rank: Rank, count: usize) -> &'static str {
    if count == 1 { rank.name() } else { rank.plural_name() }
}
