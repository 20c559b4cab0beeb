use rand::Rng;

use crate::card::Rank;

use super::GoFish;

impl GoFish {
    /// Picks whom `asker` asks and for which rank.
    ///
    /// The target is the other active player holding the most cards; the
    /// earliest seat wins ties. The rank comes from a random card in the
    /// asker's hand, or is fully random if the hand is empty. Returns `None`
    /// when nobody else is active.
    pub(super) fn opponent_choice(&mut self, asker: usize) -> Option<(usize, Rank)> {
        let mut target: Option<usize> = None;
        for &index in self.round.active() {
            if index == asker {
                continue;
            }
            let better = target.is_none_or(|best| {
                self.players[index].hand.len() > self.players[best].hand.len()
            });
            if better {
                target = Some(index);
            }
        }
        let target = target?;

        let hand = self.players[asker].hand.cards();
        let rank = if hand.is_empty() {
            Rank::random(&mut self.rng)
        } else {
            hand[self.rng.random_range(0..hand.len())].rank()
        };
        Some((target, rank))
    }
}
