//! Card types and identity.

extern crate alloc;

use alloc::string::String;
use core::cmp::Ordering;
use core::fmt;
use core::sync::atomic::{AtomicU32, Ordering as AtomicOrdering};

use rand::Rng;

/// Number of cards per standard deck.
pub const DECK_SIZE: usize = 52;

static NEXT_CARD_ID: AtomicU32 = AtomicU32::new(0);

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
    /// Spades.
    Spades,
}

impl Suit {
    /// All suits in deck-building order.
    pub const ALL: [Self; 4] = [Self::Hearts, Self::Diamonds, Self::Clubs, Self::Spades];

    /// Lowercase suit name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Hearts => "hearts",
            Self::Diamonds => "diamonds",
            Self::Clubs => "clubs",
            Self::Spades => "spades",
        }
    }

    /// Single-letter code used in asset names.
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Hearts => 'H',
            Self::Diamonds => 'D',
            Self::Clubs => 'C',
            Self::Spades => 'S',
        }
    }

    /// Colour of the suit.
    #[must_use]
    pub const fn color(self) -> CardColor {
        match self {
            Self::Hearts | Self::Diamonds => CardColor::Red,
            Self::Clubs | Self::Spades => CardColor::Black,
        }
    }

    /// Picks a suit at random.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Card rank, with ordinals 1 (Ace) through 13 (King).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Rank {
    /// Ace.
    Ace = 1,
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
}

impl Rank {
    /// All ranks in ascending order.
    pub const ALL: [Self; 13] = [
        Self::Ace,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
    ];

    /// Returns the ordinal (1 = Ace, 13 = King).
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Looks up a rank by its ordinal.
    #[must_use]
    pub const fn from_ordinal(ordinal: u8) -> Option<Self> {
        if ordinal >= 1 && ordinal <= 13 {
            Some(Self::ALL[(ordinal - 1) as usize])
        } else {
            None
        }
    }

    /// Lowercase rank name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ace => "ace",
            Self::Two => "two",
            Self::Three => "three",
            Self::Four => "four",
            Self::Five => "five",
            Self::Six => "six",
            Self::Seven => "seven",
            Self::Eight => "eight",
            Self::Nine => "nine",
            Self::Ten => "ten",
            Self::Jack => "jack",
            Self::Queen => "queen",
            Self::King => "king",
        }
    }

    /// Plural rank name, as used in "any sixes?".
    #[must_use]
    pub const fn plural_name(self) -> &'static str {
        match self {
            Self::Ace => "aces",
            Self::Two => "twos",
            Self::Three => "threes",
            Self::Four => "fours",
            Self::Five => "fives",
            Self::Six => "sixes",
            Self::Seven => "sevens",
            Self::Eight => "eights",
            Self::Nine => "nines",
            Self::Ten => "tens",
            Self::Jack => "jacks",
            Self::Queen => "queens",
            Self::King => "kings",
        }
    }

    /// Single-character code used in asset names.
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Ace => 'A',
            Self::Two => '2',
            Self::Three => '3',
            Self::Four => '4',
            Self::Five => '5',
            Self::Six => '6',
            Self::Seven => '7',
            Self::Eight => '8',
            Self::Nine => '9',
            Self::Ten => 'T',
            Self::Jack => 'J',
            Self::Queen => 'Q',
            Self::King => 'K',
        }
    }

    /// Picks a rank at random.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Card colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardColor {
    /// Hearts and diamonds.
    Red,
    /// Clubs and spades.
    Black,
}

/// Process-unique identity of a physical card.
///
/// Two cards with the same suit and rank are still different cards; every
/// "contains"/"remove" check goes through this identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CardId(u32);

impl CardId {
    fn next() -> Self {
        Self(NEXT_CARD_ID.fetch_add(1, AtomicOrdering::Relaxed))
    }

    /// Returns the raw identifier.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

/// A playing card.
///
/// Equality includes the card's [`CardId`], so a freshly created card never
/// equals an existing one even when suit and rank match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    suit: Suit,
    rank: Rank,
    id: CardId,
}

impl Card {
    /// Creates a new card with a fresh identity.
    #[must_use]
    pub fn new(suit: Suit, rank: Rank) -> Self {
        Self {
            suit,
            rank,
            id: CardId::next(),
        }
    }

    /// The suit of the card.
    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    /// The rank of the card.
    #[must_use]
    pub const fn rank(&self) -> Rank {
        self.rank
    }

    /// The identity of the card.
    #[must_use]
    pub const fn id(&self) -> CardId {
        self.id
    }

    /// Colour of the card.
    #[must_use]
    pub const fn color(&self) -> CardColor {
        self.suit.color()
    }

    /// Returns whether the card is a heart or a diamond.
    #[must_use]
    pub const fn is_red(&self) -> bool {
        matches!(self.color(), CardColor::Red)
    }

    /// Orders two cards by rank only.
    #[must_use]
    pub fn compare(&self, other: &Self) -> Ordering {
        self.rank.cmp(&other.rank)
    }

    /// Code of the image asset for this card.
    ///
    /// Face-up cards are rank code followed by suit code (`"AH"`, `"TC"`).
    /// Face-down cards only reveal their colour: `"2B"` for red, `"1B"` for
    /// black.
    #[must_use]
    pub fn asset_code(&self, hidden: bool) -> String {
        let mut code = String::with_capacity(2);
        if hidden {
            code.push_str(if self.is_red() { "2B" } else { "1B" });
        } else {
            code.push(self.rank.code());
            code.push(self.suit.code());
        }
        code
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.rank, self.suit)
    }
}

/// Creates a card with a random suit and rank.
pub fn random_card<R: Rng + ?Sized>(rng: &mut R) -> Card {
    Card::new(Suit::random(rng), Rank::random(rng))
}
