use core::fmt;

/// Identity of one of the two seats at the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum PlayerId {
    P1,
    P2,
}

impl PlayerId {
    /// Both players, in turn order.
    pub const ALL: [PlayerId; 2] = [PlayerId::P1, PlayerId::P2];

    /// The opponent of this player.
    pub const fn other(self) -> Self {
        match self {
            PlayerId::P1 => PlayerId::P2,
            PlayerId::P2 => PlayerId::P1,
        }
    }

    /// Position of this player in per-player arrays.
    pub const fn index(self) -> usize {
        match self {
            PlayerId::P1 => 0,
            PlayerId::P2 => 1,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            PlayerId::P1 => "P1",
            PlayerId::P2 => "P2",
        }
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A player's identity and running score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct Player {
    id: PlayerId,
    score: u32,
}

impl Player {
    /// Create a player with a score of zero.
    pub fn new(id: PlayerId) -> Self {
        Self { id, score: 0 }
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Award one point for a captured box.
    pub fn gain_point(&mut self) {
        self.score += 1;
    }

    /// Clear the score. The identity is kept.
    pub fn reset(&mut self) {
        self.score = 0;
    }
}
