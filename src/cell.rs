//! A single box of the grid: four border flags and the enclosure latch.

use core::fmt;

use crate::common::Direction;
use crate::player::{Player, PlayerId};

const ALL_BORDERS: u8 = 0b1111;

/// What a single border activation did to a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    /// Border was already set; nothing changed.
    Redundant,
    /// Border was set and the cell is still open.
    Set,
    /// Border was set and completed the cell.
    Enclosed,
}

impl Activation {
    /// Whether this activation changed any flag.
    pub fn changed(self) -> bool {
        !matches!(self, Activation::Redundant)
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct Cell {
    id: usize,
    borders: u8,
    enclosed: bool,
    captured_by: Option<PlayerId>,
}

impl Cell {
    /// Create an open cell with no borders set.
    pub fn new(id: usize) -> Self {
        Self {
            id,
            borders: 0,
            enclosed: false,
            captured_by: None,
        }
    }

    /// Display label of this cell.
    pub fn id(&self) -> usize {
        self.id
    }

    pub fn has_border(&self, direction: Direction) -> bool {
        self.borders & direction.bit() != 0
    }

    /// Number of borders currently set (0..=4).
    pub fn border_count(&self) -> u32 {
        self.borders.count_ones()
    }

    pub fn is_enclosed(&self) -> bool {
        self.enclosed
    }

    /// Player who completed this cell, if it is enclosed.
    pub fn captured_by(&self) -> Option<PlayerId> {
        self.captured_by
    }

    /// Set the border on `direction`. If that completes the cell, it is
    /// latched as enclosed, attributed to `acting` and `acting` gains a point.
    ///
    /// Setting a border twice is a no-op and never awards a point.
    pub fn activate_border(&mut self, direction: Direction, acting: &mut Player) -> Activation {
        if self.has_border(direction) {
            return Activation::Redundant;
        }
        self.borders |= direction.bit();
        if !self.enclosed && self.borders == ALL_BORDERS {
            self.enclosed = true;
            self.captured_by = Some(acting.id());
            acting.gain_point();
            return Activation::Enclosed;
        }
        Activation::Set
    }

    /// Clear all borders, the enclosure and the capturer.
    pub fn reset(&mut self) {
        self.borders = 0;
        self.enclosed = false;
        self.captured_by = None;
    }
}

impl fmt::Debug for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cell {{ id: {}, borders: ", self.id)?;
        for d in Direction::ALL {
            let ch = if self.has_border(d) { d.code() } else { '-' };
            write!(f, "{}", ch)?;
        }
        write!(f, ", captured_by: {:?} }}", self.captured_by)
    }
}
