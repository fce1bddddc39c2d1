use serde::{Deserialize, Serialize};
use std::fmt;

/// The four fixed seats, in turn order. Rotation is plain index arithmetic,
/// `J1 → J2 → J3 → J4 → J1`, so partners (J1&J3, J2&J4) alternate around the
/// table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Seat {
    J1,
    J2,
    J3,
    J4,
}

pub const SEATS: [Seat; 4] = [Seat::J1, Seat::J2, Seat::J3, Seat::J4];

impl Seat {
    pub fn index(self) -> usize {
        match self {
            Seat::J1 => 0,
            Seat::J2 => 1,
            Seat::J3 => 2,
            Seat::J4 => 3,
        }
    }

    pub fn from_index(index: usize) -> Seat {
        SEATS[index % 4]
    }

    pub fn next(self) -> Seat {
        Seat::from_index(self.index() + 1)
    }

    pub fn team(self) -> Team {
        match self {
            Seat::J1 | Seat::J3 => Team::Dupla1,
            Seat::J2 | Seat::J4 => Team::Dupla2,
        }
    }

    pub fn partner(self) -> Seat {
        Seat::from_index(self.index() + 2)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Seat::J1 => "J1",
            Seat::J2 => "J2",
            Seat::J3 => "J3",
            Seat::J4 => "J4",
        }
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One of the two fixed partnerships.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Team {
    Dupla1,
    Dupla2,
}

impl Team {
    pub fn index(self) -> usize {
        match self {
            Team::Dupla1 => 0,
            Team::Dupla2 => 1,
        }
    }

    pub fn opponent(self) -> Team {
        match self {
            Team::Dupla1 => Team::Dupla2,
            Team::Dupla2 => Team::Dupla1,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Team::Dupla1 => "Dupla_1",
            Team::Dupla2 => "Dupla_2",
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
