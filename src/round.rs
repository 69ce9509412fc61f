use serde::{Serialize, Serializer};

use crate::error::WheelError;
use crate::wheel::{self, Wheel};

/// A neighbor bet: the chosen number and every pocket within `radius` of it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bet {
    pub number: u8,
    pub radius: usize,
    pub numbers: Vec<u8>,
}

impl Bet {
    pub fn new(wheel: &Wheel, number: u8, radius: usize) -> Result<Self, WheelError> {
        let numbers = wheel.neighbors(number, radius)?;
        Ok(Self {
            number,
            radius,
            numbers,
        })
    }

    pub fn covers(&self, pocket: u8) -> bool {
        wheel::is_win(pocket, &self.numbers)
    }

    pub fn win_probability(&self) -> f64 {
        wheel::win_probability(&self.numbers)
    }

    pub fn resolve(&self, winning_number: u8) -> RoundOutcome {
        RoundOutcome {
            winning_number,
            win: self.covers(winning_number),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundOutcome {
    pub winning_number: u8,
    pub win: bool,
}

/// Everything shown about the most recent round. Serializes flat as
/// `{ bet_number, bets, winning_number, win }`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoundRecord {
    pub bet: Bet,
    pub outcome: RoundOutcome,
}

#[derive(Serialize)]
struct FlatRecord<'a> {
    bet_number: u8,
    bets: &'a [u8],
    winning_number: u8,
    win: bool,
}

impl Serialize for RoundRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        FlatRecord {
            bet_number: self.bet.number,
            bets: &self.bet.numbers,
            winning_number: self.outcome.winning_number,
            win: self.outcome.win,
        }
        .serialize(serializer)
    }
}

impl RoundRecord {
    pub fn bet_number(&self) -> u8 {
        self.bet.number
    }

    pub fn winning_number(&self) -> u8 {
        self.outcome.winning_number
    }

    pub fn is_win(&self) -> bool {
        self.outcome.win
    }
}
