use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::Config;
use crate::error::WheelError;
use crate::round::{Bet, RoundRecord};
use crate::wheel::Wheel;

/// Per-player state between rounds. Only the latest round is kept; each
/// new spin overwrites it.
pub struct Session {
    wheel: Wheel,
    rng: StdRng,
    config: Config,
    last_round: Option<RoundRecord>,
    rounds: u32,
    wins: u32,
}

impl Session {
    pub fn new(config: Config) -> Self {
        let rng = match config.seed {
            Some(seed) => {
                debug!("seeding session rng with {seed}");
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_entropy(),
        };
        Self {
            wheel: Wheel::new(),
            rng,
            config,
            last_round: None,
            rounds: 0,
            wins: 0,
        }
    }

    pub fn wheel(&self) -> &Wheel {
        &self.wheel
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn last_round(&self) -> Option<&RoundRecord> {
        self.last_round.as_ref()
    }

    /// Place a neighbor bet, spin once and record the result.
    pub fn play(&mut self, number: u8, radius: usize) -> Result<&RoundRecord, WheelError> {
        if !self.config.allows(radius) {
            return Err(WheelError::RadiusOutOfRange {
                radius,
                min: self.config.min_radius,
                max: self.config.max_radius,
            });
        }
        let bet = Bet::new(&self.wheel, number, radius)?;
        let winning_number = self.wheel.spin(&mut self.rng);
        let outcome = bet.resolve(winning_number);

        self.rounds += 1;
        if outcome.win {
            self.wins += 1;
        }
        info!(
            "round {}: bet {} r{} on {:?}, ball on {}, {}",
            self.rounds,
            number,
            radius,
            bet.numbers,
            winning_number,
            if outcome.win { "win" } else { "loss" }
        );

        Ok(&*self.last_round.insert(RoundRecord { bet, outcome }))
    }

    pub fn play_default(&mut self, number: u8) -> Result<&RoundRecord, WheelError> {
        self.play(number, self.config.default_radius)
    }

    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    pub fn wins(&self) -> u32 {
        self.wins
    }

    pub fn win_rate(&self) -> f64 {
        if self.rounds == 0 {
            return 0.0;
        }
        self.wins as f64 / self.rounds as f64
    }

    pub fn reset(&mut self) {
        self.last_round = None;
        self.rounds = 0;
        self.wins = 0;
    }
}
