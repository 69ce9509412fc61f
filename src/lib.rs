//! Roulette wheel modeled as a cycle of 37 pockets. A bet covers a chosen
//! number and its neighbors on the wheel; a spin draws one pocket uniformly.

pub mod config;
pub mod error;
pub mod round;
pub mod session;
pub mod wheel;

pub use config::Config;
pub use error::{ConfigError, WheelError};
pub use round::{Bet, RoundOutcome, RoundRecord};
pub use session::Session;
pub use wheel::{is_win, win_probability, Wheel, POCKETS, WHEEL_ORDER};
