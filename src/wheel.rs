use rand::Rng;

use crate::error::WheelError;

pub const POCKETS: usize = 37;

/// European single-zero wheel, clockwise from zero.
pub const WHEEL_ORDER: [u8; POCKETS] = [
    0, 32, 15, 19, 4, 21, 2, 25, 17, 34, 6, 27, 13, 36, 11, 30, 8, 23, 10, 5, 24, 16, 33, 1, 20,
    14, 31, 9, 22, 18, 29, 7, 28, 12, 35, 3, 26,
];

// Past this many steps each way the bet already covers every pocket.
const MAX_USEFUL_RADIUS: usize = POCKETS / 2;

/// The fixed cyclic ordering of pockets. Each pocket is joined to the one
/// before and after it, and the last wraps around to zero.
#[derive(Clone, Copy, Debug, Default)]
pub struct Wheel;

impl Wheel {
    pub const fn new() -> Self {
        Wheel
    }

    pub fn order(&self) -> &'static [u8] {
        &WHEEL_ORDER
    }

    pub fn contains(&self, number: u8) -> bool {
        WHEEL_ORDER.contains(&number)
    }

    /// Index of `number` in wheel order.
    pub fn position(&self, number: u8) -> Result<usize, WheelError> {
        WHEEL_ORDER
            .iter()
            .position(|&n| n == number)
            .ok_or(WheelError::NotOnWheel(number))
    }

    /// Pocket `steps` places clockwise (positive) or counter-clockwise
    /// (negative) from the pocket at `index`.
    fn step(&self, index: usize, steps: isize) -> u8 {
        let wrapped = (index as isize + steps).rem_euclid(POCKETS as isize) as usize;
        WHEEL_ORDER[wrapped]
    }

    /// The two pockets touching `number`: (counter-clockwise, clockwise).
    pub fn adjacent(&self, number: u8) -> Result<(u8, u8), WheelError> {
        let idx = self.position(number)?;
        Ok((self.step(idx, -1), self.step(idx, 1)))
    }

    /// `chosen` plus `radius` pockets on each side of it, sorted ascending
    /// with no duplicates.
    pub fn neighbors(&self, chosen: u8, radius: usize) -> Result<Vec<u8>, WheelError> {
        let idx = self.position(chosen)?;
        let reach = radius.min(MAX_USEFUL_RADIUS) as isize;

        let mut bets = Vec::with_capacity(2 * reach as usize + 1);
        bets.push(chosen);
        for i in 1..=reach {
            bets.push(self.step(idx, i));
            bets.push(self.step(idx, -i));
        }
        bets.sort_unstable();
        bets.dedup();
        Ok(bets)
    }

    /// Draw one pocket uniformly at random.
    pub fn spin<R: Rng + ?Sized>(&self, rng: &mut R) -> u8 {
        WHEEL_ORDER[rng.gen_range(0..POCKETS)]
    }
}

pub fn is_win(outcome: u8, bets: &[u8]) -> bool {
    bets.contains(&outcome)
}

/// Chance that a single spin lands inside `bets`. Repeats and numbers off
/// the wheel count for nothing.
pub fn win_probability(bets: &[u8]) -> f64 {
    let mut covered = [false; POCKETS];
    for &n in bets {
        if let Some(slot) = covered.get_mut(n as usize) {
            *slot = true;
        }
    }
    covered.iter().filter(|&&c| c).count() as f64 / POCKETS as f64
}
