pub mod bet;
pub mod manager;
pub mod round;

pub use bet::*;
pub use manager::*;
pub use round::*;

use anchor_lang::prelude::*;

/// The two ends of the rope. Also the side a bet backs and the side that wins.
#[derive(AnchorSerialize, AnchorDeserialize, InitSpace, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Byte used in the bet address seeds.
    pub fn seed(self) -> u8 {
        match self {
            Side::Left => 0,
            Side::Right => 1,
        }
    }

    /// Unit displacement one pull applies to the position.
    pub fn displacement(self) -> i32 {
        match self {
            Side::Left => -1,
            Side::Right => 1,
        }
    }

    pub fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}
