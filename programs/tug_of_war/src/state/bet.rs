use super::Side;
use crate::errors::TugError;
use anchor_lang::prelude::*;
use std::result::Result;

/// Stake of one owner on one side of one round. Re-betting the same side adds
/// to the existing record.
#[account]
#[derive(InitSpace, Debug, PartialEq, Eq)]
pub struct Bet {
    pub owner: Pubkey,
    pub round_id: u16,
    pub side: Side,
    pub amount: u64,
    pub claimed: bool,
    pub bump: u8,
}

impl Bet {
    pub const LEN: usize = crate::constants::DISCRIMINATOR_LEN + Bet::INIT_SPACE;

    pub fn new(owner: Pubkey, round_id: u16, side: Side, bump: u8) -> Self {
        Bet {
            owner,
            round_id,
            side,
            amount: 0,
            claimed: false,
            bump,
        }
    }

    /// A zeroed record freshly allocated by `init_if_needed`.
    pub fn is_vacant(&self) -> bool {
        self.owner == Pubkey::default() && self.amount == 0
    }

    pub fn accumulate(&mut self, owner: &Pubkey, amount: u64) -> Result<u64, TugError> {
        if self.owner != *owner {
            return Err(TugError::Unauthorized);
        }
        if self.claimed {
            return Err(TugError::AlreadyClaimed);
        }
        if amount == 0 {
            return Err(TugError::ZeroAmount);
        }
        self.amount = self
            .amount
            .checked_add(amount)
            .ok_or(TugError::MathOverflow)?;
        Ok(self.amount)
    }

    pub fn mark_claimed(&mut self) -> Result<(), TugError> {
        if self.claimed {
            return Err(TugError::AlreadyClaimed);
        }
        self.claimed = true;
        Ok(())
    }
}
