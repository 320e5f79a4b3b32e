use super::Side;
use crate::errors::TugError;
use anchor_lang::prelude::*;
use std::result::Result;

#[derive(AnchorSerialize, AnchorDeserialize, InitSpace, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RoundStatus {
    #[default]
    Open,
    Resolved,
}

/// One game of tug of war and the two betting pools riding on it.
///
/// The Round's lamports above its rent reserve are the escrow backing every
/// bet placed on it.
#[account]
#[derive(InitSpace, Debug, Default, PartialEq, Eq)]
pub struct Round {
    pub round_id: u16,
    pub authority: Pubkey,
    /// Signed displacement from center, positive means the right side is ahead.
    pub position: i32,
    pub limit: u16,
    pub left_pool: u64,
    pub right_pool: u64,
    pub status: RoundStatus,
    pub winner: Option<Side>,
    pub bump: u8,
}

impl Round {
    pub const LEN: usize = crate::constants::DISCRIMINATOR_LEN + Round::INIT_SPACE;

    pub fn open(
        &mut self,
        round_id: u16,
        authority: Pubkey,
        limit: u16,
        bump: u8,
    ) -> Result<(), TugError> {
        if limit == 0 {
            return Err(TugError::InvalidPullLimit);
        }
        self.round_id = round_id;
        self.authority = authority;
        self.position = 0;
        self.limit = limit;
        self.left_pool = 0;
        self.right_pool = 0;
        self.status = RoundStatus::Open;
        self.winner = None;
        self.bump = bump;
        Ok(())
    }

    pub fn is_open(&self) -> bool {
        self.status == RoundStatus::Open
    }

    pub fn is_resolved(&self) -> bool {
        self.status == RoundStatus::Resolved
    }

    pub fn require_open(&self) -> Result<(), TugError> {
        if !self.is_open() {
            return Err(TugError::RoundResolved);
        }
        Ok(())
    }

    /// Winning side of a resolved round.
    pub fn require_resolved(&self) -> Result<Side, TugError> {
        match (self.status, self.winner) {
            (RoundStatus::Resolved, Some(winner)) => Ok(winner),
            _ => Err(TugError::RoundOpen),
        }
    }

    /// Moves the rope one unit toward `side`. Returns the winner when this pull
    /// reaches the limit and resolves the round.
    pub fn pull(&mut self, side: Side) -> Result<Option<Side>, TugError> {
        self.require_open()?;

        let position = self
            .position
            .checked_add(side.displacement())
            .ok_or(TugError::MathOverflow)?;
        self.position = position;

        if position.unsigned_abs() >= u32::from(self.limit) {
            self.status = RoundStatus::Resolved;
            self.winner = Some(side);
            return Ok(Some(side));
        }
        Ok(None)
    }

    /// Adds an escrowed stake to the pool of `side`.
    pub fn stake(&mut self, side: Side, amount: u64) -> Result<(), TugError> {
        self.require_open()?;
        if amount == 0 {
            return Err(TugError::ZeroAmount);
        }

        let pool = match side {
            Side::Left => &mut self.left_pool,
            Side::Right => &mut self.right_pool,
        };
        *pool = pool.checked_add(amount).ok_or(TugError::MathOverflow)?;
        Ok(())
    }

    pub fn pool(&self, side: Side) -> u64 {
        match side {
            Side::Left => self.left_pool,
            Side::Right => self.right_pool,
        }
    }

    pub fn total_pool(&self) -> Result<u64, TugError> {
        self.left_pool
            .checked_add(self.right_pool)
            .ok_or(TugError::MathOverflow)
    }

    /// Stake back plus a floor-rounded share of the losing pool proportional
    /// to the stake's weight in the winning pool.
    pub fn payout(&self, stake: u64) -> Result<u64, TugError> {
        let winner = self.require_resolved()?;
        let winning_pool = self.pool(winner);
        let losing_pool = self.pool(winner.opposite());

        // The claimant's own stake is part of the winning pool.
        if winning_pool == 0 || stake > winning_pool {
            return Err(TugError::EscrowShortfall);
        }

        let share = u128::from(stake)
            .checked_mul(u128::from(losing_pool))
            .ok_or(TugError::MathOverflow)?
            / u128::from(winning_pool);
        let share = u64::try_from(share).map_err(|_| TugError::MathOverflow)?;

        stake.checked_add(share).ok_or(TugError::MathOverflow)
    }

    /// `None` once round ids are exhausted. The round still resolves.
    pub fn next_round_id(&self) -> Option<u16> {
        self.round_id.checked_add(1)
    }
}
