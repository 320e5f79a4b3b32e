use crate::state::Side;
use anchor_lang::prelude::*;

#[event]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ManagerInitialized {
    pub manager: Pubkey,
    pub pull_limit: u16,
}

#[event]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoundCreated {
    pub round: Pubkey,
    pub round_id: u16,
    pub authority: Pubkey,
    pub limit: u16,
}

#[event]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pulled {
    pub round: Pubkey,
    pub round_id: u16,
    pub side: Side,
    pub position: i32,
}

#[event]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoundResolved {
    pub round: Pubkey,
    pub round_id: u16,
    pub winner: Side,
    pub left_pool: u64,
    pub right_pool: u64,
    /// `None` when this was the last round id.
    pub next_round_id: Option<u16>,
}

#[event]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BetPlaced {
    pub round: Pubkey,
    pub bet: Pubkey,
    pub owner: Pubkey,
    pub side: Side,
    pub amount: u64,
    pub total_staked: u64,
}

#[event]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BetClaimed {
    pub round: Pubkey,
    pub bet: Pubkey,
    pub owner: Pubkey,
    pub side: Side,
    pub stake: u64,
    pub payout: u64,
}
