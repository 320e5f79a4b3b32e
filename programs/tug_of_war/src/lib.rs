use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod pda;
pub mod state;

#[cfg(not(target_os = "solana"))]
pub mod ledger;
#[cfg(not(target_os = "solana"))]
pub mod processor;

pub use instructions::*;
pub use state::Side;

declare_id!("TugofWar11111111111111111111111111111111111");

#[program]
pub mod tug_of_war {
    use super::*;

    pub fn initialize_manager(
        ctx: Context<InitializeManager>,
        pull_limit: Option<u16>,
    ) -> Result<()> {
        instructions::initialize_manager::handler(ctx, pull_limit)
    }

    pub fn create_round(ctx: Context<CreateRound>, round_id: u16) -> Result<()> {
        instructions::create_round::handler(ctx, round_id)
    }

    pub fn pull_left(ctx: Context<Pull>) -> Result<()> {
        instructions::pull::handler(ctx, Side::Left)
    }

    pub fn pull_right(ctx: Context<Pull>) -> Result<()> {
        instructions::pull::handler(ctx, Side::Right)
    }

    pub fn place_bet(ctx: Context<PlaceBet>, side: Side, amount: u64) -> Result<()> {
        instructions::place_bet::handler(ctx, side, amount)
    }

    pub fn claim_bet(ctx: Context<ClaimBet>) -> Result<()> {
        instructions::claim_bet::handler(ctx)
    }
}
