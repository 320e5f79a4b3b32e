use crate::constants::{MANAGER_SEED, ROUND_SEED};
use crate::events::RoundCreated;
use crate::state::{Manager, Round};
use anchor_lang::prelude::*;

#[derive(Accounts)]
#[instruction(round_id: u16)]
pub struct CreateRound<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    #[account(
        seeds = [MANAGER_SEED],
        bump = manager.bump
    )]
    pub manager: Account<'info, Manager>,

    #[account(
        init,
        payer = payer,
        space = Round::LEN,
        seeds = [ROUND_SEED, round_id.to_be_bytes().as_ref()],
        bump
    )]
    pub round: Account<'info, Round>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<CreateRound>, round_id: u16) -> Result<()> {
    let manager = &ctx.accounts.manager;
    manager.require_active(round_id)?;

    let authority = ctx.accounts.payer.key();
    let round = &mut ctx.accounts.round;
    round.open(round_id, authority, manager.pull_limit, ctx.bumps.round)?;

    msg!("Round {} created, limit {}", round_id, round.limit);
    emit!(RoundCreated {
        round: round.key(),
        round_id,
        authority,
        limit: round.limit,
    });
    Ok(())
}
