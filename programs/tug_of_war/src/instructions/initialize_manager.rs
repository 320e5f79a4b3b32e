use crate::constants::{DEFAULT_PULL_LIMIT, MANAGER_SEED};
use crate::events::ManagerInitialized;
use crate::state::Manager;
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct InitializeManager<'info> {
    #[account(
        init,
        payer = payer,
        space = Manager::LEN,
        seeds = [MANAGER_SEED],
        bump
    )]
    pub manager: Account<'info, Manager>,

    #[account(mut)]
    pub payer: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<InitializeManager>, pull_limit: Option<u16>) -> Result<()> {
    let pull_limit = pull_limit.unwrap_or(DEFAULT_PULL_LIMIT);

    let manager = &mut ctx.accounts.manager;
    manager.initialize(pull_limit, ctx.bumps.manager)?;

    msg!("Tug manager initialized, pull limit {}", pull_limit);
    emit!(ManagerInitialized {
        manager: manager.key(),
        pull_limit,
    });
    Ok(())
}
