use crate::constants::{BET_SEED, ROUND_SEED};
use crate::errors::TugError;
use crate::events::BetPlaced;
use crate::state::{Bet, Round, Side};
use anchor_lang::prelude::*;
use anchor_lang::system_program::{transfer, Transfer};

#[derive(Accounts)]
#[instruction(side: Side)]
pub struct PlaceBet<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    /// Holds the escrowed stakes on top of its own rent reserve.
    #[account(
        mut,
        seeds = [ROUND_SEED, round.round_id.to_be_bytes().as_ref()],
        bump = round.bump
    )]
    pub round: Account<'info, Round>,

    #[account(
        init_if_needed,
        payer = payer,
        space = Bet::LEN,
        seeds = [BET_SEED, round.key().as_ref(), payer.key().as_ref(), &[side.seed()]],
        bump
    )]
    pub bet: Account<'info, Bet>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<PlaceBet>, side: Side, amount: u64) -> Result<()> {
    let payer = ctx.accounts.payer.key();

    ctx.accounts.round.stake(side, amount)?;
    let round_id = ctx.accounts.round.round_id;

    let bet = &mut ctx.accounts.bet;
    if bet.is_vacant() {
        **bet = Bet::new(payer, round_id, side, ctx.bumps.bet);
    }
    require!(
        bet.round_id == round_id && bet.side == side,
        TugError::InvalidAddress
    );
    let total_staked = bet.accumulate(&payer, amount)?;

    // move SOL from the bettor into the round's escrow
    transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            Transfer {
                from: ctx.accounts.payer.to_account_info(),
                to: ctx.accounts.round.to_account_info(),
            },
        ),
        amount,
    )?;

    msg!("Bet of {} on {:?} in round {}", amount, side, round_id);
    emit!(BetPlaced {
        round: ctx.accounts.round.key(),
        bet: ctx.accounts.bet.key(),
        owner: payer,
        side,
        amount,
        total_staked,
    });
    Ok(())
}
