use crate::constants::{BET_SEED, ROUND_SEED};
use crate::errors::TugError;
use crate::events::BetClaimed;
use crate::state::{Bet, Round};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct ClaimBet<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    #[account(
        mut,
        seeds = [ROUND_SEED, round.round_id.to_be_bytes().as_ref()],
        bump = round.bump,
        constraint = round.is_resolved() @ TugError::RoundOpen
    )]
    pub round: Account<'info, Round>,

    /// Losing-side bets stay in escrow: they fail the winner constraint and
    /// are never closed.
    #[account(
        mut,
        close = payer,
        seeds = [BET_SEED, round.key().as_ref(), payer.key().as_ref(), &[bet.side.seed()]],
        bump = bet.bump,
        constraint = bet.owner == payer.key() @ TugError::Unauthorized,
        constraint = bet.round_id == round.round_id @ TugError::InvalidAddress,
        constraint = round.winner == Some(bet.side) @ TugError::BetNotFound,
        constraint = !bet.claimed @ TugError::AlreadyClaimed
    )]
    pub bet: Account<'info, Bet>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<ClaimBet>) -> Result<()> {
    let stake = ctx.accounts.bet.amount;
    let payout = ctx.accounts.round.payout(stake)?;

    let round_info = ctx.accounts.round.to_account_info();
    let reserve = Rent::get()?.minimum_balance(round_info.data_len());
    let escrow = round_info.lamports().saturating_sub(reserve);
    require!(escrow >= payout, TugError::EscrowShortfall);

    // flip claimed before moving lamports
    ctx.accounts.bet.mark_claimed()?;

    ctx.accounts.round.sub_lamports(payout)?;
    ctx.accounts.payer.add_lamports(payout)?;

    let round = &ctx.accounts.round;
    let bet = &ctx.accounts.bet;
    msg!(
        "Round {} claim: stake {} paid {}",
        round.round_id,
        stake,
        payout
    );
    emit!(BetClaimed {
        round: round.key(),
        bet: bet.key(),
        owner: bet.owner,
        side: bet.side,
        stake,
        payout,
    });
    Ok(())
}
