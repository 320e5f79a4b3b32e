use crate::constants::{MANAGER_SEED, ROUND_SEED};
use crate::events::{Pulled, RoundResolved};
use crate::state::{Manager, Round, Side};
use anchor_lang::prelude::*;

/// Anyone may pull. The manager is writable because the pull that decides the
/// round also opens the next round id.
#[derive(Accounts)]
pub struct Pull<'info> {
    #[account(
        mut,
        seeds = [ROUND_SEED, round.round_id.to_be_bytes().as_ref()],
        bump = round.bump
    )]
    pub round: Account<'info, Round>,

    #[account(
        mut,
        seeds = [MANAGER_SEED],
        bump = manager.bump
    )]
    pub manager: Account<'info, Manager>,
}

pub fn handler(ctx: Context<Pull>, side: Side) -> Result<()> {
    let round = &mut ctx.accounts.round;
    let resolved = round.pull(side)?;

    emit!(Pulled {
        round: round.key(),
        round_id: round.round_id,
        side,
        position: round.position,
    });

    if let Some(winner) = resolved {
        let next_round_id = round.next_round_id();
        if let Some(next) = next_round_id {
            ctx.accounts.manager.advance(next)?;
        }

        msg!(
            "Round {} resolved, {:?} wins at position {}",
            round.round_id,
            winner,
            round.position
        );
        emit!(RoundResolved {
            round: round.key(),
            round_id: round.round_id,
            winner,
            left_pool: round.left_pool,
            right_pool: round.right_pool,
            next_round_id,
        });
    }
    Ok(())
}
