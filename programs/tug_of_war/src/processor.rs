//! Action dispatch for the in-process ledger.
//!
//! Every action reads its records out of a [`WorkingSet`], runs the same state
//! transitions the on-chain instructions run, and writes the results back.
//! Addresses the caller supplied are always re-derived and compared.

use crate::constants::DEFAULT_PULL_LIMIT;
use crate::errors::TugError;
use crate::events::{BetClaimed, BetPlaced, ManagerInitialized, Pulled, RoundCreated, RoundResolved};
use crate::ledger::{Rejection, WorkingSet};
use crate::pda;
use crate::state::{Bet, Manager, Round, Side};
use anchor_lang::prelude::*;
use std::result::Result;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    InitializeManager { pull_limit: Option<u16> },
    CreateRound { round_id: u16 },
    Pull { round_id: u16, side: Side },
    PlaceBet { round_id: u16, side: Side, amount: u64 },
    /// `side` names which of the claimant's bets is being claimed.
    ClaimBet { round_id: u16, side: Side },
}

impl Action {
    /// Addresses the action touches, in the order the processor expects them.
    pub fn accounts(&self, signer: Option<&Pubkey>) -> Vec<Pubkey> {
        let signer = signer.copied().unwrap_or_default();
        match *self {
            Action::InitializeManager { .. } => vec![pda::manager_address().0],
            Action::CreateRound { round_id } => {
                vec![pda::manager_address().0, pda::round_address(round_id).0]
            }
            Action::Pull { round_id, .. } => {
                vec![pda::round_address(round_id).0, pda::manager_address().0]
            }
            Action::PlaceBet { round_id, side, .. } | Action::ClaimBet { round_id, side } => {
                let round = pda::round_address(round_id).0;
                vec![round, pda::bet_address(&round, &signer, side).0]
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TugEvent {
    ManagerInitialized(ManagerInitialized),
    RoundCreated(RoundCreated),
    Pulled(Pulled),
    RoundResolved(RoundResolved),
    BetPlaced(BetPlaced),
    BetClaimed(BetClaimed),
}

pub fn process(ws: &mut WorkingSet, action: &Action) -> Result<Vec<TugEvent>, Rejection> {
    match *action {
        Action::InitializeManager { pull_limit } => initialize_manager(ws, pull_limit),
        Action::CreateRound { round_id } => create_round(ws, round_id),
        Action::Pull { round_id, side } => pull(ws, round_id, side),
        Action::PlaceBet {
            round_id,
            side,
            amount,
        } => place_bet(ws, round_id, side, amount),
        Action::ClaimBet { round_id, side } => claim_bet(ws, round_id, side),
    }
}

fn initialize_manager(
    ws: &mut WorkingSet,
    pull_limit: Option<u16>,
) -> Result<Vec<TugEvent>, Rejection> {
    let [manager_address] = ws.accounts::<1>("initialize_manager")?;
    let payer = ws.signer()?;

    let (expected, bump) = pda::manager_address();
    check_address(&manager_address, &expected)?;
    if ws.exists(&manager_address)? {
        return Err(TugError::AlreadyInitialized.into());
    }

    let pull_limit = pull_limit.unwrap_or(DEFAULT_PULL_LIMIT);
    let mut manager = Manager::default();
    manager.initialize(pull_limit, bump)?;
    ws.create(&manager_address, &payer, &manager, Manager::LEN)?;

    ws.log(format!("Tug manager initialized, pull limit {pull_limit}"));
    Ok(vec![TugEvent::ManagerInitialized(ManagerInitialized {
        manager: manager_address,
        pull_limit,
    })])
}

fn create_round(ws: &mut WorkingSet, round_id: u16) -> Result<Vec<TugEvent>, Rejection> {
    let [manager_address, round_address] = ws.accounts::<2>("create_round")?;
    let authority = ws.signer()?;
    let manager = load_manager(ws, &manager_address)?;

    let (expected, bump) = pda::round_address(round_id);
    check_address(&round_address, &expected)?;
    if ws.exists(&round_address)? {
        return Err(TugError::RoundAlreadyExists.into());
    }
    manager.require_active(round_id)?;

    let mut round = Round::default();
    round.open(round_id, authority, manager.pull_limit, bump)?;
    ws.create(&round_address, &authority, &round, Round::LEN)?;

    ws.log(format!("Round {round_id} created, limit {}", round.limit));
    Ok(vec![TugEvent::RoundCreated(RoundCreated {
        round: round_address,
        round_id,
        authority,
        limit: round.limit,
    })])
}

fn pull(ws: &mut WorkingSet, round_id: u16, side: Side) -> Result<Vec<TugEvent>, Rejection> {
    let [round_address, manager_address] = ws.accounts::<2>("pull")?;
    let mut round = load_round(ws, &round_address, round_id)?;
    let mut manager = load_manager(ws, &manager_address)?;

    let resolved = round.pull(side)?;
    ws.save(&round_address, &round)?;

    let mut events = vec![TugEvent::Pulled(Pulled {
        round: round_address,
        round_id,
        side,
        position: round.position,
    })];

    if let Some(winner) = resolved {
        let next_round_id = round.next_round_id();
        if let Some(next) = next_round_id {
            manager.advance(next)?;
            ws.save(&manager_address, &manager)?;
        }

        ws.log(format!(
            "Round {round_id} resolved, {winner:?} wins at position {}",
            round.position
        ));
        events.push(TugEvent::RoundResolved(RoundResolved {
            round: round_address,
            round_id,
            winner,
            left_pool: round.left_pool,
            right_pool: round.right_pool,
            next_round_id,
        }));
    }
    Ok(events)
}

fn place_bet(
    ws: &mut WorkingSet,
    round_id: u16,
    side: Side,
    amount: u64,
) -> Result<Vec<TugEvent>, Rejection> {
    let [round_address, bet_address] = ws.accounts::<2>("place_bet")?;
    let payer = ws.signer()?;
    let mut round = load_round(ws, &round_address, round_id)?;
    round.stake(side, amount)?;

    let (expected, bump) = pda::bet_address(&round_address, &payer, side);
    check_address(&bet_address, &expected)?;

    let mut bet = match ws.load::<Bet>(&bet_address)? {
        Some(bet) => bet,
        None => {
            let bet = Bet::new(payer, round_id, side, bump);
            ws.create(&bet_address, &payer, &bet, Bet::LEN)?;
            bet
        }
    };
    if bet.round_id != round_id || bet.side != side {
        return Err(TugError::InvalidAddress.into());
    }
    let total_staked = bet.accumulate(&payer, amount)?;

    ws.transfer(&payer, &round_address, amount)?;
    ws.save(&bet_address, &bet)?;
    ws.save(&round_address, &round)?;

    ws.log(format!("Bet of {amount} on {side:?} in round {round_id}"));
    Ok(vec![TugEvent::BetPlaced(BetPlaced {
        round: round_address,
        bet: bet_address,
        owner: payer,
        side,
        amount,
        total_staked,
    })])
}

fn claim_bet(ws: &mut WorkingSet, round_id: u16, side: Side) -> Result<Vec<TugEvent>, Rejection> {
    let [round_address, bet_address] = ws.accounts::<2>("claim_bet")?;
    let claimant = ws.signer()?;
    let round = load_round(ws, &round_address, round_id)?;
    let winner = round.require_resolved()?;

    let mut bet = ws
        .load::<Bet>(&bet_address)?
        .ok_or(Rejection::from(TugError::BetNotFound))?;
    if bet.owner != claimant {
        return Err(TugError::Unauthorized.into());
    }
    let (expected, _) = pda::bet_address(&round_address, &bet.owner, bet.side);
    check_address(&bet_address, &expected)?;
    if bet.round_id != round_id || bet.side != side {
        return Err(TugError::InvalidAddress.into());
    }
    // losing stakes fund the winners and are never paid back
    if bet.side != winner {
        return Err(TugError::BetNotFound.into());
    }

    bet.mark_claimed()?;
    let payout = round.payout(bet.amount)?;
    ws.release_escrow(&round_address, &claimant, payout)?;
    ws.save(&bet_address, &bet)?;
    ws.close(&bet_address, &claimant)?;

    ws.log(format!(
        "Round {round_id} claim: stake {} paid {payout}",
        bet.amount
    ));
    Ok(vec![TugEvent::BetClaimed(BetClaimed {
        round: round_address,
        bet: bet_address,
        owner: claimant,
        side: bet.side,
        stake: bet.amount,
        payout,
    })])
}

fn check_address(supplied: &Pubkey, expected: &Pubkey) -> Result<(), TugError> {
    if supplied != expected {
        return Err(TugError::InvalidAddress);
    }
    Ok(())
}

fn load_manager(ws: &WorkingSet, address: &Pubkey) -> Result<Manager, Rejection> {
    check_address(address, &pda::manager_address().0)?;
    ws.load::<Manager>(address)?
        .ok_or(Rejection::from(TugError::ManagerNotInitialized))
}

fn load_round(ws: &WorkingSet, address: &Pubkey, round_id: u16) -> Result<Round, Rejection> {
    check_address(address, &pda::round_address(round_id).0)?;
    ws.load::<Round>(address)?
        .ok_or(Rejection::from(TugError::RoundNotFound))
}
