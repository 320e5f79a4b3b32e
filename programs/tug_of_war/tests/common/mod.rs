//! Shared fixtures for driving the program through the in-process ledger.

#![allow(dead_code)]

use anchor_lang::prelude::{Pubkey, Rent};
use tug_of_war::ledger::{Ledger, Receipt, Rejection};
use tug_of_war::pda;
use tug_of_war::processor::Action;
use tug_of_war::state::{Bet, Manager, Round, Side};

pub const FUNDING: u64 = 10_000_000_000;

pub struct Harness {
    pub ledger: Ledger,
    pub admin: Pubkey,
}

impl Harness {
    /// Manager initialized with `limit` and round 0 open.
    pub fn new(limit: u16) -> Self {
        let mut ledger = Ledger::new();
        let admin = Pubkey::new_unique();
        ledger.airdrop(&admin, FUNDING);
        ledger
            .execute(
                Action::InitializeManager {
                    pull_limit: Some(limit),
                },
                Some(admin),
            )
            .unwrap();
        ledger
            .execute(Action::CreateRound { round_id: 0 }, Some(admin))
            .unwrap();
        Harness { ledger, admin }
    }

    pub fn wallet(&mut self) -> Pubkey {
        self.funded_wallet(FUNDING)
    }

    pub fn funded_wallet(&mut self, lamports: u64) -> Pubkey {
        let wallet = Pubkey::new_unique();
        self.ledger.airdrop(&wallet, lamports);
        wallet
    }

    pub fn pull(&mut self, round_id: u16, side: Side) -> Result<Receipt, Rejection> {
        self.ledger.execute(Action::Pull { round_id, side }, None)
    }

    pub fn pull_n(&mut self, round_id: u16, side: Side, times: usize) {
        for _ in 0..times {
            self.pull(round_id, side).unwrap();
        }
    }

    pub fn bet(
        &mut self,
        owner: Pubkey,
        round_id: u16,
        side: Side,
        amount: u64,
    ) -> Result<Receipt, Rejection> {
        self.ledger.execute(
            Action::PlaceBet {
                round_id,
                side,
                amount,
            },
            Some(owner),
        )
    }

    pub fn claim(&mut self, owner: Pubkey, round_id: u16, side: Side) -> Result<Receipt, Rejection> {
        self.ledger
            .execute(Action::ClaimBet { round_id, side }, Some(owner))
    }

    pub fn round(&self, round_id: u16) -> Round {
        self.ledger
            .store()
            .read::<Round>(&pda::round_address(round_id).0)
            .unwrap()
            .unwrap()
    }

    pub fn manager(&self) -> Manager {
        self.ledger
            .store()
            .read::<Manager>(&pda::manager_address().0)
            .unwrap()
            .unwrap()
    }

    pub fn bet_address(&self, round_id: u16, owner: &Pubkey, side: Side) -> Pubkey {
        pda::bet_address(&pda::round_address(round_id).0, owner, side).0
    }

    pub fn bet_record(&self, round_id: u16, owner: &Pubkey, side: Side) -> Option<Bet> {
        self.ledger
            .store()
            .read::<Bet>(&self.bet_address(round_id, owner, side))
            .unwrap()
    }

    pub fn balance(&self, owner: &Pubkey) -> u64 {
        self.ledger.store().lamports(owner)
    }

    /// Round lamports above its rent reserve.
    pub fn escrow(&self, round_id: u16) -> u64 {
        let address = pda::round_address(round_id).0;
        let account = self.ledger.store().get(&address).unwrap();
        account.lamports - self.ledger.rent().minimum_balance(account.data.len())
    }

    pub fn version(&self, address: &Pubkey) -> u64 {
        self.ledger.store().version(address)
    }
}

pub fn bet_rent() -> u64 {
    Rent::default().minimum_balance(Bet::LEN)
}
