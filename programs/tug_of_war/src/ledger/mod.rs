//! In-process ledger that hosts the program for tests and simulations.
//!
//! Records live in a versioned arena. Callers submit a [`UnitOfWork`] naming
//! the records it touches and the versions it observed; the ledger rejects it
//! if any of them moved, otherwise runs the action on private copies and
//! commits every change or none.

mod error;
mod history;
mod store;
mod unit;
mod working_set;

pub use error::Rejection;
pub use history::{CommitEntry, CommitLog, Hash};
pub use store::{AccountStore, StoredAccount};
pub use unit::{DeclaredAccount, UnitOfWork};
pub use working_set::WorkingSet;

use crate::processor::{self, Action, TugEvent};
use anchor_lang::prelude::*;
use std::result::Result;
use std::collections::BTreeSet;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Receipt {
    pub sequence: u64,
    pub digest: Hash,
    pub events: Vec<TugEvent>,
    pub logs: Vec<String>,
}

pub struct Ledger {
    store: AccountStore,
    history: CommitLog,
    rent: Rent,
}

impl Default for Ledger {
    fn default() -> Self {
        Ledger::new()
    }
}

impl Ledger {
    pub fn new() -> Self {
        Ledger::with_rent(Rent::default())
    }

    pub fn with_rent(rent: Rent) -> Self {
        Ledger {
            store: AccountStore::default(),
            history: CommitLog::default(),
            rent,
        }
    }

    pub fn store(&self) -> &AccountStore {
        &self.store
    }

    pub fn history(&self) -> &CommitLog {
        &self.history
    }

    pub fn rent(&self) -> &Rent {
        &self.rent
    }

    pub fn airdrop(&mut self, to: &Pubkey, lamports: u64) {
        self.store.credit(to, lamports);
    }

    /// Installs a program record as part of the ledger's starting state,
    /// funded with exactly its rent reserve.
    pub fn genesis<T: AccountSerialize>(
        &mut self,
        address: Pubkey,
        record: &T,
        space: usize,
    ) -> Result<(), Rejection> {
        let data = working_set::encode(&address, record, space)?;
        let version = self.store.version(&address) + 1;
        self.store.put(
            address,
            StoredAccount {
                lamports: self.rent.minimum_balance(space),
                owner: crate::ID,
                data,
                version,
                closed: false,
            },
        );
        Ok(())
    }

    /// Builds a unit of work against the current committed state, the way a
    /// relay does: derive every address the action touches and note its
    /// version.
    pub fn prepare(&self, action: Action, signer: Option<Pubkey>) -> UnitOfWork {
        let addresses = action.accounts(signer.as_ref());
        self.prepare_accounts(action, signer, addresses)
    }

    /// Like [`Ledger::prepare`] but with caller-chosen addresses.
    pub fn prepare_accounts(
        &self,
        action: Action,
        signer: Option<Pubkey>,
        addresses: Vec<Pubkey>,
    ) -> UnitOfWork {
        let accounts = addresses
            .into_iter()
            .map(|address| DeclaredAccount {
                address,
                observed_version: self.store.version(&address),
            })
            .collect();

        UnitOfWork {
            action,
            signer,
            accounts,
        }
    }

    /// Applies `unit` in full or not at all.
    pub fn submit(&mut self, unit: UnitOfWork) -> Result<Receipt, Rejection> {
        let mut seen = BTreeSet::new();
        for declared in &unit.accounts {
            if !seen.insert(declared.address) {
                return Err(Rejection::DuplicateAccount(declared.address));
            }
            let committed = self.store.version(&declared.address);
            if committed != declared.observed_version {
                return Err(Rejection::Stale {
                    address: declared.address,
                    observed: declared.observed_version,
                    committed,
                });
            }
        }

        let mut working_set =
            WorkingSet::open(&self.store, self.rent.clone(), unit.signer, unit.addresses());
        let events = processor::process(&mut working_set, &unit.action)?;
        let (changes, logs) = working_set.finish();

        let writes = changes
            .iter()
            .map(|(address, account)| (*address, account.version + 1))
            .collect();
        let entry = self.history.next_entry(unit.action, unit.signer, writes)?;

        for (address, mut account) in changes {
            account.version += 1;
            self.store.put(address, account);
        }

        let receipt = Receipt {
            sequence: entry.sequence,
            digest: entry.digest,
            events,
            logs,
        };
        self.history.append(entry);
        Ok(receipt)
    }

    /// `prepare` then `submit`.
    pub fn execute(&mut self, action: Action, signer: Option<Pubkey>) -> Result<Receipt, Rejection> {
        let unit = self.prepare(action, signer);
        self.submit(unit)
    }
}
