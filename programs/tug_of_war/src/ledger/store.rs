use super::Rejection;
use anchor_lang::prelude::*;
use std::result::Result;
use std::collections::BTreeMap;

/// Raw bytes and balance at one address.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoredAccount {
    pub lamports: u64,
    /// Program that may write `data` and debit `lamports`.
    pub owner: Pubkey,
    pub data: Vec<u8>,
    /// Bumped on every committed write. Absent accounts are at version 0.
    pub version: u64,
    /// Closed records stay behind as tombstones holding their final state.
    pub closed: bool,
}

impl StoredAccount {
    pub fn wallet(lamports: u64) -> Self {
        StoredAccount {
            lamports,
            owner: anchor_lang::system_program::ID,
            data: Vec::new(),
            version: 0,
            closed: false,
        }
    }

    pub fn is_wallet(&self) -> bool {
        self.owner == anchor_lang::system_program::ID && self.data.is_empty()
    }

    pub fn is_program_record(&self) -> bool {
        self.owner == crate::ID && !self.closed
    }

    pub fn decode<T: AccountDeserialize>(&self, address: &Pubkey) -> Result<T, Rejection> {
        T::try_deserialize(&mut self.data.as_slice()).map_err(|_| Rejection::Corrupt(*address))
    }
}

/// The arena of every account the ledger knows about, keyed by address.
#[derive(Clone, Debug, Default)]
pub struct AccountStore {
    accounts: BTreeMap<Pubkey, StoredAccount>,
}

impl AccountStore {
    pub fn get(&self, address: &Pubkey) -> Option<&StoredAccount> {
        self.accounts.get(address)
    }

    pub fn version(&self, address: &Pubkey) -> u64 {
        self.accounts.get(address).map_or(0, |account| account.version)
    }

    pub fn lamports(&self, address: &Pubkey) -> u64 {
        self.accounts.get(address).map_or(0, |account| account.lamports)
    }

    pub fn is_closed(&self, address: &Pubkey) -> bool {
        self.accounts.get(address).is_some_and(|account| account.closed)
    }

    /// Typed view of a record, tombstones included. `None` if nothing was ever
    /// written there.
    pub fn read<T: AccountDeserialize>(&self, address: &Pubkey) -> Result<Option<T>, Rejection> {
        self.accounts
            .get(address)
            .filter(|account| !account.data.is_empty())
            .map(|account| account.decode(address))
            .transpose()
    }

    pub fn total_lamports(&self) -> u128 {
        self.accounts
            .values()
            .map(|account| u128::from(account.lamports))
            .sum()
    }

    pub(crate) fn credit(&mut self, address: &Pubkey, lamports: u64) {
        let account = self
            .accounts
            .entry(*address)
            .or_insert_with(|| StoredAccount::wallet(0));
        account.lamports = account.lamports.saturating_add(lamports);
        account.version += 1;
    }

    pub(crate) fn put(&mut self, address: Pubkey, account: StoredAccount) {
        self.accounts.insert(address, account);
    }
}
