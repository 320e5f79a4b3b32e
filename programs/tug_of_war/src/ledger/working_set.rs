use super::{AccountStore, Rejection, StoredAccount};
use crate::errors::TugError;
use anchor_lang::prelude::*;
use std::result::Result;
use std::collections::{BTreeMap, BTreeSet};

/// Private copies of the accounts one unit of work may touch.
///
/// The processor mutates these freely; the ledger writes them back only if the
/// whole action succeeds.
pub struct WorkingSet {
    signer: Option<Pubkey>,
    declared: Vec<Pubkey>,
    accounts: BTreeMap<Pubkey, Option<StoredAccount>>,
    dirty: BTreeSet<Pubkey>,
    rent: Rent,
    logs: Vec<String>,
}

impl WorkingSet {
    pub(crate) fn open(
        store: &AccountStore,
        rent: Rent,
        signer: Option<Pubkey>,
        declared: Vec<Pubkey>,
    ) -> Self {
        let accounts = declared
            .iter()
            .chain(signer.iter())
            .map(|address| (*address, store.get(address).cloned()))
            .collect();

        WorkingSet {
            signer,
            declared,
            accounts,
            dirty: BTreeSet::new(),
            rent,
            logs: Vec::new(),
        }
    }

    pub fn signer(&self) -> Result<Pubkey, TugError> {
        self.signer.ok_or(TugError::MissingSigner)
    }

    /// The declared addresses, in the order the action defines them.
    pub fn accounts<const N: usize>(&self, action: &'static str) -> Result<[Pubkey; N], Rejection> {
        <[Pubkey; N]>::try_from(self.declared.as_slice()).map_err(|_| Rejection::AccountCount {
            action,
            expected: N,
            supplied: self.declared.len(),
        })
    }

    fn slot(&self, address: &Pubkey) -> Result<Option<&StoredAccount>, Rejection> {
        self.accounts
            .get(address)
            .map(Option::as_ref)
            .ok_or(Rejection::Undeclared(*address))
    }

    fn slot_mut(&mut self, address: &Pubkey) -> Result<&mut Option<StoredAccount>, Rejection> {
        let slot = self
            .accounts
            .get_mut(address)
            .ok_or(Rejection::Undeclared(*address))?;
        self.dirty.insert(*address);
        Ok(slot)
    }

    pub fn exists(&self, address: &Pubkey) -> Result<bool, Rejection> {
        Ok(self
            .slot(address)?
            .is_some_and(|account| !account.data.is_empty()))
    }

    /// Decoded record at `address`, tombstones included.
    pub fn load<T: AccountDeserialize>(&self, address: &Pubkey) -> Result<Option<T>, Rejection> {
        match self.slot(address)? {
            Some(account) if !account.data.is_empty() => account.decode(address).map(Some),
            _ => Ok(None),
        }
    }

    /// Allocates a program record funded by `payer` with the rent-exempt
    /// minimum for `space` bytes.
    pub fn create<T: AccountSerialize>(
        &mut self,
        address: &Pubkey,
        payer: &Pubkey,
        record: &T,
        space: usize,
    ) -> Result<(), Rejection> {
        if self.exists(address)? {
            return Err(TugError::AlreadyInitialized.into());
        }
        let data = encode(address, record, space)?;
        let reserve = self.rent.minimum_balance(space);
        self.debit_wallet(payer, reserve)?;

        let slot = self.slot_mut(address)?;
        // lamports sent to the address before it was allocated stay with it
        let lamports = slot
            .as_ref()
            .map_or(0, |account| account.lamports)
            .checked_add(reserve)
            .ok_or(TugError::MathOverflow)?;
        let version = slot.as_ref().map_or(0, |account| account.version);
        *slot = Some(StoredAccount {
            lamports,
            owner: crate::ID,
            data,
            version,
            closed: false,
        });
        Ok(())
    }

    /// Rewrites the record at `address` in place.
    pub fn save<T: AccountSerialize>(&mut self, address: &Pubkey, record: &T) -> Result<(), Rejection> {
        let slot = self.slot_mut(address)?;
        let account = slot
            .as_mut()
            .filter(|account| account.owner == crate::ID)
            .ok_or(Rejection::Corrupt(*address))?;
        account.data = encode(address, record, account.data.len())?;
        Ok(())
    }

    /// System transfer out of a wallet.
    pub fn transfer(&mut self, from: &Pubkey, to: &Pubkey, amount: u64) -> Result<(), Rejection> {
        self.debit_wallet(from, amount)?;
        self.credit(to, amount)
    }

    /// Pays out of a program record's escrow, never touching its rent reserve.
    pub fn release_escrow(
        &mut self,
        escrow: &Pubkey,
        to: &Pubkey,
        amount: u64,
    ) -> Result<(), Rejection> {
        let rent = self.rent.clone();
        let slot = self.slot_mut(escrow)?;
        let account = slot
            .as_mut()
            .filter(|account| account.is_program_record())
            .ok_or(TugError::EscrowShortfall)?;
        let available = account
            .lamports
            .saturating_sub(rent.minimum_balance(account.data.len()));
        if available < amount {
            return Err(TugError::EscrowShortfall.into());
        }
        account.lamports -= amount;
        self.credit(to, amount)
    }

    /// Returns every lamport of the record to `destination` and leaves a
    /// tombstone behind.
    pub fn close(&mut self, address: &Pubkey, destination: &Pubkey) -> Result<(), Rejection> {
        let slot = self.slot_mut(address)?;
        let account = slot
            .as_mut()
            .filter(|account| account.is_program_record())
            .ok_or(Rejection::Corrupt(*address))?;
        let lamports = std::mem::take(&mut account.lamports);
        account.closed = true;
        self.credit(destination, lamports)
    }

    pub fn log(&mut self, message: impl Into<String>) {
        self.logs.push(message.into());
    }

    /// Modified accounts and the log lines produced while processing.
    pub(crate) fn finish(self) -> (BTreeMap<Pubkey, StoredAccount>, Vec<String>) {
        let mut accounts = self.accounts;
        let changes = self
            .dirty
            .into_iter()
            .filter_map(|address| {
                accounts
                    .remove(&address)
                    .flatten()
                    .map(|account| (address, account))
            })
            .collect();
        (changes, self.logs)
    }

    fn debit_wallet(&mut self, address: &Pubkey, amount: u64) -> Result<(), Rejection> {
        let slot = self.slot_mut(address)?;
        let account = slot
            .as_mut()
            .filter(|account| account.is_wallet())
            .ok_or(TugError::InsufficientFunds)?;
        account.lamports = account
            .lamports
            .checked_sub(amount)
            .ok_or(TugError::InsufficientFunds)?;
        Ok(())
    }

    fn credit(&mut self, address: &Pubkey, amount: u64) -> Result<(), Rejection> {
        let slot = self.slot_mut(address)?;
        let account = slot.get_or_insert_with(|| StoredAccount::wallet(0));
        account.lamports = account
            .lamports
            .checked_add(amount)
            .ok_or(TugError::MathOverflow)?;
        Ok(())
    }
}

pub(super) fn encode<T: AccountSerialize>(address: &Pubkey, record: &T, space: usize) -> Result<Vec<u8>, Rejection> {
    let mut data = Vec::with_capacity(space);
    record
        .try_serialize(&mut data)
        .map_err(|_| Rejection::Corrupt(*address))?;
    if data.len() > space {
        return Err(Rejection::Corrupt(*address));
    }
    data.resize(space, 0);
    Ok(data)
}
