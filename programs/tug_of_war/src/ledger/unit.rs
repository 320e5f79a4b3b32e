use crate::processor::Action;
use anchor_lang::prelude::Pubkey;

/// An account a unit of work touches, with the version the caller saw when
/// it built the unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DeclaredAccount {
    pub address: Pubkey,
    pub observed_version: u64,
}

/// One signed request: the action, who signed it, and the records it names.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnitOfWork {
    pub action: Action,
    pub signer: Option<Pubkey>,
    pub accounts: Vec<DeclaredAccount>,
}

impl UnitOfWork {
    pub fn addresses(&self) -> Vec<Pubkey> {
        self.accounts.iter().map(|account| account.address).collect()
    }
}
