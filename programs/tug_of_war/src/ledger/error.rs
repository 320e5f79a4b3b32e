use crate::errors::TugError;
use anchor_lang::prelude::Pubkey;
use thiserror::Error;

/// Why a unit of work did not commit. Nothing is written in any of these cases.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Rejection {
    #[error("account {address} is stale: observed version {observed}, committed {committed}")]
    Stale {
        address: Pubkey,
        observed: u64,
        committed: u64,
    },

    #[error("{action} expects {expected} accounts, {supplied} supplied")]
    AccountCount {
        action: &'static str,
        expected: usize,
        supplied: usize,
    },

    #[error("account {0} is named more than once")]
    DuplicateAccount(Pubkey),

    #[error("account {0} was not declared by the unit of work")]
    Undeclared(Pubkey),

    #[error("account {0} does not hold a valid record")]
    Corrupt(Pubkey),

    #[error("failed to encode commit entry: {0}")]
    Encoding(String),

    #[error("{0}")]
    Program(TugError),

    /// Pool accounting no longer adds up. Never an ordinary user error.
    #[error("invariant breach: {0}")]
    InvariantBreach(TugError),
}

impl Rejection {
    pub fn program_error(&self) -> Option<TugError> {
        match self {
            Rejection::Program(error) | Rejection::InvariantBreach(error) => Some(*error),
            _ => None,
        }
    }

    pub fn is_stale(&self) -> bool {
        matches!(self, Rejection::Stale { .. })
    }
}

impl From<TugError> for Rejection {
    fn from(error: TugError) -> Self {
        if error.is_invariant_breach() {
            Rejection::InvariantBreach(error)
        } else {
            Rejection::Program(error)
        }
    }
}
