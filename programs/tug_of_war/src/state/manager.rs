use crate::errors::TugError;
use anchor_lang::prelude::*;
use std::result::Result;

/// Singleton registry pointing players at the round they should target.
#[account]
#[derive(InitSpace, Debug, Default, PartialEq, Eq)]
pub struct Manager {
    pub active_round_id: u16,
    pub pull_limit: u16,
    pub bump: u8,
}

impl Manager {
    pub const LEN: usize = crate::constants::DISCRIMINATOR_LEN + Manager::INIT_SPACE;

    pub fn initialize(&mut self, pull_limit: u16, bump: u8) -> Result<(), TugError> {
        if pull_limit == 0 {
            return Err(TugError::InvalidPullLimit);
        }
        self.active_round_id = 0;
        self.pull_limit = pull_limit;
        self.bump = bump;
        Ok(())
    }

    pub fn require_active(&self, round_id: u16) -> Result<(), TugError> {
        if round_id != self.active_round_id {
            return Err(TugError::StaleRoundId);
        }
        Ok(())
    }

    /// Only the resolving pull moves the registry forward, and never backwards.
    pub fn advance(&mut self, new_round_id: u16) -> Result<(), TugError> {
        if new_round_id <= self.active_round_id {
            return Err(TugError::StaleRoundId);
        }
        self.active_round_id = new_round_id;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manager() -> Manager {
        let mut manager = Manager {
            active_round_id: 7,
            pull_limit: 0,
            bump: 0,
        };
        manager.initialize(5, 254).unwrap();
        manager
    }

    #[test]
    fn initialize_starts_at_round_zero() {
        let manager = manager();
        assert_eq!(manager.active_round_id, 0);
        assert_eq!(manager.pull_limit, 5);
        assert_eq!(manager.bump, 254);
    }

    #[test]
    fn initialize_rejects_zero_limit() {
        let mut manager = manager();
        assert_eq!(manager.initialize(0, 1), Err(TugError::InvalidPullLimit));
    }

    #[test]
    fn advance_is_monotonic() {
        let mut manager = manager();
        manager.advance(1).unwrap();
        assert_eq!(manager.advance(1), Err(TugError::StaleRoundId));
        assert_eq!(manager.advance(0), Err(TugError::StaleRoundId));
        assert_eq!(manager.active_round_id, 1);
    }

    #[test]
    fn require_active_matches_current_id() {
        let manager = manager();
        assert!(manager.require_active(0).is_ok());
        assert_eq!(manager.require_active(1), Err(TugError::StaleRoundId));
    }
}
