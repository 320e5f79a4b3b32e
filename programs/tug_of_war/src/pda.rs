//! Program-derived addresses of every record the program owns.
//!
//! Clients use these to locate records; the program uses them to check that a
//! caller named the right record.

use crate::constants::{BET_SEED, MANAGER_SEED, ROUND_SEED};
use crate::state::Side;
use anchor_lang::prelude::*;

pub fn manager_address() -> (Pubkey, u8) {
    Pubkey::find_program_address(&[MANAGER_SEED], &crate::ID)
}

pub fn round_address(round_id: u16) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[ROUND_SEED, round_id.to_be_bytes().as_ref()], &crate::ID)
}

pub fn bet_address(round: &Pubkey, owner: &Pubkey, side: Side) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[BET_SEED, round.as_ref(), owner.as_ref(), &[side.seed()]],
        &crate::ID,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derivation_is_deterministic() {
        assert_eq!(manager_address(), manager_address());
        assert_eq!(round_address(9), round_address(9));
    }

    #[test]
    fn rounds_get_distinct_addresses() {
        assert_ne!(round_address(0).0, round_address(1).0);
        assert_ne!(round_address(0).0, manager_address().0);
    }

    #[test]
    fn bets_are_keyed_by_round_owner_and_side() {
        let round = round_address(0).0;
        let other_round = round_address(1).0;
        let owner = Pubkey::new_unique();

        let left = bet_address(&round, &owner, Side::Left).0;
        assert_ne!(left, bet_address(&round, &owner, Side::Right).0);
        assert_ne!(left, bet_address(&other_round, &owner, Side::Left).0);
        assert_ne!(left, bet_address(&round, &Pubkey::new_unique(), Side::Left).0);
    }

    #[test]
    fn round_seed_uses_big_endian_id() {
        let (expected, _) =
            Pubkey::find_program_address(&[ROUND_SEED, &[0x01, 0x02]], &crate::ID);
        assert_eq!(round_address(0x0102).0, expected);
    }
}
