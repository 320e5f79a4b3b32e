pub const MANAGER_SEED: &[u8] = b"tug-manager";
pub const ROUND_SEED: &[u8] = b"tug-round";
pub const BET_SEED: &[u8] = b"tug-bet";

/// Distance from center at which a round is decided, unless the manager was
/// initialized with an override.
pub const DEFAULT_PULL_LIMIT: u16 = 250;

/// Anchor account discriminator prefix.
pub const DISCRIMINATOR_LEN: usize = 8;
