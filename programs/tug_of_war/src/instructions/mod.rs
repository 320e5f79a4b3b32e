pub mod claim_bet;
pub mod create_round;
pub mod initialize_manager;
pub mod place_bet;
pub mod pull;

pub use claim_bet::*;
pub use create_round::*;
pub use initialize_manager::*;
pub use place_bet::*;
pub use pull::*;
