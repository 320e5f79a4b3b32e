use anchor_lang::prelude::*;

#[error_code]
#[derive(PartialEq, Eq)]
pub enum TugError {
    #[msg("The tug manager is already initialized")]
    AlreadyInitialized,

    #[msg("The tug manager has not been initialized")]
    ManagerNotInitialized,

    #[msg("A round with this id already exists")]
    RoundAlreadyExists,

    #[msg("Round id does not match the active round")]
    StaleRoundId,

    #[msg("Round does not exist")]
    RoundNotFound,

    #[msg("Round is already resolved")]
    RoundResolved,

    #[msg("Round is still open")]
    RoundOpen,

    #[msg("Bet amount must be greater than zero")]
    ZeroAmount,

    #[msg("No winning bet found for this claimant")]
    BetNotFound,

    #[msg("This bet has already been claimed")]
    AlreadyClaimed,

    #[msg("You are not authorized to perform this action")]
    Unauthorized,

    #[msg("A required signer is missing")]
    MissingSigner,

    #[msg("Supplied account does not match its derived address")]
    InvalidAddress,

    #[msg("Pull limit must be greater than zero")]
    InvalidPullLimit,

    #[msg("Payer does not have enough lamports")]
    InsufficientFunds,

    #[msg("Escrow does not cover the payout")]
    EscrowShortfall,

    #[msg("Arithmetic overflow")]
    MathOverflow,
}

impl TugError {
    /// Errors that can only happen if pool accounting is broken.
    pub fn is_invariant_breach(&self) -> bool {
        matches!(self, TugError::EscrowShortfall | TugError::MathOverflow)
    }
}
