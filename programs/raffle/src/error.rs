use anchor_lang::prelude::*;

#[error_code]
pub enum RaffleError {
    #[msg("Payment is below the entrance fee")]
    InsufficientFee,
    #[msg("Raffle is not open for entries")]
    RoundNotOpen,
    #[msg("Upkeep not needed")]
    UpkeepNotNeeded,
    #[msg("Prize transfer to the winner failed")]
    TransferFailed,
    #[msg("Randomness request is unknown or already fulfilled")]
    UnknownOrStaleRequest,

    // --- configuration ---
    #[msg("Entrance fee and interval must be greater than 0")]
    InvalidConfig,
    #[msg("Raffle has reached its player capacity")]
    RaffleFull,

    // --- randomness ---
    #[msg("Invalid randomness account")]
    InvalidRandomnessAccount,
    #[msg("Randomness already revealed")]
    RandomnessAlreadyRevealed,
    #[msg("Randomness not resolved")]
    RandomnessNotResolved,

    // --- payout ---
    #[msg("Winner account does not match the drawn player")]
    WinnerMismatch,
    #[msg("Player index out of bounds")]
    PlayerIndexOutOfBounds,
    #[msg("Arithmetic overflow")]
    MathOverflow,
}
