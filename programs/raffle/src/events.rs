use anchor_lang::prelude::*;

/// A player joined the current round.
#[event]
pub struct RaffleEntered {
    pub player: Pubkey,
    /// Lamports paid, at least the entrance fee.
    pub amount: u64,
}

/// Entry closed and randomness was requested for the round.
#[event]
pub struct DrawRequested {
    /// Switchboard randomness account acting as the request id.
    pub request_id: Pubkey,
    pub round: u64,
}

/// A round was settled and its pool paid out.
#[event]
pub struct WinnerPicked {
    pub winner: Pubkey,
    pub prize: u64,
    pub round: u64,
}
