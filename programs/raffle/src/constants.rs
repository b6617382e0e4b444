use anchor_lang::prelude::*;

/// Seed of the raffle state PDA, which also escrows the pool.
#[constant]
pub const RAFFLE_SEED: &[u8] = b"raffle";

/// Seed prefix of the per-round history records.
#[constant]
pub const ROUND_SEED: &[u8] = b"round";

/// Number of random words consumed per draw.
#[constant]
pub const NUM_WORDS: u32 = 1;

/// Slots that must pass between the randomness request and its fulfillment.
#[constant]
pub const REQUEST_CONFIRMATIONS: u16 = 3;

/// Compute budget clients should request for the fulfillment transaction.
#[constant]
pub const CALLBACK_COMPUTE_UNITS: u32 = 500_000;

/// Capacity of the entrant list for a single round.
pub const MAX_PLAYERS: usize = 100;

/// Switchboard On-Demand program. Randomness accounts must be owned by it.
#[cfg(not(feature = "devnet"))]
pub const SWITCHBOARD_ON_DEMAND_PID: Pubkey =
    pubkey!("SBondMDrcV3K4kxZR1HNVT7osZxAHVHgYXL5Ze1oMUv");

/// Switchboard On-Demand program on Devnet.
#[cfg(feature = "devnet")]
pub const SWITCHBOARD_ON_DEMAND_PID: Pubkey =
    pubkey!("Aio4gaXjXzJNVLtzwtNVmSqGKpANtXhybbkhtAC94ji2");
