use anchor_lang::prelude::*;

use crate::constants::RAFFLE_SEED;
use crate::state::Raffle;

/// Read-only access to the raffle for simulated view calls.
#[derive(Accounts)]
pub struct ViewRaffle<'info> {
    #[account(
        seeds = [RAFFLE_SEED],
        bump = raffle.bump,
    )]
    pub raffle: Box<Account<'info, Raffle>>,
}

/// Answer to `check_upkeep`. `perform_data` is reserved for the keeper and
/// always empty.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct UpkeepCheck {
    pub upkeep_needed: bool,
    pub perform_data: Vec<u8>,
}

pub fn process_check_upkeep(ctx: Context<ViewRaffle>, _check_data: Vec<u8>) -> Result<UpkeepCheck> {
    let clock = Clock::get()?;
    Ok(UpkeepCheck {
        upkeep_needed: ctx.accounts.raffle.check_upkeep(clock.unix_timestamp),
        perform_data: Vec::new(),
    })
}

pub fn process_get_player(ctx: Context<ViewRaffle>, index: u64) -> Result<Pubkey> {
    ctx.accounts.raffle.player(index)
}
