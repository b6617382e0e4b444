use anchor_lang::prelude::*;
use switchboard_on_demand::accounts::RandomnessAccountData;

use crate::constants::{RAFFLE_SEED, SWITCHBOARD_ON_DEMAND_PID};
use crate::error::RaffleError;
use crate::events::DrawRequested;
use crate::state::Raffle;

/// Accounts required to close entry and commit a randomness request.
///
/// The client bundles the Switchboard commit instruction with this one.
/// Anyone may call it; the upkeep predicate decides.
#[derive(Accounts)]
pub struct StartDraw<'info> {
    /// The keeper submitting the draw.
    #[account(mut)]
    pub keeper: Signer<'info>,

    #[account(
        mut,
        seeds = [RAFFLE_SEED],
        bump = raffle.bump,
    )]
    pub raffle: Box<Account<'info, Raffle>>,

    /// Randomness account from Switchboard. Its key becomes the request id.
    /// CHECK: Owned by Switchboard On-Demand; data is validated in the handler.
    #[account(owner = SWITCHBOARD_ON_DEMAND_PID @ RaffleError::InvalidRandomnessAccount)]
    pub randomness_account_data: UncheckedAccount<'info>,
}

pub fn process_start_draw(ctx: Context<StartDraw>) -> Result<()> {
    let clock = Clock::get()?;
    let request_id = ctx.accounts.randomness_account_data.key();
    let raffle = &mut ctx.accounts.raffle;

    // Upkeep goes first so a draw already in flight reports UpkeepNotNeeded.
    // A stale commit below fails the instruction and reverts the transition.
    let status = raffle.begin_draw(request_id, clock.slot, clock.unix_timestamp)?;

    let randomness_data =
        RandomnessAccountData::parse(ctx.accounts.randomness_account_data.data.borrow())
            .map_err(|_| RaffleError::InvalidRandomnessAccount)?;

    // Must be committed in the immediately previous slot (fresh)
    if randomness_data.seed_slot != clock.slot.saturating_sub(1) {
        msg!("Seed slot: {}", randomness_data.seed_slot);
        msg!("Current slot: {}", clock.slot);
        return Err(RaffleError::RandomnessAlreadyRevealed.into());
    }

    emit!(DrawRequested {
        request_id,
        round: raffle.round,
    });

    msg!(
        "Draw requested: round={} request={} players={} pool={}",
        raffle.round,
        request_id,
        status.players,
        status.pool
    );

    Ok(())
}
