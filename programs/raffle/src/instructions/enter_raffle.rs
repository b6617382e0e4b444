use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::constants::RAFFLE_SEED;
use crate::events::RaffleEntered;
use crate::state::Raffle;

/// Accounts required to enter the current round.
#[derive(Accounts)]
pub struct EnterRaffle<'info> {
    /// The player paying the entrance fee.
    #[account(mut)]
    pub player: Signer<'info>,

    #[account(
        mut,
        seeds = [RAFFLE_SEED],
        bump = raffle.bump,
    )]
    pub raffle: Box<Account<'info, Raffle>>,

    /// System program for the fee transfer.
    pub system_program: Program<'info, System>,
}

/// Enters the caller into the current round.
///
/// Steps performed:
/// 1. Check the payment covers the fee and the round is open.
/// 2. Transfer `amount` lamports from the player to the raffle account.
/// 3. Append the player and emit `RaffleEntered`.
pub fn process_enter_raffle(ctx: Context<EnterRaffle>, amount: u64) -> Result<()> {
    let player = ctx.accounts.player.key();
    ctx.accounts.raffle.enter(player, amount)?;

    system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            system_program::Transfer {
                from: ctx.accounts.player.to_account_info(),
                to: ctx.accounts.raffle.to_account_info(),
            },
        ),
        amount,
    )?;

    emit!(RaffleEntered { player, amount });

    msg!(
        "Player {} entered round {} ({} players, pool {})",
        player,
        ctx.accounts.raffle.round,
        ctx.accounts.raffle.num_players(),
        ctx.accounts.raffle.pool
    );

    Ok(())
}
