use anchor_lang::prelude::*;

use crate::constants::RAFFLE_SEED;
use crate::state::Raffle;

/// Accounts required to initialize the raffle configuration.
/// This sets up the raffle account on-chain with its fixed parameters.
#[derive(Accounts)]
pub struct InitializeConfig<'info> {
    /// The account paying for account creation and fees.
    #[account(mut)]
    pub payer: Signer<'info>,

    /// The raffle state account. It also escrows the pool.
    #[account(
        init,
        payer = payer,
        space = 8 + Raffle::INIT_SPACE,
        seeds = [RAFFLE_SEED],
        bump
    )]
    pub raffle: Box<Account<'info, Raffle>>,

    /// System program to create accounts.
    pub system_program: Program<'info, System>,
}

/// Initializes the raffle with its entrance fee and draw interval and opens
/// the first round.
///
/// # Arguments
/// * `ctx` - Context holding the InitializeConfig accounts
/// * `entrance_fee` - Minimum payment in lamports to enter a round
/// * `interval` - Seconds between draws
pub fn process_initialize_config(
    ctx: Context<InitializeConfig>,
    entrance_fee: u64,
    interval: u64,
) -> Result<()> {
    let clock = Clock::get()?;
    let raffle = &mut ctx.accounts.raffle;

    raffle.initialize(
        ctx.bumps.raffle,
        entrance_fee,
        interval,
        clock.unix_timestamp,
    )?;

    msg!(
        "Raffle initialized: fee={} interval={}s start={}",
        entrance_fee,
        interval,
        clock.unix_timestamp
    );

    Ok(())
}
