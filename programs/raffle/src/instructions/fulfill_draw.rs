use anchor_lang::prelude::*;
use switchboard_on_demand::accounts::RandomnessAccountData;

use crate::constants::{RAFFLE_SEED, ROUND_SEED, SWITCHBOARD_ON_DEMAND_PID};
use crate::error::RaffleError;
use crate::events::WinnerPicked;
use crate::randomness::{confirmations_met, random_words};
use crate::state::{Raffle, RoundRecord};

/// Accounts required to settle the pending draw.
///
/// The client bundles the Switchboard reveal instruction with this one and
/// passes the drawn player, computed from the revealed value, as `winner`.
#[derive(Accounts)]
pub struct FulfillDraw<'info> {
    /// Account paying for the round record.
    #[account(mut)]
    pub payer: Signer<'info>,

    #[account(
        mut,
        seeds = [RAFFLE_SEED],
        bump = raffle.bump,
    )]
    pub raffle: Box<Account<'info, Raffle>>,

    /// The randomness account committed by `start_draw`.
    /// CHECK: Owned by Switchboard On-Demand; compared against the pending
    /// request, then parsed in the handler.
    #[account(owner = SWITCHBOARD_ON_DEMAND_PID @ RaffleError::InvalidRandomnessAccount)]
    pub randomness_account_data: UncheckedAccount<'info>,

    /// Receives the pool.
    /// CHECK: Must equal the drawn player, checked before any lamports move.
    #[account(mut)]
    pub winner: UncheckedAccount<'info>,

    /// History entry of the round being settled.
    #[account(
        init,
        payer = payer,
        space = 8 + RoundRecord::INIT_SPACE,
        seeds = [ROUND_SEED, raffle.round.to_le_bytes().as_ref()],
        bump,
    )]
    pub round_record: Box<Account<'info, RoundRecord>>,

    pub system_program: Program<'info, System>,
}

/// Settles the pending draw.
///
/// Steps:
/// 1. Match the randomness account against the pending request.
/// 2. Wait out `REQUEST_CONFIRMATIONS` slots and read the revealed value.
/// 3. Pick the winner, reset the round and pay the whole pool.
/// 4. Write the round record and emit `WinnerPicked`.
///
/// A failed payout fails the instruction, so the round stays `Calculating`
/// with its request pending and can be fulfilled again.
pub fn process_fulfill_draw(ctx: Context<FulfillDraw>) -> Result<()> {
    let clock = Clock::get()?;
    let request_id = ctx.accounts.randomness_account_data.key();
    let raffle = &mut ctx.accounts.raffle;

    raffle.ensure_pending(request_id)?;

    if !confirmations_met(raffle.request_slot, clock.slot) {
        msg!("Request slot: {}", raffle.request_slot);
        msg!("Current slot: {}", clock.slot);
        return Err(RaffleError::RandomnessNotResolved.into());
    }

    let randomness_data =
        RandomnessAccountData::parse(ctx.accounts.randomness_account_data.data.borrow())
            .map_err(|_| RaffleError::InvalidRandomnessAccount)?;
    let revealed_random_value = randomness_data
        .get_value(&clock)
        .map_err(|_| RaffleError::RandomnessNotResolved)?;

    let words = random_words(&revealed_random_value);
    let settlement = raffle.settle_draw(request_id, &words, clock.unix_timestamp)?;

    require_keys_eq!(
        ctx.accounts.winner.key(),
        settlement.winner,
        RaffleError::WinnerMismatch
    );

    let raffle_info = raffle.to_account_info();
    let rent_reserve = Rent::get()?.minimum_balance(raffle_info.data_len());
    pay_out(
        &raffle_info,
        &ctx.accounts.winner.to_account_info(),
        settlement.prize,
        rent_reserve,
    )?;

    ctx.accounts
        .round_record
        .record(&settlement, ctx.bumps.round_record);

    emit!(WinnerPicked {
        winner: settlement.winner,
        prize: settlement.prize,
        round: settlement.round,
    });

    msg!(
        "Winner picked: round={} winner={} prize={} word={}",
        settlement.round,
        settlement.winner,
        settlement.prize,
        settlement.random_word
    );

    Ok(())
}

/// Balances of the raffle and the winner after moving `prize`, or `None`
/// when the move would dip into the rent reserve or overflow.
fn payout_balances(
    raffle_lamports: u64,
    winner_lamports: u64,
    prize: u64,
    rent_reserve: u64,
) -> Option<(u64, u64)> {
    let remaining = raffle_lamports
        .checked_sub(prize)
        .filter(|left| *left >= rent_reserve)?;
    let credited = winner_lamports.checked_add(prize)?;
    Some((remaining, credited))
}

fn pay_out(from: &AccountInfo, to: &AccountInfo, prize: u64, rent_reserve: u64) -> Result<()> {
    let (remaining, credited) = payout_balances(from.lamports(), to.lamports(), prize, rent_reserve)
        .ok_or(RaffleError::TransferFailed)?;

    **from.try_borrow_mut_lamports()? = remaining;
    **to.try_borrow_mut_lamports()? = credited;
    Ok(())
}
