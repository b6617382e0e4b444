use anchor_lang::prelude::*;

use crate::constants::MAX_PLAYERS;
use crate::error::RaffleError;
use crate::randomness::winner_index;

/// Phase of the current round.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, InitSpace)]
pub enum RaffleState {
    /// Accepting entries.
    Open,
    /// A randomness request is in flight; entries and new draws are refused.
    Calculating,
}

#[account]
#[derive(InitSpace)]
pub struct Raffle {
    /// The bump seed used for deriving the PDA address of this account.
    pub bump: u8,

    /// Minimum lamports a player must pay to enter. Fixed at initialization.
    pub entrance_fee: u64,

    /// Seconds that must elapse after the last draw before a new one may start.
    pub interval: u64,

    pub state: RaffleState,

    /// Players of the current round in entry order.
    #[max_len(MAX_PLAYERS)]
    pub players: Vec<Pubkey>,

    /// Lamports collected for the current round. The lamports themselves sit
    /// on this account next to its rent reserve.
    pub pool: u64,

    /// UNIX timestamp of the last completed draw.
    pub last_timestamp: i64,

    /// Randomness account of the in-flight draw. `Some` iff `Calculating`.
    pub pending_request: Option<Pubkey>,

    /// Slot at which the pending randomness was requested.
    pub request_slot: u64,

    /// UNIX timestamp at which the pending draw started.
    pub draw_started_at: i64,

    /// Winner of the last completed round.
    pub recent_winner: Pubkey,

    /// Number of the round currently collecting entries or being drawn.
    pub round: u64,
}

/// Snapshot of the four upkeep conditions, kept for diagnostics when a draw
/// is refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UpkeepStatus {
    pub time_passed: bool,
    pub state: RaffleState,
    pub pool: u64,
    pub players: usize,
}

impl UpkeepStatus {
    pub fn upkeep_needed(&self) -> bool {
        self.time_passed && self.state == RaffleState::Open && self.pool > 0 && self.players > 0
    }
}

/// Outcome of a settled round, used for the payout and the history record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Settlement {
    pub round: u64,
    pub winner: Pubkey,
    pub prize: u64,
    pub players: u32,
    pub random_word: u64,
    pub request_id: Pubkey,
    pub started_at: i64,
    pub settled_at: i64,
}

impl Raffle {
    pub fn initialize(
        &mut self,
        bump: u8,
        entrance_fee: u64,
        interval: u64,
        now: i64,
    ) -> Result<()> {
        require!(entrance_fee > 0 && interval > 0, RaffleError::InvalidConfig);

        self.bump = bump;
        self.entrance_fee = entrance_fee;
        self.interval = interval;
        self.state = RaffleState::Open;
        self.players = Vec::new();
        self.pool = 0;
        self.last_timestamp = now;
        self.pending_request = None;
        self.request_slot = 0;
        self.draw_started_at = 0;
        self.recent_winner = Pubkey::default();
        self.round = 1;
        Ok(())
    }

    /// Adds `player` to the current round for a payment of `amount` lamports.
    /// The caller moves the lamports.
    pub fn enter(&mut self, player: Pubkey, amount: u64) -> Result<()> {
        require!(amount >= self.entrance_fee, RaffleError::InsufficientFee);
        require!(self.state == RaffleState::Open, RaffleError::RoundNotOpen);
        require!(self.players.len() < MAX_PLAYERS, RaffleError::RaffleFull);

        let pool = self
            .pool
            .checked_add(amount)
            .ok_or(RaffleError::MathOverflow)?;

        self.players.push(player);
        self.pool = pool;
        Ok(())
    }

    /// At least `interval` seconds since the last draw. A clock behind the
    /// last draw never counts as elapsed.
    fn interval_elapsed(&self, now: i64) -> bool {
        match u64::try_from(now.saturating_sub(self.last_timestamp)) {
            Ok(elapsed) => elapsed >= self.interval,
            Err(_) => false,
        }
    }

    pub fn upkeep_status(&self, now: i64) -> UpkeepStatus {
        UpkeepStatus {
            time_passed: self.interval_elapsed(now),
            state: self.state,
            pool: self.pool,
            players: self.players.len(),
        }
    }

    pub fn check_upkeep(&self, now: i64) -> bool {
        self.upkeep_status(now).upkeep_needed()
    }

    /// Fails with `UpkeepNotNeeded` after logging the snapshot when a draw
    /// may not start at `now`.
    fn ensure_upkeep(&self, now: i64) -> Result<UpkeepStatus> {
        let status = self.upkeep_status(now);
        if !status.upkeep_needed() {
            msg!(
                "Upkeep not needed: pool={} players={} state={:?} time_passed={}",
                status.pool,
                status.players,
                status.state,
                status.time_passed
            );
            return err!(RaffleError::UpkeepNotNeeded);
        }
        Ok(status)
    }

    /// Closes entry and records `request_id` as the single pending request.
    /// Returns the snapshot the draw was started on.
    pub fn begin_draw(
        &mut self,
        request_id: Pubkey,
        request_slot: u64,
        now: i64,
    ) -> Result<UpkeepStatus> {
        let status = self.ensure_upkeep(now)?;
        require_keys_neq!(
            request_id,
            Pubkey::default(),
            RaffleError::InvalidRandomnessAccount
        );

        self.state = RaffleState::Calculating;
        self.pending_request = Some(request_id);
        self.request_slot = request_slot;
        self.draw_started_at = now;
        Ok(status)
    }

    /// Fails unless `request_id` is the outstanding request of a calculating round.
    pub fn ensure_pending(&self, request_id: Pubkey) -> Result<()> {
        require!(
            self.state == RaffleState::Calculating && self.pending_request == Some(request_id),
            RaffleError::UnknownOrStaleRequest
        );
        Ok(())
    }

    /// Picks the winner for the pending request and reopens the raffle.
    /// The pool is zeroed here; moving the lamports is left to the caller,
    /// whose failure reverts this transition with the rest of the transaction.
    pub fn settle_draw(
        &mut self,
        request_id: Pubkey,
        random_words: &[u64],
        now: i64,
    ) -> Result<Settlement> {
        self.ensure_pending(request_id)?;

        let index = winner_index(random_words, self.players.len())
            .ok_or(RaffleError::RandomnessNotResolved)?;
        let winner = self.players[index];
        let next_round = self
            .round
            .checked_add(1)
            .ok_or(RaffleError::MathOverflow)?;

        let settlement = Settlement {
            round: self.round,
            winner,
            prize: self.pool,
            players: self.players.len() as u32,
            random_word: random_words[0],
            request_id,
            started_at: self.draw_started_at,
            settled_at: now.max(self.draw_started_at),
        };

        self.recent_winner = winner;
        self.players.clear();
        self.pool = 0;
        self.last_timestamp = settlement.settled_at;
        self.state = RaffleState::Open;
        self.pending_request = None;
        self.round = next_round;
        Ok(settlement)
    }

    pub fn num_players(&self) -> usize {
        self.players.len()
    }

    pub fn player(&self, index: u64) -> Result<Pubkey> {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.players.get(i).copied())
            .ok_or_else(|| error!(RaffleError::PlayerIndexOutOfBounds))
    }

}

/// History entry written once per completed round.
/// Seeds: [b"round", round.to_le_bytes()]
#[account]
#[derive(InitSpace)]
pub struct RoundRecord {
    pub bump: u8,
    pub round: u64,
    pub winner: Pubkey,
    pub prize: u64,
    pub players: u32,
    pub random_word: u64,
    pub request_id: Pubkey,
    pub started_at: i64,
    pub settled_at: i64,
}

impl RoundRecord {
    pub fn record(&mut self, settlement: &Settlement, bump: u8) {
        self.bump = bump;
        self.round = settlement.round;
        self.winner = settlement.winner;
        self.prize = settlement.prize;
        self.players = settlement.players;
        self.random_word = settlement.random_word;
        self.request_id = settlement.request_id;
        self.started_at = settlement.started_at;
        self.settled_at = settlement.settled_at;
    }
}
