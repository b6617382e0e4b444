use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod events;
pub mod instructions;
pub mod randomness;
pub mod state;

pub use instructions::*;

declare_id!("GFsciAPg4A6NcmKJ5vSdWhdZDXDAej66G5qiKnwWk4aC");

#[program]
pub mod raffle {
    use super::*;

    pub fn initialize_config(
        ctx: Context<InitializeConfig>,
        entrance_fee: u64,
        interval: u64,
    ) -> Result<()> {
        process_initialize_config(ctx, entrance_fee, interval)
    }

    pub fn enter_raffle(ctx: Context<EnterRaffle>, amount: u64) -> Result<()> {
        process_enter_raffle(ctx, amount)
    }

    /// View for keepers: simulate to learn whether `start_draw` would succeed.
    pub fn check_upkeep(ctx: Context<ViewRaffle>, check_data: Vec<u8>) -> Result<UpkeepCheck> {
        process_check_upkeep(ctx, check_data)
    }

    pub fn get_player(ctx: Context<ViewRaffle>, index: u64) -> Result<Pubkey> {
        process_get_player(ctx, index)
    }

    pub fn start_draw(ctx: Context<StartDraw>) -> Result<()> {
        process_start_draw(ctx)
    }

    /// Settles the pending draw once Switchboard has revealed its randomness.
    pub fn fulfill_draw(ctx: Context<FulfillDraw>) -> Result<()> {
        process_fulfill_draw(ctx)
    }
}
