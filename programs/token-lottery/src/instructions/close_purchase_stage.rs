use anchor_lang::prelude::*;

use crate::constants::LOTTERY_STORE_SEED;
use crate::state::LotteryStore;

#[derive(Accounts)]
pub struct ClosePurchaseStage<'info> {
    /// Must match the stored authority.
    pub payer: Signer<'info>,

    #[account(
        mut,
        seeds = [LOTTERY_STORE_SEED],
        bump = lottery_store.bump
    )]
    pub lottery_store: Box<Account<'info, LotteryStore>>,
}

/// Ends ticket sales for the current round. Allowed only after the round
/// has been open for at least an hour.
pub fn process_close_purchase_stage(ctx: Context<ClosePurchaseStage>) -> Result<()> {
    let store = &mut ctx.accounts.lottery_store;
    store.assert_authority(&ctx.accounts.payer.key())?;

    let now = Clock::get()?.unix_timestamp;
    store.close_purchase_stage(now)?;

    msg!("Purchase stage closed at {}", now);
    Ok(())
}
