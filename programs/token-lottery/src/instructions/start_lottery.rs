use anchor_lang::prelude::*;

use crate::constants::LOTTERY_STORE_SEED;
use crate::events::OpeningLottery;
use crate::state::LotteryStore;

#[derive(Accounts)]
pub struct StartLottery<'info> {
    /// Must match the stored authority.
    pub payer: Signer<'info>,

    #[account(
        mut,
        seeds = [LOTTERY_STORE_SEED],
        bump = lottery_store.bump
    )]
    pub lottery_store: Box<Account<'info, LotteryStore>>,
}

/// Opens the next lottery round. The previous round, if any, must have
/// completed.
pub fn process_start_lottery(ctx: Context<StartLottery>) -> Result<()> {
    let store = &mut ctx.accounts.lottery_store;
    store.assert_authority(&ctx.accounts.payer.key())?;

    let now = Clock::get()?.unix_timestamp;
    let lottery_id = store.start_lottery(now)?;

    msg!("Lottery {} open for ticket purchases", lottery_id);
    emit!(OpeningLottery { lottery_id });
    Ok(())
}
