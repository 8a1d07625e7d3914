use anchor_lang::prelude::*;

use crate::constants::LOTTERY_STORE_SEED;
use crate::events::{BurnTokens, PurchasingTickets};
use crate::state::LotteryStore;

#[derive(Accounts)]
pub struct BuyTickets<'info> {
    /// The ticket buyer; tokens are burned from this account's balance.
    pub payer: Signer<'info>,

    #[account(
        mut,
        seeds = [LOTTERY_STORE_SEED],
        bump = lottery_store.bump
    )]
    pub lottery_store: Box<Account<'info, LotteryStore>>,
}

/// Buys `count` tickets in the current round at one token apiece. The
/// tokens are burned; the round's prize pool grows by `count`.
pub fn process_buy_tickets(ctx: Context<BuyTickets>, count: u64) -> Result<()> {
    let buyer = ctx.accounts.payer.key();
    ctx.accounts.lottery_store.buy_tickets(buyer, count)?;

    emit!(BurnTokens {
        account: buyer,
        amount: count,
    });
    emit!(PurchasingTickets { buyer, count });
    Ok(())
}
