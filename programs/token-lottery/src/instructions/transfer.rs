use anchor_lang::prelude::*;

use crate::constants::LOTTERY_STORE_SEED;
use crate::events::Transfer;
use crate::state::LotteryStore;

#[derive(Accounts)]
pub struct TransferTokens<'info> {
    /// The sending account.
    pub payer: Signer<'info>,

    #[account(
        mut,
        seeds = [LOTTERY_STORE_SEED],
        bump = lottery_store.bump
    )]
    pub lottery_store: Box<Account<'info, LotteryStore>>,
}

/// Moves `amount` tokens from the caller to `to`.
pub fn process_transfer(ctx: Context<TransferTokens>, to: Pubkey, amount: u64) -> Result<()> {
    let from = ctx.accounts.payer.key();
    ctx.accounts.lottery_store.transfer(from, to, amount)?;

    emit!(Transfer { from, to, amount });
    Ok(())
}
