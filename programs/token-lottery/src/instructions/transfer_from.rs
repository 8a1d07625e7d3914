use anchor_lang::prelude::*;

use crate::constants::LOTTERY_STORE_SEED;
use crate::events::{Approval, Transfer};
use crate::state::LotteryStore;

#[derive(Accounts)]
pub struct TransferFrom<'info> {
    /// The spender acting on a previously granted allowance.
    pub payer: Signer<'info>,

    #[account(
        mut,
        seeds = [LOTTERY_STORE_SEED],
        bump = lottery_store.bump
    )]
    pub lottery_store: Box<Account<'info, LotteryStore>>,
}

/// Moves `amount` tokens from `from` to `to` on the caller's allowance.
/// Emits the updated allowance first, then the transfer itself.
pub fn process_transfer_from(
    ctx: Context<TransferFrom>,
    from: Pubkey,
    to: Pubkey,
    amount: u64,
) -> Result<()> {
    let spender = ctx.accounts.payer.key();
    let remaining = ctx
        .accounts
        .lottery_store
        .transfer_from(spender, from, to, amount)?;

    emit!(Approval {
        owner: from,
        spender,
        amount: remaining,
    });
    emit!(Transfer { from, to, amount });
    Ok(())
}
