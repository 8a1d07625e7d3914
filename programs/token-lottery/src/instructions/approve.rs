use anchor_lang::prelude::*;

use crate::constants::LOTTERY_STORE_SEED;
use crate::events::Approval;
use crate::state::LotteryStore;

#[derive(Accounts)]
pub struct Approve<'info> {
    /// The allowance owner.
    pub payer: Signer<'info>,

    #[account(
        mut,
        seeds = [LOTTERY_STORE_SEED],
        bump = lottery_store.bump
    )]
    pub lottery_store: Box<Account<'info, LotteryStore>>,
}

/// Sets the caller's allowance for `spender` to `amount`, replacing any
/// previous value.
pub fn process_approve(ctx: Context<Approve>, spender: Pubkey, amount: u64) -> Result<()> {
    let owner = ctx.accounts.payer.key();
    ctx.accounts.lottery_store.approve(owner, spender, amount);

    emit!(Approval {
        owner,
        spender,
        amount,
    });
    Ok(())
}
