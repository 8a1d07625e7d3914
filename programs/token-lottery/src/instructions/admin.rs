use anchor_lang::prelude::*;

use crate::constants::{LOTTERY_STORE_SEED, MAX_STORE_SPACE};
use crate::state::LotteryStore;

/// Accounts required to create the program-wide lottery store.
/// The payer becomes the lottery authority.
#[derive(Accounts)]
pub struct Initialize<'info> {
    /// The account paying for store creation; recorded as the authority.
    #[account(mut)]
    pub payer: Signer<'info>,

    /// The store account holding the ledger and the round history.
    #[account(
        init,
        payer = payer,
        space = MAX_STORE_SPACE,
        seeds = [LOTTERY_STORE_SEED],
        bump
    )]
    pub lottery_store: Box<Account<'info, LotteryStore>>,

    /// System program to create the store account.
    pub system_program: Program<'info, System>,
}

/// Creates the lottery store with an empty ledger, zero supply, and no
/// rounds, and binds the authority key.
pub fn process_initialize(ctx: Context<Initialize>) -> Result<()> {
    let store = &mut ctx.accounts.lottery_store;
    store.bump = ctx.bumps.lottery_store;
    store.authority = ctx.accounts.payer.key();
    store.total_supply = 0;
    Ok(())
}
