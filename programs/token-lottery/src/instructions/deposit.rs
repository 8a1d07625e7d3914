use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::constants::LOTTERY_STORE_SEED;
use crate::events::Transfer;
use crate::state::LotteryStore;

/// Accounts required to deposit base currency for tokens.
#[derive(Accounts)]
pub struct Deposit<'info> {
    /// The depositor; pays the lamports and receives the minted tokens.
    #[account(mut)]
    pub payer: Signer<'info>,

    #[account(
        mut,
        seeds = [LOTTERY_STORE_SEED],
        bump = lottery_store.bump
    )]
    pub lottery_store: Box<Account<'info, LotteryStore>>,

    /// System program for the lamports transfer.
    pub system_program: Program<'info, System>,
}

/// Exchanges `amount` lamports for ledger tokens at the fixed rate.
///
/// The granularity check runs before any lamports move, so a rejected
/// deposit leaves both the ledger and the payer untouched.
pub fn process_deposit(ctx: Context<Deposit>, amount: u64) -> Result<()> {
    let sender = ctx.accounts.payer.key();
    let tokens = ctx.accounts.lottery_store.deposit(sender, amount)?;

    system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            system_program::Transfer {
                from: ctx.accounts.payer.to_account_info(),
                to: ctx.accounts.lottery_store.to_account_info(),
            },
        ),
        amount,
    )?;

    msg!("Minted {} tokens for {} base units", tokens, amount);
    emit!(Transfer {
        from: Pubkey::default(),
        to: sender,
        amount: tokens,
    });
    Ok(())
}
