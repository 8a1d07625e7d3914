use anchor_lang::prelude::*;
use switchboard_on_demand::accounts::RandomnessAccountData;

use crate::constants::LOTTERY_STORE_SEED;
use crate::error::LotteryError;
use crate::events::CompletingLottery;
use crate::state::LotteryStore;

#[derive(Accounts)]
pub struct CompleteLottery<'info> {
    /// Must match the stored authority.
    pub payer: Signer<'info>,

    #[account(
        mut,
        seeds = [LOTTERY_STORE_SEED],
        bump = lottery_store.bump
    )]
    pub lottery_store: Box<Account<'info, LotteryStore>>,

    /// Randomness account from Switchboard.
    /// CHECK: The account's data is parsed and validated within the handler.
    pub randomness_account_data: UncheckedAccount<'info>,
}

/// Draws the winner of the closed round from the revealed Switchboard
/// randomness, then settles the prize and the commission.
pub fn process_complete_lottery(ctx: Context<CompleteLottery>) -> Result<()> {
    let clock = Clock::get()?;
    let store = &mut ctx.accounts.lottery_store;
    store.assert_authority(&ctx.accounts.payer.key())?;

    let randomness_data =
        RandomnessAccountData::parse(ctx.accounts.randomness_account_data.data.borrow())
            .map_err(|_| LotteryError::RandomnessNotResolved)?;
    let revealed = randomness_data
        .get_value(&clock)
        .map_err(|_| LotteryError::RandomnessNotResolved)?;
    let mut seed = [0u8; 8];
    seed.copy_from_slice(&revealed[..8]);
    let draw = u64::from_le_bytes(seed);

    let (lottery_id, winner) = store.complete_lottery(draw)?;

    msg!("Lottery {} won by {}", lottery_id, winner);
    emit!(CompletingLottery { lottery_id });
    Ok(())
}
