use anchor_lang::prelude::*;

/// Allowance for (owner, spender) was set to `amount`.
#[event]
pub struct Approval {
    pub owner: Pubkey,
    pub spender: Pubkey,
    pub amount: u64,
}

/// Tokens moved between two ledger accounts. Mints use
/// `Pubkey::default()` as `from`.
#[event]
pub struct Transfer {
    pub from: Pubkey,
    pub to: Pubkey,
    pub amount: u64,
}

/// Tokens burned from `account` when tickets are purchased.
#[event]
pub struct BurnTokens {
    pub account: Pubkey,
    pub amount: u64,
}

/// `buyer` purchased `count` tickets in the current round.
#[event]
pub struct PurchasingTickets {
    pub buyer: Pubkey,
    pub count: u64,
}

#[event]
pub struct OpeningLottery {
    pub lottery_id: u64,
}

#[event]
pub struct CompletingLottery {
    pub lottery_id: u64,
}
