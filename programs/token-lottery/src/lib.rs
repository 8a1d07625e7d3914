#![allow(unexpected_cfgs)]

use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod events;
pub mod instructions;
pub mod state;

use instructions::*;

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

/// Token-gated lottery: an internal fungible-token ledger combined with a
/// periodic ticket-purchase-and-draw mechanism. Users deposit lamports to
/// mint tokens, spend tokens on tickets, and one drawn winner per round
/// receives the pooled tickets minus a flat one-token commission.
#[program]
pub mod token_lottery {
    use super::*;

    /// Creates the program-wide store; the payer becomes the authority.
    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        process_initialize(ctx)
    }

    /// Deposits `amount` lamports and mints tokens at the fixed rate.
    pub fn deposit(ctx: Context<Deposit>, amount: u64) -> Result<()> {
        process_deposit(ctx, amount)
    }

    /// Sets the caller's allowance for `spender` to `amount`.
    pub fn approve(ctx: Context<Approve>, spender: Pubkey, amount: u64) -> Result<()> {
        process_approve(ctx, spender, amount)
    }

    /// Moves `amount` tokens from the caller to `to`.
    pub fn transfer(ctx: Context<TransferTokens>, to: Pubkey, amount: u64) -> Result<()> {
        process_transfer(ctx, to, amount)
    }

    /// Moves `amount` tokens from `from` to `to` on the caller's allowance.
    pub fn transfer_from(
        ctx: Context<TransferFrom>,
        from: Pubkey,
        to: Pubkey,
        amount: u64,
    ) -> Result<()> {
        process_transfer_from(ctx, from, to, amount)
    }

    /// Opens the next lottery round (authority only).
    pub fn start_lottery(ctx: Context<StartLottery>) -> Result<()> {
        process_start_lottery(ctx)
    }

    /// Buys `count` tickets in the current round at one token each.
    pub fn buy_tickets(ctx: Context<BuyTickets>, count: u64) -> Result<()> {
        process_buy_tickets(ctx, count)
    }

    /// Ends ticket sales after the one-hour minimum (authority only).
    pub fn close_purchase_stage(ctx: Context<ClosePurchaseStage>) -> Result<()> {
        process_close_purchase_stage(ctx)
    }

    /// Draws the winner of the closed round and settles the prize
    /// (authority only).
    pub fn complete_lottery(ctx: Context<CompleteLottery>) -> Result<()> {
        process_complete_lottery(ctx)
    }
}
