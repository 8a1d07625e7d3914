use std::collections::BTreeMap;

use anchor_lang::prelude::*;

use crate::constants::{
    BASE_UNITS_PER_TOKEN, LOTTERY_COMMISSION, MAX_TICKETS_PER_ACCOUNT, PURCHASE_STAGE_SECONDS,
};
use crate::error::LotteryError;

/// Lifecycle of a lottery round. `NotStarted` is only ever reported by
/// [`LotteryStore::current_lottery_status`] before the first round opens;
/// stored rounds begin at `PurchaseTickets`.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum LotteryStatus {
    NotStarted,
    PurchaseTickets,
    Closed,
    Completed,
}

/// Tickets held by one account in one round. Entries keep purchase order so
/// the winning-ticket walk is deterministic for a given draw.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct TicketEntry {
    pub buyer: Pubkey,
    pub count: u64,
}

/// One round of the lottery. Rounds are append-only history; id 0 is a
/// reserved sentinel and never stored.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct LotteryRound {
    pub id: u64,
    pub status: LotteryStatus,
    pub start_time: i64,
    /// Zero until the purchase stage is closed.
    pub close_time: i64,
    /// Sum of all tickets sold this round.
    pub prize_pool: u64,
    /// `Pubkey::default()` until the round completes.
    pub winner: Pubkey,
    pub tickets: Vec<TicketEntry>,
}

impl LotteryRound {
    pub fn ticket_count(&self, account: &Pubkey) -> u64 {
        self.tickets
            .iter()
            .find(|entry| entry.buyer == *account)
            .map(|entry| entry.count)
            .unwrap_or(0)
    }

    fn record_purchase(&mut self, buyer: Pubkey, count: u64) {
        match self.tickets.iter_mut().find(|entry| entry.buyer == buyer) {
            Some(entry) => entry.count += count,
            None => self.tickets.push(TicketEntry { buyer, count }),
        }
    }

    /// Maps a ticket index in `[0, prize_pool)` to the account that bought
    /// it: walk the entries in purchase order, accumulating counts, and stop
    /// at the entry whose cumulative range covers the index.
    fn winning_ticket_holder(&self, ticket: u64) -> Option<Pubkey> {
        let mut cumulative = 0u64;
        for entry in &self.tickets {
            cumulative += entry.count;
            if ticket < cumulative {
                return Some(entry.buyer);
            }
        }
        None
    }
}

/// Program-wide state: the token ledger and the round history. Lives in a
/// single PDA created once by `initialize`.
#[account]
pub struct LotteryStore {
    pub bump: u8,
    /// Privileged key for start/close/complete; receives the commission.
    pub authority: Pubkey,
    /// Always equals the sum of all balances.
    pub total_supply: u64,
    /// Absent key reads as balance 0.
    pub balances: BTreeMap<Pubkey, u64>,
    /// Keyed by (owner, spender); absent pair reads as 0.
    pub allowances: BTreeMap<(Pubkey, Pubkey), u64>,
    pub rounds: Vec<LotteryRound>,
}

impl LotteryStore {
    pub fn assert_authority(&self, caller: &Pubkey) -> Result<()> {
        require_keys_eq!(self.authority, *caller, LotteryError::Unauthorized);
        Ok(())
    }

    // ---- ledger ----

    pub fn balance_of(&self, account: &Pubkey) -> u64 {
        self.balances.get(account).copied().unwrap_or(0)
    }

    pub fn allowance(&self, owner: &Pubkey, spender: &Pubkey) -> u64 {
        self.allowances.get(&(*owner, *spender)).copied().unwrap_or(0)
    }

    /// Overwrites the (owner, spender) allowance. Never fails; approving 0
    /// revokes, re-approving replaces.
    pub fn approve(&mut self, owner: Pubkey, spender: Pubkey, amount: u64) {
        self.allowances.insert((owner, spender), amount);
    }

    /// Moves `amount` from `from` to `to`. Allowances and total supply are
    /// untouched. A self-transfer leaves the balance unchanged.
    pub fn transfer(&mut self, from: Pubkey, to: Pubkey, amount: u64) -> Result<()> {
        let from_balance = self.balance_of(&from);
        require!(amount <= from_balance, LotteryError::InsufficientBalance);
        if from == to {
            // Net no-op, but the account still materializes in the ledger.
            self.balances.insert(from, from_balance);
            return Ok(());
        }
        let credited = self
            .balance_of(&to)
            .checked_add(amount)
            .ok_or(LotteryError::ArithmeticOverflow)?;
        self.balances.insert(from, from_balance - amount);
        self.balances.insert(to, credited);
        Ok(())
    }

    /// Spender-driven transfer. Both the allowance and the balance must
    /// cover `amount`; the allowance is decremented by exactly `amount`.
    /// A zero-amount call succeeds with no allowance present at all.
    ///
    /// Returns the remaining allowance for the (from, spender) pair.
    pub fn transfer_from(
        &mut self,
        spender: Pubkey,
        from: Pubkey,
        to: Pubkey,
        amount: u64,
    ) -> Result<u64> {
        let approved = self.allowance(&from, &spender);
        require!(amount <= approved, LotteryError::InsufficientAllowance);
        let remaining = approved - amount;
        self.transfer(from, to, amount)?;
        self.allowances.insert((from, spender), remaining);
        Ok(remaining)
    }

    pub fn mint(&mut self, to: Pubkey, amount: u64) -> Result<()> {
        let supply = self
            .total_supply
            .checked_add(amount)
            .ok_or(LotteryError::ArithmeticOverflow)?;
        let credited = self
            .balance_of(&to)
            .checked_add(amount)
            .ok_or(LotteryError::ArithmeticOverflow)?;
        self.total_supply = supply;
        self.balances.insert(to, credited);
        Ok(())
    }

    pub fn burn(&mut self, from: Pubkey, amount: u64) -> Result<()> {
        let balance = self.balance_of(&from);
        require!(amount <= balance, LotteryError::InsufficientBalance);
        let supply = self
            .total_supply
            .checked_sub(amount)
            .ok_or(LotteryError::ArithmeticOverflow)?;
        self.total_supply = supply;
        self.balances.insert(from, balance - amount);
        Ok(())
    }

    /// Value front door: `value` base units mint `value / 10^16` tokens.
    /// Fails unless `value` is an exact multiple of the token price.
    ///
    /// Returns the number of tokens minted.
    pub fn deposit(&mut self, sender: Pubkey, value: u64) -> Result<u64> {
        require!(
            value % BASE_UNITS_PER_TOKEN == 0,
            LotteryError::InvalidDepositAmount
        );
        let tokens = value / BASE_UNITS_PER_TOKEN;
        self.mint(sender, tokens)?;
        Ok(tokens)
    }

    // ---- lottery lifecycle ----

    pub fn current_round(&self) -> Option<&LotteryRound> {
        self.rounds.last()
    }

    /// Index of the latest round if it is in `expected` status.
    fn round_in_status(&self, expected: LotteryStatus) -> Result<usize> {
        match self.rounds.last() {
            Some(round) if round.status == expected => Ok(self.rounds.len() - 1),
            _ => err!(LotteryError::InvalidState),
        }
    }

    /// Opens round `previous_id + 1` with a fresh ticket ledger. The latest
    /// round, if any, must be `Completed`.
    ///
    /// Returns the new round id.
    pub fn start_lottery(&mut self, now: i64) -> Result<u64> {
        if let Some(round) = self.rounds.last() {
            require!(
                round.status == LotteryStatus::Completed,
                LotteryError::InvalidState
            );
        }
        let id = self.rounds.len() as u64 + 1;
        self.rounds.push(LotteryRound {
            id,
            status: LotteryStatus::PurchaseTickets,
            start_time: now,
            close_time: 0,
            prize_pool: 0,
            winner: Pubkey::default(),
            tickets: Vec::new(),
        });
        Ok(id)
    }

    /// Burns `count` tokens from `buyer` and credits them as tickets in the
    /// current round. Checks run before any mutation: stage, per-account
    /// cap, then balance.
    pub fn buy_tickets(&mut self, buyer: Pubkey, count: u64) -> Result<()> {
        let idx = self.round_in_status(LotteryStatus::PurchaseTickets)?;
        // Held tickets never exceed the cap, so the subtraction is safe and
        // any count, however large, is reported against the cap.
        let held = self.rounds[idx].ticket_count(&buyer);
        require!(
            count <= MAX_TICKETS_PER_ACCOUNT - held,
            LotteryError::TicketLimitExceeded
        );
        let pool = self.rounds[idx]
            .prize_pool
            .checked_add(count)
            .ok_or(LotteryError::ArithmeticOverflow)?;
        self.burn(buyer, count)?;
        let round = &mut self.rounds[idx];
        round.record_purchase(buyer, count);
        round.prize_pool = pool;
        Ok(())
    }

    /// Closes the purchase stage once at least an hour has elapsed since the
    /// round opened.
    pub fn close_purchase_stage(&mut self, now: i64) -> Result<()> {
        let idx = self.round_in_status(LotteryStatus::PurchaseTickets)?;
        require!(
            now.saturating_sub(self.rounds[idx].start_time) >= PURCHASE_STAGE_SECONDS,
            LotteryError::InvalidState
        );
        let round = &mut self.rounds[idx];
        round.status = LotteryStatus::Closed;
        round.close_time = now;
        Ok(())
    }

    /// Draws one of the `prize_pool` tickets using the revealed random
    /// value, mints `prize_pool - 1` tokens to its holder and the flat
    /// commission to the authority, and completes the round.
    ///
    /// Returns the round id and the winner.
    pub fn complete_lottery(&mut self, draw: u64) -> Result<(u64, Pubkey)> {
        let idx = self.round_in_status(LotteryStatus::Closed)?;
        let round = &self.rounds[idx];
        require!(round.prize_pool > 0, LotteryError::EmptyPool);

        let ticket = draw % round.prize_pool;
        let winner = round
            .winning_ticket_holder(ticket)
            .ok_or(LotteryError::EmptyPool)?;
        let prize = round.prize_pool - LOTTERY_COMMISSION;

        // Every ticket was burned at purchase, so once the whole pool fits
        // back into the supply neither mint below can fail.
        self.total_supply
            .checked_add(round.prize_pool)
            .ok_or(LotteryError::ArithmeticOverflow)?;

        let authority = self.authority;
        self.mint(winner, prize)?;
        self.mint(authority, LOTTERY_COMMISSION)?;

        let round = &mut self.rounds[idx];
        round.status = LotteryStatus::Completed;
        round.winner = winner;
        Ok((round.id, winner))
    }

    // ---- queries ----

    pub fn current_lottery_status(&self) -> LotteryStatus {
        self.current_round()
            .map(|round| round.status)
            .unwrap_or(LotteryStatus::NotStarted)
    }

    pub fn current_total_purchased_tickets(&self) -> u64 {
        self.current_round().map(|round| round.prize_pool).unwrap_or(0)
    }

    pub fn amount_of_tickets(&self, account: &Pubkey) -> u64 {
        self.current_round()
            .map(|round| round.ticket_count(account))
            .unwrap_or(0)
    }

    pub fn winner_of_lottery(&self) -> Option<Pubkey> {
        self.current_round()
            .filter(|round| round.status == LotteryStatus::Completed)
            .map(|round| round.winner)
    }

    /// Round lookup by id. Id 0 is the reserved sentinel and always `None`.
    pub fn lottery(&self, id: u64) -> Option<&LotteryRound> {
        if id == 0 {
            return None;
        }
        self.rounds.get(id as usize - 1)
    }
}
