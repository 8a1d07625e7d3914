use anchor_lang::prelude::*;

#[error_code]
pub enum LotteryError {
    #[msg("Caller is not the lottery authority")]
    Unauthorized,
    #[msg("Operation is not valid in the current lottery state")]
    InvalidState,
    #[msg("Insufficient token balance")]
    InsufficientBalance,
    #[msg("Insufficient allowance")]
    InsufficientAllowance,
    #[msg("Cumulative ticket limit for this round exceeded")]
    TicketLimitExceeded,
    #[msg("Deposit must be a non-fractional multiple of the token price")]
    InvalidDepositAmount,
    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,
    #[msg("No tickets were sold in this round")]
    EmptyPool,
    #[msg("Randomness has not been resolved yet")]
    RandomnessNotResolved,
}
