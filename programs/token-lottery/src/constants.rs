use anchor_lang::constant;

/// Seed of the program-wide state account.
#[constant]
pub const LOTTERY_STORE_SEED: &[u8] = b"lottery_store";

/// Lamports per ledger token. Deposits must be an exact multiple.
pub const BASE_UNITS_PER_TOKEN: u64 = 10_000_000_000_000_000;

/// Cumulative tickets one account may hold in a single round.
pub const MAX_TICKETS_PER_ACCOUNT: u64 = 200;

/// Minimum seconds the purchase stage stays open.
pub const PURCHASE_STAGE_SECONDS: i64 = 3600;

/// Flat fee minted to the authority when a round completes.
pub const LOTTERY_COMMISSION: u64 = 1;

/// Total allocation for the store account, discriminator included.
/// Bounded by the runtime's 10 KiB limit for CPI-created accounts.
pub const MAX_STORE_SPACE: usize = 10_240;
