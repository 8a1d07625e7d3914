pub mod admin;
pub mod approve;
pub mod buy_tickets;
pub mod close_purchase_stage;
pub mod complete_lottery;
pub mod deposit;
pub mod start_lottery;
pub mod transfer;
pub mod transfer_from;

pub use admin::*;
pub use approve::*;
pub use buy_tickets::*;
pub use close_purchase_stage::*;
pub use complete_lottery::*;
pub use deposit::*;
pub use start_lottery::*;
pub use transfer::*;
pub use transfer_from::*;
