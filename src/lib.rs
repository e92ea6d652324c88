pub mod balance;
pub mod charts;
pub mod config;
pub mod error;
pub mod exchange;
pub mod forms;
pub mod ledger;
pub mod loader;
pub mod repository;
pub mod sample_data;
pub mod schemas;
pub mod session;
pub mod users;

pub use balance::{settle_group, GroupSettlement, MemberBalance, SettlementPosition};
pub use ledger::{filter_entries, FilteredLedger, LedgerFilter};
pub use schemas::{AdminUser, EntryKind, Group, GroupExpense, GroupMember, LedgerEntry, UserStatus};
