pub mod account;

pub use account::{Account, AccountPayload, NewAccount};
