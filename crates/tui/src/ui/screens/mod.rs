pub mod add;
pub mod chat;
pub mod dashboard;
pub mod transactions;
