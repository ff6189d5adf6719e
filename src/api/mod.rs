pub mod account;
pub mod jwt;
