//! Command implementations for the txnpack CLI

pub mod generate;
