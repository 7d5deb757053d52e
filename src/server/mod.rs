//! Sequential TCP acceptor.

pub mod listener;
