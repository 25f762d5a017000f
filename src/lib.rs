//! Leave request rules and approval-chain engine
//!
//! This crate validates employee leave requests against a company leave
//! policy, derives the approval chain a request must pass through, lists
//! the work-handover obligations, and computes leave pay.
//!
//! The [`rules::RulesEngine`] is the entry point; [`config::ConfigLoader`]
//! supplies the employee roster and leave balances, and [`api`] exposes
//! the engine over HTTP.

#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod rules;
