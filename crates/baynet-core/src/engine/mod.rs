//! The inference engine for discrete Bayesian networks.
//!
//! This module provides:
//! - **errors**: Error type shared by every operation
//! - **evidence**: Truth-value assignments to a subset of variables
//! - **network**: The contract a network must satisfy to be queried
//! - **table**: A table-backed network implementation
//! - **enumeration**: Joint probability by summing out unobserved variables
//! - **normalize**: Rescaling of unnormalized masses
//! - **query**: Enumeration-ask entry points

pub mod enumeration;
pub mod errors;
pub mod evidence;
pub mod network;
pub mod normalize;
pub mod query;
pub mod table;
