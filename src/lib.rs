//! Settlement calculation engine for Brazilian labor claims (CLT)
//!
//! This crate computes the amounts owed on termination of employment (13th
//! salary, vacation, FGTS, overtime with its reflexes, and the art. 477 and
//! art. 467 penalties) and renders them as the plain-text statement that is
//! embedded in a labor petition, with every amount also written out in
//! Portuguese.

#![warn(missing_docs)]

pub mod api;
mod arithmetic;
pub mod calculation;
pub mod config;
pub mod error;
pub mod formatting;
pub mod models;
pub mod report;
