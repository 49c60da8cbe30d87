//! greeter-core - Pure greeting logic
//!
//! This crate has no IO, no logging and no CLI. It maps a name to a greeting
//! and defines the capability used to attach an extra, foreign-supplied line.

#![forbid(unsafe_code)]

mod foreign;
mod greet;

pub use foreign::{greet_with, ForeignGreeter, StaticGreeter, HI_FROM_GO};
pub use greet::{greet, ANONYMOUS, PREFIX};
