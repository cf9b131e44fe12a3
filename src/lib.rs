//! Remaining-time engine for auction listings.
//!
//! [`domain::format_remaining`] turns a millisecond delta into Arabic text;
//! [`domain::time_remaining`] does the same for an end date and a given "now".

pub mod catalog;
pub mod config;
pub mod domain;
pub mod errors;
pub mod logging;
pub mod monitor;

pub use domain::{format_remaining, time_remaining, time_remaining_with};
pub use errors::CountdownError;
