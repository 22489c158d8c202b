//! # Switch Types
//!
//! This crate provides the value types shared by the debouncers in
//! `switch-debounce` and the code consuming their results.
//!
//! ## Modules
//!
//! - [`level`] - Two-level logical value of a single switch
//! - [`flank`] - Edge produced by a change of debounced state
//! - [`keypad`] - Switch identifiers of a single-press keypad and their raw byte encoding

#![no_std]

pub mod flank;
pub mod keypad;
pub mod level;

pub use flank::Flank;
pub use keypad::SWITCH_NONE;
pub use level::Level;
