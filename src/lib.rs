//! An agent wandering across Comfort, Stretch and Growth zones, driven by
//! confidence, curiosity and learning progress, rendered in the terminal.

#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::collapsible_if)]

pub mod app;
pub mod config;
pub mod error;
pub mod simulation;
pub mod ui;
