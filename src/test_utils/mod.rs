//! Test utilities shared by unit and HTTP-level tests.
//!
//! This module provides:
//! - A configuration factory with every setting filled in
//! - A scripted stand-in for the media service management API
//! - `TestAppStateBuilder` plus helpers for minting session cookies

mod app_state_builder;
mod factories;
mod room_service_mocks;

pub use app_state_builder::*;
pub use factories::*;
pub use room_service_mocks::*;
