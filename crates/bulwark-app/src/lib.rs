//! BULWARK headless application.
//!
//! Wires the simulation engine to a fixed-step game-loop thread and drives
//! a session end to end with a small scripted operator.

pub mod autopilot;
pub mod config;
pub mod game_loop;
pub mod state;

pub use bulwark_core as core;
