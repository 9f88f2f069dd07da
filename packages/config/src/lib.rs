// ABOUTME: Configuration surface for Tasklist
// ABOUTME: Re-exports the environment variable names read at startup

pub mod constants;

pub use constants::*;
