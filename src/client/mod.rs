//! Client-side request lifecycle for the directory view.
//!
//! The controller here is deliberately independent of any UI framework: it
//! consumes input events, decides when a fetch is due, and accepts tagged
//! responses. The embedding layer owns the actual HTTP transport and timers.

pub mod controller;
pub mod debounce;
