//! Adapter utilities for the `carousel` crate.
//!
//! The `carousel` crate is UI-agnostic and only emits target geometry through its `Surface`
//! trait. This crate provides small, framework-neutral helpers commonly needed by adapters:
//!
//! - Cubic bezier sampling for the carousel's named timing functions
//! - An in-memory surface that eases each slide toward its target style
//! - A controller that keeps the engine and that surface on one clock
//!
//! This crate is intentionally framework-agnostic (no ratatui/egui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod board;
mod controller;
mod easing;
mod tween;

#[cfg(test)]
mod tests;

pub use board::{RenderedSlide, SlideBoard};
pub use controller::Controller;
pub use easing::{CubicBezier, Easing};
pub use tween::StyleTween;
