//! A headless 3-D perspective carousel engine.
//!
//! For adapter-level utilities (easing evaluation, style tweens, an in-memory surface), see the
//! `carousel-adapter` crate.
//!
//! The engine renders a potentially huge ordered sequence of slides as a perspective carousel
//! while keeping three nested index ranges consistent:
//! - the total sequence,
//! - the rendered window: a bounded buffer (20 slides per side by default) attached to the
//!   rendering surface,
//! - the visible window: the active slide plus up to 5 dimmed slides per flank.
//!
//! Moving the active slide by one runs a two-phase transition; moving it further runs a
//! frame-paced spin of single steps. After each committed step the rendered window follows,
//! attaching slides ahead and detaching an equal block behind.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - a [`Surface`] that owns the visual elements and applies styles
//! - a monotonic clock (`now_ms`) and a per-frame call to [`Carousel::tick`]
//! - index-selection requests (e.g. from clicks), already mapped to slide indexes
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod carousel;
pub mod constants;
mod error;
pub mod geometry;
mod options;
mod scheduler;
mod state;
mod surface;
pub mod timing;
mod types;
pub mod window;


pub use carousel::Carousel;
pub use error::CarouselError;
pub use options::{CarouselOptions, clamp_visible_count, clamp_visible_ratio};
pub use state::CarouselSnapshot;
pub use surface::Surface;
pub use timing::TransitionTiming;
pub use types::{
    AttachAt, CarouselInput, ContainerStyle, Direction, IndexWindow, SchedulerPhase, Slide,
    SlideStyle, SpinState, TimingFunction, VisualState,
};
pub use window::{Rebalance, WindowManager};
