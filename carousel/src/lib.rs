//! A headless, gesture-driven snapping carousel.
//!
//! For adapter-level utilities (pointer gesture recognition, binding items to views), see the
//! `carousel-adapter` crate.
//!
//! The engine lays out a horizontal row of fixed-width items, follows drag gestures, and on
//! release snaps to a discrete item index: slow drags snap to the nearest item, swipes project
//! the gesture's momentum first. The snap is an explicit tween advanced by the host.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - viewport width
//! - drag updates and releases (with predicted end positions)
//! - a millisecond clock for `tick`
#![forbid(unsafe_code)]

#[macro_use]
mod macros;

mod carousel;
mod options;
pub mod snap;
mod state;
mod tween;
mod types;


pub use carousel::Carousel;
pub use options::{CarouselOptions, OnIndexChangedCallback};
pub use state::CarouselState;
pub use tween::{Tween, spring};
pub use types::{
    DragEnd, DragState, DragUpdate, GestureKind, ItemLayout, ItemRange, SnapResolution,
};
