//! Iframe sizing and frame-flattening policy for layout engines.
//!
//! Pure decision logic over a host-owned layout tree. The core needs no
//! allocator and is `no_std` compatible.
//!
//! # Modules
//!
//! - [`geometry`]: Points, sizes, rects and border edges in layout units
//! - [`style`]: Lengths, scroll policy, HTML dimension parsing
//! - [`host`]: Traits the host layout engine implements for the policy
//! - [`policy`]: Flattening decision, per-axis sizing, per-reflow layout
//! - `attrs`: Iframe attribute parsing (feature `attrs`)
//! - `svg`: Diagnostic rendering of a layout outcome (feature `svg`)

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod error;
pub mod geometry;
pub mod host;
pub mod policy;
pub mod style;

#[cfg(feature = "attrs")]
pub mod attrs;
#[cfg(feature = "svg")]
pub mod svg;

pub use error::ParseError;
pub use geometry::{Edges, Point, Rect, Size};
pub use host::{EmbeddedView, FrameBox, FramePage, HostViewport};
pub use policy::{
    Decision, FlattenPolicy, FlatteningStrategy, FrameLayout, SkipReason, flattened_extent,
};
pub use style::{FrameStyle, Length, ScrollPolicy};
