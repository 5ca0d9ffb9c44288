//! # VIEWCULL
//!
//! Viewport culling over a hierarchical scene graph. Given a view rectangle,
//! a [`Culler`] marks every node in its registered subtrees visible or
//! hidden so the renderer can skip what is off screen.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                     CULL PASS                        │
//! ├──────────────────────────────────────────────────────┤
//! │  Registered roots → Bounds → Intersect → Toggle      │
//! │                        ↓                             │
//! │              Fully contained? ── yes → prune         │
//! │                        ↓ no                          │
//! │                    Children (recurse)                │
//! └──────────────────────────────────────────────────────┘
//! ```
//!
//! The scene graph itself is external: anything implementing [`SceneGraph`]
//! can be culled.
//!
//! ## Example
//!
//! ```rust,ignore
//! use viewcull::{Culler, Rect};
//!
//! let mut culler = Culler::new();
//! culler.register_all([hud, world]);
//!
//! // Once per frame, before rendering
//! culler.cull(&mut scene, &Rect::new(0.0, 0.0, 1920.0, 1080.0), false);
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod config;
pub mod culler;
pub mod error;
pub mod graph;
pub mod rect;
pub mod stats;

pub use config::{CullerConfig, Toggle};
pub use culler::Culler;
pub use error::{CullError, CullResult};
pub use graph::SceneGraph;
pub use rect::Rect;
pub use stats::CullStats;
