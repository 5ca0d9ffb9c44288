//! # VIEWCULL Scene
//!
//! Reference scene graph for the [`viewcull`] culler:
//! - Generational [`NodeId`] handles: a despawned node is detected, never aliased
//! - [`Affine2`] local transforms with cached world transforms
//! - Subtree bounds that nest by construction (a node's bounds are the union
//!   of its own content and all descendant bounds)
//!
//! ## Example
//!
//! ```rust,ignore
//! use viewcull::{Culler, Rect};
//! use viewcull_scene::{Affine2, Scene};
//!
//! let mut scene = Scene::new();
//! let layer = scene.spawn(None);
//! let sprite = scene.spawn(Some(Rect::new(0.0, 0.0, 64.0, 64.0)));
//! scene.add_child(layer, sprite)?;
//! scene.set_transform(sprite, Affine2::translation(2000.0, 0.0))?;
//!
//! let mut culler = Culler::new();
//! culler.register(layer).cull(&mut scene, &Rect::new(0.0, 0.0, 1280.0, 720.0), false);
//! assert!(!scene.visible(sprite));
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod affine;
pub mod error;
pub mod id;
pub mod scene;

pub use affine::Affine2;
pub use error::{SceneError, SceneResult};
pub use id::NodeId;
pub use scene::Scene;
