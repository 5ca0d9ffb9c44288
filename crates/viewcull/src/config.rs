//! # Culler Configuration
//!
//! Both options are fixed at construction. A config can be built in code or
//! parsed once at startup from TOML:
//!
//! ```toml
//! recursive = true
//! toggle = "renderable"
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CullError, CullResult};

/// Which per-node flag the culler writes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Toggle {
    /// The node and its subtree are hidden from every pass.
    #[default]
    Visible,
    /// The node is skipped by the renderer but still updated.
    Renderable,
}

impl Toggle {
    /// Returns the config name of this toggle.
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Visible => "visible",
            Self::Renderable => "renderable",
        }
    }
}

impl fmt::Display for Toggle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Toggle {
    type Err = CullError;

    fn from_str(s: &str) -> CullResult<Self> {
        match s {
            "visible" => Ok(Self::Visible),
            "renderable" => Ok(Self::Renderable),
            other => Err(CullError::UnknownToggle(other.to_string())),
        }
    }
}

/// Construction-time options for a [`Culler`](crate::Culler).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CullerConfig {
    /// Cull subtrees, pruning below fully contained nodes.
    pub recursive: bool,
    /// Flag written on each node.
    pub toggle: Toggle,
}

impl Default for CullerConfig {
    fn default() -> Self {
        Self {
            recursive: true,
            toggle: Toggle::Visible,
        }
    }
}

impl CullerConfig {
    /// Sets whether culling recurses into children.
    #[must_use]
    pub const fn with_recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// Sets the flag the culler writes.
    #[must_use]
    pub const fn with_toggle(mut self, toggle: Toggle) -> Self {
        self.toggle = toggle;
        self
    }

    /// Parses a config from a TOML document. Missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`CullError::InvalidConfig`] for malformed TOML, unknown keys,
    /// or an unknown toggle name.
    pub fn from_toml_str(source: &str) -> CullResult<Self> {
        toml::from_str(source).map_err(|e| CullError::InvalidConfig(e.to_string()))
    }
}
