// SPDX-License-Identifier: MPL-2.0
//! User interface: the page layout and its styling.
//!
//! - [`drop_target`] - Toolbar, drop target and button row
//! - [`state`] - Drop gesture tracking
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theme`] - Container styles and colors
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod drop_target;
pub mod state;
pub mod theme;
pub mod theming;
