// SPDX-License-Identifier: MPL-2.0
//! UI state kept outside the main App struct.

pub mod drop_gesture;

pub use drop_gesture::{DropDecision, DropGesture};
