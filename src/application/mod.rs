// SPDX-License-Identifier: MPL-2.0
//! Application layer - Ports and the drop use case.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure modules (`dicom`, `loader`, `render`) implement the ports
//! - The drop handler only talks to the ports, so it can run against stubs

pub mod port;
