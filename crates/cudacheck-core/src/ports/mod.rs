//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from
//! infrastructure. They contain no implementation details and use only
//! domain types.
//!
//! # Design Rules
//!
//! - No tensor backend types in any signature
//! - No process/command implementation details
//! - Intent-based methods (what is probed, not how)

pub mod device_runtime;

pub use device_runtime::{DeviceRuntimeError, DeviceRuntimePort, DeviceRuntimeResult};
