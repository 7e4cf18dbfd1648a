//! Core domain types and port definitions for cudacheck.
//!
//! This crate is pure: no process execution, no tensor backend, no
//! environment mutation. Adapters (cudacheck-runtime) implement the
//! ports defined here; the CLI wires them together.

#![deny(unused_crate_dependencies)]

pub mod device;
pub mod env;
pub mod ports;

// Re-export commonly used types for convenience
pub use device::{BackendInfo, DeviceSelector, GpuDevice, TensorSummary};
pub use env::{CUDA_HOME, CUDA_VISIBLE_DEVICES, EnvReport, NOT_SET};
pub use ports::{DeviceRuntimeError, DeviceRuntimePort, DeviceRuntimeResult};
