//! Tensor backend and OS-level probing for cudacheck.
//!
//! This crate provides `CandleRuntime`, the real implementation of
//! `DeviceRuntimePort` from cudacheck-core. It performs active probing:
//! tensor allocation through candle, device enumeration via nvidia-smi,
//! and toolkit detection via nvcc.

#![deny(unused_crate_dependencies)]

pub mod backend;
pub mod env;
pub mod nvidia;

// Re-export the port implementation
pub use backend::CandleRuntime;
