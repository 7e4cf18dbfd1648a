//! Device runtime port for tensor backend probing.
//!
//! This port abstracts the tensor backend (availability queries, device
//! enumeration, tensor allocation) from the diagnostic flow. The real
//! implementation lives in cudacheck-runtime; tests use stubs.
//!
//! # Design Notes
//!
//! - Core owns the trait and types (pure)
//! - Runtime owns the implementation (candle + driver tooling)
//! - CLI injects the runtime via main.rs

use crate::device::{BackendInfo, DeviceSelector, GpuDevice, TensorSummary};
use thiserror::Error;

/// Errors that can occur while probing the device runtime.
#[derive(Debug, Error)]
pub enum DeviceRuntimeError {
    /// The tensor backend failed to initialize. Fatal in the prober.
    #[error("Backend initialization failed: {0}")]
    Init(String),

    /// The backend rejected a tensor operation.
    #[error("Backend error: {0}")]
    Backend(String),

    /// Device enumeration via driver tooling failed.
    #[error("Device probe failed: {0}")]
    Probe(String),

    /// A device name string could not be resolved.
    #[error("Unknown device {0:?}")]
    UnknownDevice(String),

    /// A device ordinal was outside the visible range.
    #[error("Device index {index} out of range (0..{count})")]
    DeviceOutOfRange { index: usize, count: usize },
}

/// Result type for device runtime operations.
pub type DeviceRuntimeResult<T> = Result<T, DeviceRuntimeError>;

/// Port for probing the tensor backend and allocating test tensors.
///
/// Implementations query device availability once, at construction, and
/// answer from that snapshot afterwards. This matches the driver's own
/// behavior: the visible-device set is computed at first initialization
/// and later environment changes have no effect.
///
/// # Example
///
/// ```ignore
/// use cudacheck_core::ports::DeviceRuntimePort;
///
/// fn check_devices(runtime: &dyn DeviceRuntimePort) {
///     if runtime.cuda_available() {
///         for dev in runtime.devices().unwrap_or_default() {
///             println!("GPU {}: {}", dev.index, dev.name);
///         }
///     }
/// }
/// ```
pub trait DeviceRuntimePort: Send + Sync {
    /// Backend identity: crate name, version, installed CUDA toolkit.
    fn backend_info(&self) -> BackendInfo;

    /// Whether a CUDA device can be used for allocation.
    fn cuda_available(&self) -> bool;

    /// Number of visible CUDA devices.
    fn device_count(&self) -> DeviceRuntimeResult<usize>;

    /// Enumerate visible CUDA devices by ordinal.
    fn devices(&self) -> DeviceRuntimeResult<Vec<GpuDevice>>;

    /// Allocate a `rows`x`cols` random-normal f32 tensor on the selected
    /// device and report where it landed.
    fn alloc_randn(
        &self,
        rows: usize,
        cols: usize,
        selector: &DeviceSelector,
    ) -> DeviceRuntimeResult<TensorSummary>;

    /// Build an f32 tensor from literal values, pinned to the selected
    /// device, and report where it landed.
    fn alloc_from_values(
        &self,
        values: &[f32],
        selector: &DeviceSelector,
    ) -> DeviceRuntimeResult<TensorSummary>;
}
