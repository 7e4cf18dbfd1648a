//! Process environment mutation for the pre-init configurator.

use cudacheck_core::CUDA_VISIBLE_DEVICES;

/// Set `CUDA_VISIBLE_DEVICES` for the current process.
///
/// Must run before the device runtime initializes: the driver reads the
/// variable once, at first initialization, and caches the visible-device
/// set. Setting it afterwards has no effect.
#[allow(unsafe_code)]
pub fn set_cuda_visible_devices(spec: &str) {
    // SAFETY: called from single-threaded startup code, before any other
    // thread exists that could read the environment concurrently.
    unsafe { std::env::set_var(CUDA_VISIBLE_DEVICES, spec) };
    tracing::debug!(%spec, "CUDA_VISIBLE_DEVICES set");
}
