//! The pre-init configurator.
//!
//! Installs a `CUDA_VISIBLE_DEVICES` value before the device runtime is
//! constructed, then re-runs the availability and allocation checks.
//! Unlike the prober, failures here propagate: `main` returns
//! `anyhow::Result`, so an error prints its chain and exits non-zero.

use std::io::Write;

use anyhow::Context;
use cudacheck_core::DeviceSelector;
use cudacheck_core::ports::{DeviceRuntimePort, DeviceRuntimeResult};

use super::display::{GREEN, RED, RESET, banner};

/// Visibility spec installed before backend init.
pub const VISIBLE_DEVICES_SPEC: &str = "1,2,3,4,5,6,7";

/// Set the visibility variable, then initialize and probe the runtime.
///
/// `init` must perform the backend's first device enumeration when
/// called; the environment write above it is load-bearing because the
/// driver caches the visible-device set at that moment.
pub fn execute<W, R, F>(out: &mut W, init: F) -> anyhow::Result<()>
where
    W: Write,
    R: DeviceRuntimePort,
    F: FnOnce() -> DeviceRuntimeResult<R>,
{
    // Must precede init(): the driver snapshots visibility on first use.
    cudacheck_runtime::env::set_cuda_visible_devices(VISIBLE_DEVICES_SPEC);

    banner(out, "CUDA Test with Pre-Init Environment Setting")?;
    writeln!(out, "CUDA_VISIBLE_DEVICES set to: {VISIBLE_DEVICES_SPEC}")?;

    let runtime = init().context("tensor backend failed to initialize")?;
    tracing::debug!("pre-init configurator runtime ready");

    let info = runtime.backend_info();
    writeln!(out, "\n{GREEN}✓ Backend: {} {}{RESET}", info.name, info.version)?;
    writeln!(
        out,
        "{GREEN}✓ CUDA available: {}{RESET}",
        runtime.cuda_available()
    )?;

    if runtime.cuda_available() {
        writeln!(
            out,
            "{GREEN}✓ CUDA device count: {}{RESET}",
            runtime.device_count()?
        )?;
        for device in runtime.devices()? {
            writeln!(out, "{GREEN}✓ GPU {}: {}{RESET}", device.index, device.name)?;
        }

        let selector = DeviceSelector::Named("cuda:0".to_string());
        let summary = runtime.alloc_randn(3, 3, &selector)?;
        writeln!(out, "{GREEN}✓ Tensor created on: {}{RESET}", summary.device)?;
    } else {
        writeln!(out, "{RED}✗ CUDA not available{RESET}")?;
    }

    Ok(())
}
