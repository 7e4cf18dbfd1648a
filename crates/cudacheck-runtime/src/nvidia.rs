//! NVIDIA driver and toolkit probing via command execution.
//!
//! Device names come from nvidia-smi and the toolkit release from nvcc.
//! The parsers are split out as pure functions over `&str` so they can be
//! tested against canned tool output.

use cudacheck_core::GpuDevice;
use std::process::Command;

/// Enumerate the visible NVIDIA devices by ordinal.
///
/// Returns an empty list when nvidia-smi is missing or fails; callers
/// treat that as "no enumerable devices", not as an error.
pub fn visible_devices() -> Vec<GpuDevice> {
    query_smi_names()
        .map(|raw| parse_device_names(&raw))
        .unwrap_or_default()
}

fn query_smi_names() -> Option<String> {
    let output = Command::new("nvidia-smi")
        .args(["--query-gpu=name", "--format=csv,noheader"])
        .output()
        .ok()?;

    if !output.status.success() {
        return None;
    }

    Some(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Parse nvidia-smi name output (one device name per line).
pub fn parse_device_names(raw: &str) -> Vec<GpuDevice> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .enumerate()
        .map(|(index, name)| GpuDevice {
            index,
            name: name.to_string(),
        })
        .collect()
}

/// Check if the NVIDIA CUDA toolkit is installed and report its release.
pub fn toolkit_version() -> Option<String> {
    if let Ok(output) = Command::new("nvcc").arg("--version").output()
        && output.status.success()
    {
        return parse_nvcc_release(&String::from_utf8_lossy(&output.stdout));
    }

    None
}

/// Extract the release from nvcc version output.
pub fn parse_nvcc_release(stdout: &str) -> Option<String> {
    // Extract version from "Cuda compilation tools, release 12.0, V12.0.140"
    let line = stdout.lines().find(|l| l.contains("release"))?;
    let version = line
        .split("release")
        .nth(1)?
        .trim()
        .split(',')
        .next()
        .unwrap_or("")
        .trim();

    if version.is_empty() {
        None
    } else {
        Some(version.to_string())
    }
}
