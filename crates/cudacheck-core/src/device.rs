//! Device and tensor description types.

use std::fmt;

/// Identity of the tensor backend, as reported after initialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendInfo {
    /// Backend crate name (e.g., "candle-core").
    pub name: String,
    /// Backend version string.
    pub version: String,
    /// Installed CUDA toolkit release (e.g., "12.0"), if any.
    /// None means no toolkit was found on the system.
    pub cuda_toolkit: Option<String>,
}

/// A single visible accelerator device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GpuDevice {
    /// Zero-based device ordinal within the visible set.
    pub index: usize,
    /// Marketing name as reported by the driver (e.g., "NVIDIA A100").
    pub name: String,
}

/// How a caller addresses a device when allocating a tensor.
///
/// Mirrors the two addressing forms accelerator APIs accept: a bare
/// ordinal, or a device string such as `"cuda"` / `"cuda:1"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeviceSelector {
    /// Device by zero-based ordinal.
    Index(usize),
    /// Device by name string. `"cuda"` means the default device (ordinal 0).
    Named(String),
}

impl fmt::Display for DeviceSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(i) => write!(f, "cuda:{i}"),
            Self::Named(name) => write!(f, "{name}"),
        }
    }
}

/// Summary of a successfully allocated tensor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TensorSummary {
    /// Tensor shape, outermost dimension first.
    pub shape: Vec<usize>,
    /// Element type (e.g., "f32").
    pub dtype: &'static str,
    /// Resolved device tag the tensor ended up on (e.g., "cuda:0").
    pub device: String,
}

impl fmt::Display for TensorSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dims: Vec<String> = self.shape.iter().map(ToString::to_string).collect();
        write!(f, "{}[{}] on {}", self.dtype, dims.join("x"), self.device)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selector_display_forms() {
        assert_eq!(DeviceSelector::Index(0).to_string(), "cuda:0");
        assert_eq!(DeviceSelector::Index(3).to_string(), "cuda:3");
        assert_eq!(
            DeviceSelector::Named("cuda".to_string()).to_string(),
            "cuda"
        );
    }

    #[test]
    fn tensor_summary_display() {
        let summary = TensorSummary {
            shape: vec![3, 3],
            dtype: "f32",
            device: "cuda:0".to_string(),
        };
        assert_eq!(summary.to_string(), "f32[3x3] on cuda:0");
    }
}
