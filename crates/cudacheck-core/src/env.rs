//! Typed view of the CUDA-related process environment.

/// Controls which physical accelerators the driver enumerates as usable.
pub const CUDA_VISIBLE_DEVICES: &str = "CUDA_VISIBLE_DEVICES";

/// Points at the installed CUDA toolkit root.
pub const CUDA_HOME: &str = "CUDA_HOME";

/// Placeholder printed for variables absent from the environment.
pub const NOT_SET: &str = "Not set";

/// Snapshot of the CUDA-related environment variables at capture time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvReport {
    /// Value of `CUDA_VISIBLE_DEVICES`, if set.
    pub cuda_visible_devices: Option<String>,
    /// Value of `CUDA_HOME`, if set.
    pub cuda_home: Option<String>,
}

impl EnvReport {
    /// Capture the current process environment.
    pub fn capture() -> Self {
        Self {
            cuda_visible_devices: std::env::var(CUDA_VISIBLE_DEVICES).ok(),
            cuda_home: std::env::var(CUDA_HOME).ok(),
        }
    }

    /// Render a captured value for display, substituting the placeholder
    /// when the variable was absent.
    pub fn display_value(value: Option<&str>) -> &str {
        value.unwrap_or(NOT_SET)
    }
}
