//! Candle-backed implementation of `DeviceRuntimePort`.
//!
//! `CandleRuntime` snapshots the visible-device set once, at `init`, and
//! answers enumeration queries from that snapshot afterwards. This mirrors
//! the driver's own enumeration caching: environment changes after init
//! are deliberately not observed.

use candle_core::{DType, Device, DeviceLocation, Tensor};
use cudacheck_core::ports::{DeviceRuntimeError, DeviceRuntimePort, DeviceRuntimeResult};
use cudacheck_core::{BackendInfo, DeviceSelector, GpuDevice, TensorSummary};

use crate::nvidia;

// Keep in sync with the candle-core version in the workspace manifest.
const BACKEND_NAME: &str = "candle-core";
const BACKEND_VERSION: &str = "0.9";

/// Real device runtime backed by candle.
///
/// Construct via [`CandleRuntime::init`] in `main` and pass to handlers
/// as `&dyn DeviceRuntimePort`.
pub struct CandleRuntime {
    cuda_available: bool,
    devices: Vec<GpuDevice>,
    cuda_toolkit: Option<String>,
}

impl CandleRuntime {
    /// Initialize the backend and snapshot the visible-device set.
    ///
    /// Fails only when the backend itself is unusable; a machine without
    /// a GPU initializes fine and reports CUDA as unavailable.
    pub fn init() -> DeviceRuntimeResult<Self> {
        // Smoke allocation on the CPU backend. Failure here means the
        // backend cannot be used at all, the fatal error class.
        Tensor::zeros((1,), DType::F32, &Device::Cpu)
            .map_err(|e| DeviceRuntimeError::Init(e.to_string()))?;

        let cuda_available = candle_core::utils::cuda_is_available();
        let devices = if cuda_available {
            nvidia::visible_devices()
        } else {
            Vec::new()
        };
        let cuda_toolkit = nvidia::toolkit_version();

        tracing::debug!(
            cuda_available,
            device_count = devices.len(),
            "device runtime initialized"
        );

        Ok(Self {
            cuda_available,
            devices,
            cuda_toolkit,
        })
    }

    /// Resolve a selector to a device ordinal, bounds-checked against the
    /// snapshot when one exists.
    fn resolve(&self, selector: &DeviceSelector) -> DeviceRuntimeResult<usize> {
        let ordinal = match selector {
            DeviceSelector::Index(index) => *index,
            DeviceSelector::Named(name) => parse_device_name(name)?,
        };

        // nvidia-smi may be absent even when CUDA works; only enforce the
        // bound when enumeration produced a snapshot.
        if !self.devices.is_empty() && ordinal >= self.devices.len() {
            return Err(DeviceRuntimeError::DeviceOutOfRange {
                index: ordinal,
                count: self.devices.len(),
            });
        }

        Ok(ordinal)
    }

    fn cuda_device(&self, selector: &DeviceSelector) -> DeviceRuntimeResult<Device> {
        let ordinal = self.resolve(selector)?;
        Device::new_cuda(ordinal).map_err(|e| DeviceRuntimeError::Backend(e.to_string()))
    }
}

impl DeviceRuntimePort for CandleRuntime {
    fn backend_info(&self) -> BackendInfo {
        BackendInfo {
            name: BACKEND_NAME.to_string(),
            version: BACKEND_VERSION.to_string(),
            cuda_toolkit: self.cuda_toolkit.clone(),
        }
    }

    fn cuda_available(&self) -> bool {
        self.cuda_available
    }

    fn device_count(&self) -> DeviceRuntimeResult<usize> {
        Ok(self.devices.len())
    }

    fn devices(&self) -> DeviceRuntimeResult<Vec<GpuDevice>> {
        Ok(self.devices.clone())
    }

    fn alloc_randn(
        &self,
        rows: usize,
        cols: usize,
        selector: &DeviceSelector,
    ) -> DeviceRuntimeResult<TensorSummary> {
        let device = self.cuda_device(selector)?;
        let tensor = Tensor::randn(0f32, 1f32, (rows, cols), &device)
            .map_err(|e| DeviceRuntimeError::Backend(e.to_string()))?;
        Ok(summarize(&tensor))
    }

    fn alloc_from_values(
        &self,
        values: &[f32],
        selector: &DeviceSelector,
    ) -> DeviceRuntimeResult<TensorSummary> {
        let device = self.cuda_device(selector)?;
        let tensor = Tensor::from_slice(values, values.len(), &device)
            .map_err(|e| DeviceRuntimeError::Backend(e.to_string()))?;
        Ok(summarize(&tensor))
    }
}

/// Resolve a device name string to an ordinal. `"cuda"` means device 0.
fn parse_device_name(name: &str) -> DeviceRuntimeResult<usize> {
    if name == "cuda" {
        return Ok(0);
    }
    if let Some(rest) = name.strip_prefix("cuda:")
        && let Ok(ordinal) = rest.parse()
    {
        return Ok(ordinal);
    }
    Err(DeviceRuntimeError::UnknownDevice(name.to_string()))
}

fn summarize(tensor: &Tensor) -> TensorSummary {
    let device = match tensor.device().location() {
        DeviceLocation::Cpu => "cpu".to_string(),
        DeviceLocation::Cuda { gpu_id } => format!("cuda:{gpu_id}"),
        DeviceLocation::Metal { gpu_id } => format!("metal:{gpu_id}"),
    };
    TensorSummary {
        shape: tensor.dims().to_vec(),
        dtype: "f32",
        device,
    }
}
