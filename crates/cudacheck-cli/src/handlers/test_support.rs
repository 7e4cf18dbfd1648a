//! Configurable stub runtime shared by the handler tests.

use cudacheck_core::ports::{DeviceRuntimeError, DeviceRuntimePort, DeviceRuntimeResult};
use cudacheck_core::{BackendInfo, DeviceSelector, GpuDevice, TensorSummary};

pub struct StubRuntime {
    available: bool,
    devices: Vec<GpuDevice>,
    fail_enumeration: bool,
    fail_alloc: bool,
}

impl StubRuntime {
    pub fn without_gpu() -> Self {
        Self {
            available: false,
            devices: Vec::new(),
            fail_enumeration: false,
            fail_alloc: false,
        }
    }

    pub fn with_gpu(name: &str) -> Self {
        Self {
            available: true,
            devices: vec![GpuDevice {
                index: 0,
                name: name.to_string(),
            }],
            fail_enumeration: false,
            fail_alloc: false,
        }
    }

    pub fn failing_enumeration(mut self) -> Self {
        self.fail_enumeration = true;
        self
    }

    pub fn failing_alloc(mut self) -> Self {
        self.fail_alloc = true;
        self
    }

    /// Resolve a selector to the tag a real backend would report.
    fn resolve_tag(selector: &DeviceSelector) -> String {
        match selector {
            DeviceSelector::Index(i) => format!("cuda:{i}"),
            DeviceSelector::Named(name) if name == "cuda" => "cuda:0".to_string(),
            DeviceSelector::Named(name) => name.clone(),
        }
    }

    fn alloc(&self, shape: Vec<usize>, selector: &DeviceSelector) -> DeviceRuntimeResult<TensorSummary> {
        if self.fail_alloc {
            return Err(DeviceRuntimeError::Backend("allocation rejected".to_string()));
        }
        Ok(TensorSummary {
            shape,
            dtype: "f32",
            device: Self::resolve_tag(selector),
        })
    }
}

impl DeviceRuntimePort for StubRuntime {
    fn backend_info(&self) -> BackendInfo {
        BackendInfo {
            name: "stub-backend".to_string(),
            version: "0.0.0".to_string(),
            cuda_toolkit: Some("12.2".to_string()),
        }
    }

    fn cuda_available(&self) -> bool {
        self.available
    }

    fn device_count(&self) -> DeviceRuntimeResult<usize> {
        if self.fail_enumeration {
            return Err(DeviceRuntimeError::Probe("nvidia-smi exploded".to_string()));
        }
        Ok(self.devices.len())
    }

    fn devices(&self) -> DeviceRuntimeResult<Vec<GpuDevice>> {
        if self.fail_enumeration {
            return Err(DeviceRuntimeError::Probe("nvidia-smi exploded".to_string()));
        }
        Ok(self.devices.clone())
    }

    fn alloc_randn(
        &self,
        rows: usize,
        cols: usize,
        selector: &DeviceSelector,
    ) -> DeviceRuntimeResult<TensorSummary> {
        self.alloc(vec![rows, cols], selector)
    }

    fn alloc_from_values(
        &self,
        values: &[f32],
        selector: &DeviceSelector,
    ) -> DeviceRuntimeResult<TensorSummary> {
        self.alloc(vec![values.len()], selector)
    }
}
