//! CUDA Device implementation
//!
//! Provides CUDA device abstraction using cudarc for direct GPU control.

use crate::runtime::{Device, TargetSystem};

/// CUDA Device using cudarc
///
/// Represents a single GPU. Memory it owns is tagged `Cuda`.
#[derive(Clone, Debug)]
pub struct CudaDevice {
    /// Index of the GPU device (0, 1, 2, ...)
    pub(crate) index: usize,
}

impl CudaDevice {
    /// Create a new CUDA device
    pub fn new(index: usize) -> Self {
        Self { index }
    }
}

impl Device for CudaDevice {
    fn id(&self) -> usize {
        self.index
    }

    fn target(&self) -> TargetSystem {
        TargetSystem::Cuda
    }
}

impl Default for CudaDevice {
    fn default() -> Self {
        Self::new(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_needs_no_driver() {
        let gpu = CudaDevice::new(1);
        assert_eq!(gpu.id(), 1);
        assert_eq!(gpu.target(), TargetSystem::Cuda);
        assert_eq!(gpu.name(), "cuda:1");
        assert!(!gpu.is_same(&CudaDevice::default()));
    }
}
