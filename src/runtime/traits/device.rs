//! Trait for device identification

use super::TargetSystem;

/// Trait for device identification
pub trait Device: Clone + Send + Sync + 'static {
    /// Unique identifier for this device within its system
    fn id(&self) -> usize;

    /// Memory domain this device belongs to
    fn target(&self) -> TargetSystem;

    /// Check if two devices are the same
    fn is_same(&self, other: &Self) -> bool {
        self.id() == other.id()
    }

    /// Human-readable name
    fn name(&self) -> String {
        format!("{}:{}", self.target().name(), self.id())
    }
}
