use crate::error::{SquareTreeError, SquareTreeResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    /// Smallest side a node may have. Leaves at this size are never split.
    pub min_size: f64,
    /// Lower-left corner of the initial bounding square.
    pub x: f64,
    pub y: f64,
    /// Initial side of the bounding square, `min_size` when unset.
    pub size: Option<f64>,
    /// Points a leaf holds before it is subdivided.
    pub max_stack_size: usize,
    /// Cursors kept around between operations.
    pub pool_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            min_size: 1.0,
            x: 0.0,
            y: 0.0,
            size: None,
            max_stack_size: 16,
            pool_size: 4,
        }
    }
}

impl Config {
    pub fn size(&self) -> f64 {
        self.size.unwrap_or(self.min_size)
    }

    pub(crate) fn validate(&self) -> SquareTreeResult<()> {
        if !is_power_of_two(self.min_size) {
            return Err(SquareTreeError::InvalidMinSize {
                min_size: self.min_size,
            });
        }
        let size = self.size();
        if !is_power_of_two(size) || size < self.min_size {
            return Err(SquareTreeError::InvalidSize {
                size,
                min_size: self.min_size,
            });
        }
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(SquareTreeError::InvalidOrigin {
                x: self.x,
                y: self.y,
            });
        }
        if self.max_stack_size == 0 {
            return Err(SquareTreeError::InvalidMaxStackSize);
        }
        Ok(())
    }
}

// Fractional powers (0.5, 0.25, ...) are allowed
fn is_power_of_two(value: f64) -> bool {
    value.is_finite() && value > 0.0 && value.log2().fract() == 0.0
}
