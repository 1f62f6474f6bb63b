//! Device grid dimensions and the known device catalog.

use serde::{Deserialize, Serialize};

use super::ConfigurationError;

/// Key grid of a device: `cols` columns by `rows` rows.
///
/// Capacity is `cols * rows`; exactly one content item occupies one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceGrid {
    pub cols: u32,
    pub rows: u32,
}

impl DeviceGrid {
    /// Creates a grid, rejecting zero dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::InvalidGrid`] if either dimension is zero.
    pub fn new(cols: u32, rows: u32) -> Result<Self, ConfigurationError> {
        if cols == 0 || rows == 0 {
            return Err(ConfigurationError::InvalidGrid { cols, rows });
        }
        Ok(Self { cols, rows })
    }

    /// Total number of cells.
    pub fn capacity(&self) -> usize {
        self.cols as usize * self.rows as usize
    }
}

/// Known device models and their grid sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeviceModel {
    Standard,
    Mini,
    Xl,
    Mobile,
    Pedal,
    Plus,
    Neo,
}

impl DeviceModel {
    /// Grid size for this model.
    pub fn grid(&self) -> DeviceGrid {
        let (cols, rows) = match self {
            DeviceModel::Standard => (5, 3),
            DeviceModel::Mini => (3, 2),
            DeviceModel::Xl => (8, 4),
            DeviceModel::Mobile => (5, 3),
            DeviceModel::Pedal => (3, 1),
            DeviceModel::Plus => (4, 2),
            DeviceModel::Neo => (4, 2),
        };
        DeviceGrid { cols, rows }
    }

    /// Resolves the numeric device-type reported by the device SDK.
    ///
    /// Returns `None` for unrecognised type codes.
    pub fn from_type_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(DeviceModel::Standard),
            1 => Some(DeviceModel::Mini),
            2 => Some(DeviceModel::Xl),
            3 => Some(DeviceModel::Mobile),
            5 => Some(DeviceModel::Pedal),
            7 => Some(DeviceModel::Plus),
            9 => Some(DeviceModel::Neo),
            _ => None,
        }
    }

    /// Resolves a model from its configuration name (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::UnknownModel`] for names outside the catalog.
    pub fn from_name(name: &str) -> Result<Self, ConfigurationError> {
        match name.to_ascii_lowercase().as_str() {
            "standard" => Ok(DeviceModel::Standard),
            "mini" => Ok(DeviceModel::Mini),
            "xl" => Ok(DeviceModel::Xl),
            "mobile" => Ok(DeviceModel::Mobile),
            "pedal" => Ok(DeviceModel::Pedal),
            "plus" => Ok(DeviceModel::Plus),
            "neo" => Ok(DeviceModel::Neo),
            _ => Err(ConfigurationError::UnknownModel(name.to_string())),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_device_grid_new_accepts_positive_dimensions() {
        let grid = DeviceGrid::new(5, 3).unwrap();
        assert_eq!(grid.capacity(), 15);
    }

    #[test]
    fn test_device_grid_new_rejects_zero_cols() {
        assert_eq!(
            DeviceGrid::new(0, 3),
            Err(ConfigurationError::InvalidGrid { cols: 0, rows: 3 })
        );
    }

    #[test]
    fn test_device_grid_new_rejects_zero_rows() {
        assert_eq!(
            DeviceGrid::new(5, 0),
            Err(ConfigurationError::InvalidGrid { cols: 5, rows: 0 })
        );
    }

    #[test]
    fn test_device_model_grid_sizes_match_catalog() {
        assert_eq!(DeviceModel::Mini.grid(), DeviceGrid { cols: 3, rows: 2 });
        assert_eq!(DeviceModel::Standard.grid(), DeviceGrid { cols: 5, rows: 3 });
        assert_eq!(DeviceModel::Xl.grid(), DeviceGrid { cols: 8, rows: 4 });
        assert_eq!(DeviceModel::Plus.grid(), DeviceGrid { cols: 4, rows: 2 });
        assert_eq!(DeviceModel::Pedal.grid(), DeviceGrid { cols: 3, rows: 1 });
    }

    #[test]
    fn test_device_model_from_type_code_resolves_known_codes() {
        assert_eq!(DeviceModel::from_type_code(0), Some(DeviceModel::Standard));
        assert_eq!(DeviceModel::from_type_code(2), Some(DeviceModel::Xl));
        assert_eq!(DeviceModel::from_type_code(9), Some(DeviceModel::Neo));
        assert_eq!(DeviceModel::from_type_code(4), None);
    }

    #[test]
    fn test_device_model_from_name_is_case_insensitive() {
        assert_eq!(DeviceModel::from_name("XL").unwrap(), DeviceModel::Xl);
        assert_eq!(DeviceModel::from_name("mini").unwrap(), DeviceModel::Mini);
    }

    #[test]
    fn test_device_model_from_name_rejects_unknown() {
        assert!(matches!(
            DeviceModel::from_name("toaster"),
            Err(ConfigurationError::UnknownModel(_))
        ));
    }
}
