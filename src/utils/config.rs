//! Render configuration
//!
//! Groups the per-renderer options. With the `data-loading` feature the
//! whole set can be read from TOML; absent tables and keys keep their
//! defaults:
//!
//! ```toml
//! [table]
//! escape = true
//!
//! [frame]
//! flex_cols = true
//! float_precision = 3
//!
//! [figure]
//! width = "0.8\\textwidth"
//! ```

use crate::features::figures::FigureOptions;
use crate::features::frames::FrameTableOptions;
use crate::features::tables::TableOptions;

/// Options for every renderer
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "data-loading", derive(serde::Deserialize), serde(default))]
pub struct RenderConfig {
    pub table: TableOptions,
    pub frame: FrameTableOptions,
    pub figure: FigureOptions,
}

#[cfg(feature = "data-loading")]
impl RenderConfig {
    /// Parse a TOML configuration
    pub fn from_toml_str(input: &str) -> crate::utils::error::Result<Self> {
        Ok(toml::from_str(input)?)
    }

    /// Read a TOML configuration file
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(path: impl AsRef<std::path::Path>) -> crate::utils::error::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded render configuration");
        Ok(config)
    }
}
