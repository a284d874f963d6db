use std::path::Path;

use flate2::Compression;
use serde::{Deserialize, Serialize};

use crate::error::{InventoryError, InventoryResult};
use crate::writer::INVENTORY_FILE_NAME;

/// Settings for an inventory writer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InventoryConfig {
    /// Project name written into the header.
    pub project_name: String,
    /// File created inside the output directory.
    pub file_name: String,
    /// zlib level, 0 (store) to 9 (best).
    pub compression_level: u32,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            project_name: "project".into(),
            file_name: INVENTORY_FILE_NAME.into(),
            compression_level: 6,
        }
    }
}

impl InventoryConfig {
    pub fn new(project_name: impl Into<String>) -> Self {
        Self {
            project_name: project_name.into(),
            ..Default::default()
        }
    }

    /// Parse and validate a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(s: &str) -> InventoryResult<Self> {
        let config: Self = toml::from_str(s).map_err(|e| InventoryError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> InventoryResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Reject values that would corrupt the header or escape the output
    /// directory.
    pub fn validate(&self) -> InventoryResult<()> {
        if self.project_name.contains(['\n', '\r']) {
            return Err(InventoryError::Config(
                "project_name must not contain line breaks".into(),
            ));
        }
        if self.file_name.is_empty() {
            return Err(InventoryError::Config("file_name must not be empty".into()));
        }
        if self.file_name.contains(['/', '\\']) || self.file_name == "." || self.file_name == ".." {
            return Err(InventoryError::Config(format!(
                "file_name must be a plain file name, got {:?}",
                self.file_name
            )));
        }
        if self.compression_level > 9 {
            return Err(InventoryError::Config(format!(
                "compression_level must be 0..=9, got {}",
                self.compression_level
            )));
        }
        Ok(())
    }

    pub fn compression(&self) -> Compression {
        Compression::new(self.compression_level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let c = InventoryConfig::default();
        assert_eq!(c.file_name, "objects.inv");
        assert_eq!(c.compression_level, 6);
        assert_eq!(c.compression(), Compression::default());
        assert!(c.validate().is_ok());
    }

    #[test]
    fn toml_partial_uses_defaults() {
        let c = InventoryConfig::from_toml_str("project_name = \"Foo\"\n").unwrap();
        assert_eq!(c.project_name, "Foo");
        assert_eq!(c.file_name, "objects.inv");
        assert_eq!(c.compression_level, 6);
    }

    #[test]
    fn toml_full() {
        let c = InventoryConfig::from_toml_str(
            "project_name = \"Bar\"\nfile_name = \"bar.inv\"\ncompression_level = 9\n",
        )
        .unwrap();
        assert_eq!(c.file_name, "bar.inv");
        assert_eq!(c.compression(), Compression::best());
    }

    #[test]
    fn toml_syntax_error() {
        let err = InventoryConfig::from_toml_str("project_name = ").unwrap_err();
        assert!(matches!(err, InventoryError::Config(_)));
    }

    #[test]
    fn rejects_newline_in_project() {
        let c = InventoryConfig::new("a\nb");
        assert!(matches!(c.validate(), Err(InventoryError::Config(_))));
    }

    #[test]
    fn rejects_bad_file_names() {
        for name in ["", "..", "sub/objects.inv", "a\\b"] {
            let c = InventoryConfig {
                file_name: name.into(),
                ..Default::default()
            };
            assert!(c.validate().is_err(), "{name:?} should be rejected");
        }
    }

    #[test]
    fn rejects_level_out_of_range() {
        let c = InventoryConfig {
            compression_level: 10,
            ..Default::default()
        };
        assert!(matches!(c.validate(), Err(InventoryError::Config(_))));
    }

    #[test]
    fn load_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("objinv.toml");
        std::fs::write(&path, "project_name = \"Disk\"\n").unwrap();
        let c = InventoryConfig::load(&path).unwrap();
        assert_eq!(c.project_name, "Disk");
    }
}
