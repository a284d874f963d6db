use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use flate2::write::ZlibEncoder;
use flate2::Compression;
use tracing::debug;

use crate::config::InventoryConfig;
use crate::entry::InventoryEntry;
use crate::error::{InventoryError, InventoryResult};
use crate::logger::InventoryLogger;
use crate::object::DocumentedObject;

/// Name of the file written into the output directory.
pub const INVENTORY_FILE_NAME: &str = "objects.inv";

/// Inventory format version, rendered as `major.minor` in the header.
pub const INVENTORY_VERSION: (u32, u32) = (2, 0);

/// Facility passed to the logger for every diagnostic.
pub const LOG_FACILITY: &str = "sphinx";

/// Result of writing an inventory file.
#[derive(Clone, Debug)]
pub struct InventoryFile {
    pub path: PathBuf,
    pub entry_count: usize,
}

/// Writes Sphinx objects inventories (format version 2).
///
/// Layout: a four-line plaintext header followed by a single zlib stream
/// holding one `\n`-terminated line per object, in pre-order.
pub struct InventoryWriter<L> {
    project_name: String,
    file_name: String,
    compression: Compression,
    logger: L,
}

impl<L: InventoryLogger> InventoryWriter<L> {
    /// Create a writer with the default file name and compression level.
    pub fn new(logger: L, project_name: impl Into<String>) -> Self {
        Self {
            project_name: project_name.into(),
            file_name: INVENTORY_FILE_NAME.into(),
            compression: Compression::default(),
            logger,
        }
    }

    /// Create a writer from a validated configuration.
    pub fn with_config(logger: L, config: &InventoryConfig) -> InventoryResult<Self> {
        config.validate()?;
        Ok(Self {
            project_name: config.project_name.clone(),
            file_name: config.file_name.clone(),
            compression: config.compression(),
            logger,
        })
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    pub fn version(&self) -> (u32, u32) {
        INVENTORY_VERSION
    }

    /// Write `<basepath>/objects.inv` for `subjects` and everything below them.
    ///
    /// The file is created or truncated. I/O errors are returned as is and
    /// a partially written file is left in place.
    pub fn generate<O: DocumentedObject>(
        &self,
        subjects: &[O],
        basepath: &Path,
    ) -> InventoryResult<InventoryFile> {
        let path = basepath.join(&self.file_name);
        self.logger.log(
            LOG_FACILITY,
            &format!("Generating objects inventory at {}", path.display()),
        );

        let mut target = BufWriter::new(File::create(&path)?);
        let entry_count = self.write_to(&mut target, subjects)?;
        target.flush()?;

        Ok(InventoryFile { path, entry_count })
    }

    /// Build the complete file contents in memory.
    pub fn to_bytes<O: DocumentedObject>(&self, subjects: &[O]) -> InventoryResult<Vec<u8>> {
        let mut out = Vec::new();
        self.write_to(&mut out, subjects)?;
        Ok(out)
    }

    /// Write the header and compressed body to `target`. Returns the number
    /// of entries written.
    pub fn write_to<W: Write, O: DocumentedObject>(
        &self,
        target: &mut W,
        subjects: &[O],
    ) -> InventoryResult<usize> {
        target.write_all(self.header().as_bytes())?;
        let (content, entry_count) = self.render_content(subjects);
        target.write_all(&self.compress(content.as_bytes())?)?;
        Ok(entry_count)
    }

    /// The plaintext header, including the trailing newline.
    pub fn header(&self) -> String {
        let (major, minor) = self.version();
        format!(
            "# Sphinx inventory version 2\n\
             # Project: {}\n\
             # Version: {major}.{minor}\n\
             # The rest of this file is compressed with zlib.\n",
            self.project_name
        )
    }

    /// The uncompressed body: one line per object, parents before children.
    pub fn content<O: DocumentedObject>(&self, subjects: &[O]) -> String {
        self.render_content(subjects).0
    }

    /// The inventory line for a single object, newline included.
    ///
    /// Objects with a missing or unrecognised kind are reported to the
    /// logger and written with the `obj` role.
    pub fn line<O: DocumentedObject>(&self, obj: &O) -> String {
        let (entry, kind) = InventoryEntry::for_object(obj);
        if kind.is_none() {
            self.logger
                .log(LOG_FACILITY, &format!("Unknown type for {}.", entry.name));
        }
        format!("{entry}\n")
    }

    fn render_content<O: DocumentedObject>(&self, subjects: &[O]) -> (String, usize) {
        let mut content = String::new();
        let mut count = 0;

        // Children are pushed in reverse so they pop in document order.
        let mut stack: Vec<O> = subjects.iter().rev().cloned().collect();
        while let Some(obj) = stack.pop() {
            content.push_str(&self.line(&obj));
            count += 1;
            stack.extend(obj.ordered_contents().into_iter().rev());
        }

        debug!(entries = count, bytes = content.len(), "rendered inventory body");
        (content, count)
    }

    fn compress(&self, data: &[u8]) -> InventoryResult<Vec<u8>> {
        let mut encoder = ZlibEncoder::new(Vec::new(), self.compression);
        encoder
            .write_all(data)
            .map_err(|e| InventoryError::CompressionFailed(e.to_string()))?;
        encoder
            .finish()
            .map_err(|e| InventoryError::CompressionFailed(e.to_string()))
    }
}

impl<L> std::fmt::Debug for InventoryWriter<L> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InventoryWriter")
            .field("project_name", &self.project_name)
            .field("file_name", &self.file_name)
            .field("compression", &self.compression)
            .finish()
    }
}
