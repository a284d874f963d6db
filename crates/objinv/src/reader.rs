use std::io::Read;
use std::path::Path;

use flate2::read::ZlibDecoder;

use crate::entry::InventoryEntry;
use crate::error::{InventoryError, InventoryResult};

const SIGNATURE_PREFIX: &str = "# Sphinx inventory version ";
const PROJECT_PREFIX: &str = "# Project: ";
const VERSION_PREFIX: &str = "# Version: ";
const HEADER_LINES: usize = 4;

/// Parsed contents of a Sphinx v2 objects inventory.
#[derive(Clone, Debug)]
pub struct InventoryReader {
    project_name: String,
    version: String,
    entries: Vec<InventoryEntry>,
}

impl InventoryReader {
    /// Parse a complete inventory file held in memory.
    pub fn from_bytes(data: &[u8]) -> InventoryResult<Self> {
        let mut lines = Vec::with_capacity(HEADER_LINES);
        let mut pos = 0;
        while lines.len() < HEADER_LINES {
            let line_no = lines.len() + 1;
            let end = data[pos..]
                .iter()
                .position(|&b| b == b'\n')
                .ok_or_else(|| InventoryError::InvalidHeader {
                    line: line_no,
                    reason: "unexpected end of header".into(),
                })?;
            let line = std::str::from_utf8(&data[pos..pos + end]).map_err(|e| {
                InventoryError::InvalidHeader {
                    line: line_no,
                    reason: e.to_string(),
                }
            })?;
            lines.push(line);
            pos += end + 1;
        }

        let format_version = lines[0].strip_prefix(SIGNATURE_PREFIX).ok_or_else(|| {
            InventoryError::InvalidHeader {
                line: 1,
                reason: format!("not a Sphinx inventory: {:?}", lines[0]),
            }
        })?;
        if format_version != "2" {
            return Err(InventoryError::UnsupportedVersion(format_version.to_owned()));
        }
        let project_name = header_field(lines[1], PROJECT_PREFIX, 2)?;
        let version = header_field(lines[2], VERSION_PREFIX, 3)?;
        if !lines[3].contains("zlib") {
            return Err(InventoryError::InvalidHeader {
                line: 4,
                reason: "payload is not declared as zlib".into(),
            });
        }

        let mut body = String::new();
        ZlibDecoder::new(&data[pos..])
            .read_to_string(&mut body)
            .map_err(|e| InventoryError::DecompressionFailed(e.to_string()))?;

        let entries = body
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(i, line)| InventoryEntry::parse_line(line, i + 1))
            .collect::<InventoryResult<Vec<_>>>()?;

        Ok(Self {
            project_name: project_name.to_owned(),
            version: version.to_owned(),
            entries,
        })
    }

    /// Read and parse an inventory file from disk.
    pub fn open(path: &Path) -> InventoryResult<Self> {
        let data = std::fs::read(path)?;
        Self::from_bytes(&data)
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    /// The project version string from the header (`2.0` for files written
    /// by this crate).
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Entries in file order.
    pub fn entries(&self) -> &[InventoryEntry] {
        &self.entries
    }

    /// Look up an entry by its full name.
    pub fn get(&self, name: &str) -> Option<&InventoryEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_entries(self) -> Vec<InventoryEntry> {
        self.entries
    }
}

fn header_field<'a>(line: &'a str, prefix: &str, line_no: usize) -> InventoryResult<&'a str> {
    line.strip_prefix(prefix)
        .ok_or_else(|| InventoryError::InvalidHeader {
            line: line_no,
            reason: format!("expected {:?}", prefix.trim_end()),
        })
}
