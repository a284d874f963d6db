use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{InventoryError, InventoryResult};
use crate::object::DocumentedObject;

/// Domain prefix written on every entry.
pub const DOMAIN: &str = "py";

/// Role used for objects whose kind is missing or not recognised.
pub const FALLBACK_ROLE: &str = "obj";

/// Priority written on every entry.
pub const DEFAULT_PRIORITY: i32 = -1;

/// Display name written on every entry. `-` means "same as the name".
pub const DEFAULT_DISPLAY_NAME: &str = "-";

/// Kind of a documented object that maps to a known inventory role.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectKind {
    Package,
    Module,
    Class,
    Method,
    Function,
    Attribute,
}

impl ObjectKind {
    pub const ALL: [ObjectKind; 6] = [
        Self::Package,
        Self::Module,
        Self::Class,
        Self::Method,
        Self::Function,
        Self::Attribute,
    ];

    /// Parse a kind tag, ignoring case. Returns `None` for anything outside
    /// the fixed vocabulary.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.to_lowercase().as_str() {
            "package" => Some(Self::Package),
            "module" => Some(Self::Module),
            "class" => Some(Self::Class),
            "method" => Some(Self::Method),
            "function" => Some(Self::Function),
            "attribute" => Some(Self::Attribute),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Package => "package",
            Self::Module => "module",
            Self::Class => "class",
            Self::Method => "method",
            Self::Function => "function",
            Self::Attribute => "attribute",
        }
    }

    /// The inventory role (the part after `py:`).
    pub fn role(&self) -> &'static str {
        match self {
            Self::Package | Self::Module => "module",
            Self::Class => "class",
            Self::Method => "method",
            Self::Function => "function",
            Self::Attribute => "attribute",
        }
    }

    /// Whether the object lives on its parent's page under an anchor rather
    /// than on a page of its own.
    pub fn is_anchored(&self) -> bool {
        matches!(self, Self::Method | Self::Function | Self::Attribute)
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single line of a Sphinx v2 inventory.
///
/// ```text
/// <name> <domain>:<role> <priority> <uri> <display_name>
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryEntry {
    pub name: String,
    pub domain: String,
    pub role: String,
    pub priority: i32,
    pub uri: String,
    pub display_name: String,
}

impl InventoryEntry {
    /// Build the entry for a documented object.
    ///
    /// Also returns the recognised kind, or `None` when the fallback role
    /// was used so the caller can report it.
    pub fn for_object<O: DocumentedObject>(obj: &O) -> (Self, Option<ObjectKind>) {
        let name = obj.full_name().into_owned();
        let kind = obj.kind().and_then(ObjectKind::parse);

        let (role, base, anchor) = match kind {
            Some(k) if k.is_anchored() => {
                let parent_name = obj
                    .parent()
                    .map(|p| p.full_name().into_owned())
                    .unwrap_or_default();
                (k.role(), parent_name, Some(obj.name().to_owned()))
            }
            Some(k) => (k.role(), name.clone(), None),
            None => (FALLBACK_ROLE, name.clone(), None),
        };

        let entry = Self {
            name,
            domain: DOMAIN.to_owned(),
            role: role.to_owned(),
            priority: DEFAULT_PRIORITY,
            uri: page_uri(&base, anchor.as_deref()),
            display_name: DEFAULT_DISPLAY_NAME.to_owned(),
        };
        (entry, kind)
    }

    /// Parse one decompressed inventory line (without its trailing newline).
    pub fn parse_line(line: &str, line_no: usize) -> InventoryResult<Self> {
        let malformed = |reason: &str| InventoryError::MalformedEntry {
            line: line_no,
            reason: reason.to_owned(),
        };

        let mut fields = line.splitn(5, ' ');
        let name = fields.next().filter(|s| !s.is_empty());
        let kind = fields.next();
        let priority = fields.next();
        let uri = fields.next();
        let display_name = fields.next();

        let (Some(name), Some(kind), Some(priority), Some(uri), Some(display_name)) =
            (name, kind, priority, uri, display_name)
        else {
            return Err(malformed("expected five space-separated fields"));
        };

        let (domain, role) = kind
            .split_once(':')
            .ok_or_else(|| malformed("type field is not <domain>:<role>"))?;
        let priority = priority
            .parse::<i32>()
            .map_err(|e| malformed(&format!("bad priority {priority:?}: {e}")))?;

        Ok(Self {
            name: name.to_owned(),
            domain: domain.to_owned(),
            role: role.to_owned(),
            priority,
            uri: uri.to_owned(),
            display_name: display_name.to_owned(),
        })
    }
}

impl fmt::Display for InventoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}:{} {} {} {}",
            self.name, self.domain, self.role, self.priority, self.uri, self.display_name
        )
    }
}

/// `<base>.html`, with `#<anchor>` appended when the anchor is non-empty.
///
/// An empty `base` is kept as is, giving `.html#name` for anchored objects
/// without a parent.
fn page_uri(base: &str, anchor: Option<&str>) -> String {
    let mut uri = format!("{base}.html");
    if let Some(anchor) = anchor.filter(|a| !a.is_empty()) {
        uri.push('#');
        uri.push_str(anchor);
    }
    uri
}
