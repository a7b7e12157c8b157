use std::path::{Path, PathBuf};
use std::sync::Arc;

use tree_sitter::{Node, Tree};

/// One parsed source file, as handed in by the host framework.
///
/// Units are immutable and compared by identity: two units are the same
/// unit iff they are the same `Arc` allocation, never merely textually
/// equal. The host owns parsing and deduplication; this crate never
/// constructs a tree and never mutates a unit.
pub struct SourceUnit {
    path: PathBuf,
    text: Arc<str>,
    tree: Tree,
}

impl SourceUnit {
    /// Wrap an already-parsed file. `tree` must have been parsed from
    /// `text`; node byte ranges are resolved against it.
    pub fn new(path: impl Into<PathBuf>, text: impl Into<Arc<str>>, tree: Tree) -> Arc<Self> {
        Arc::new(Self {
            path: path.into(),
            text: text.into(),
            tree,
        })
    }

    /// File path as given by the host. May be empty when unknown.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Base file name, or `""` when the path is empty or has no final
    /// component. Directory components never participate in classification.
    #[must_use]
    pub fn file_name(&self) -> &str {
        self.path.file_name().and_then(|n| n.to_str()).unwrap_or("")
    }

    /// Full source text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Root syntax node.
    #[must_use]
    pub fn root(&self) -> Node<'_> {
        self.tree.root_node()
    }

    /// Raw bytes covered by `node`.
    pub(crate) fn node_bytes(&self, node: Node<'_>) -> &[u8] {
        &self.text.as_bytes()[node.byte_range()]
    }
}

impl std::fmt::Debug for SourceUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceUnit")
            .field("path", &self.path)
            .field("bytes", &self.text.len())
            .finish_non_exhaustive()
    }
}
