//! Virtual filesystem node types.
//!
//! The tree is a plain value: built once at startup, never mutated. Children
//! live in a `Vec` rather than a map so a directory listing reproduces the
//! literal order the tree was seeded in.

use serde::{Deserialize, Serialize};

use crate::app::AppId;

/// One node in the virtual filesystem tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FsNode {
    File(FileNode),
    Directory(DirectoryNode),
}

/// A file: a name, a text blob, and optionally the app that opens it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileNode {
    pub name: String,
    pub content: String,
    /// App launched when the file is opened from the shell or file manager.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opens_with: Option<AppId>,
}

/// A directory: a name and its children, unique by name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectoryNode {
    pub name: String,
    pub children: Vec<FsNode>,
}

impl FsNode {
    /// The node's own name.
    pub fn name(&self) -> &str {
        match self {
            FsNode::File(f) => &f.name,
            FsNode::Directory(d) => &d.name,
        }
    }

    pub fn is_directory(&self) -> bool {
        matches!(self, FsNode::Directory(_))
    }

    pub fn as_file(&self) -> Option<&FileNode> {
        match self {
            FsNode::File(f) => Some(f),
            FsNode::Directory(_) => None,
        }
    }

    pub fn as_directory(&self) -> Option<&DirectoryNode> {
        match self {
            FsNode::Directory(d) => Some(d),
            FsNode::File(_) => None,
        }
    }
}

impl FileNode {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
            opens_with: None,
        }
    }

    pub fn opens_with(mut self, app: AppId) -> Self {
        self.opens_with = Some(app);
        self
    }
}

impl DirectoryNode {
    pub fn new(name: impl Into<String>, children: Vec<FsNode>) -> Self {
        Self {
            name: name.into(),
            children,
        }
    }

    /// Looks up a direct child by exact name.
    pub fn child(&self, name: &str) -> Option<&FsNode> {
        self.children.iter().find(|c| c.name() == name)
    }
}
