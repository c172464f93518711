//! Virtual filesystem store.
//!
//! An immutable tree of named nodes built once at startup. The only
//! operation is path resolution; commands that claim to create or delete
//! files succeed cosmetically without touching the tree.

use once_cell::sync::Lazy;

use aura_types::{AppId, DirectoryNode, FileNode, FsNode};

use crate::error::{AuraError, Result};

/// The process-wide seeded filesystem.
static SEEDED: Lazy<Vfs> = Lazy::new(Vfs::seeded);

/// The read-only virtual filesystem.
#[derive(Debug, Clone)]
pub struct Vfs {
    root: FsNode,
}

impl Vfs {
    /// Builds a filesystem from an explicit root directory.
    pub fn new(root: DirectoryNode) -> Self {
        Self {
            root: FsNode::Directory(root),
        }
    }

    /// The shared seeded filesystem every session resolves against.
    pub fn shared() -> &'static Vfs {
        &SEEDED
    }

    /// The home directory path, where every shell session starts.
    pub fn home_path() -> Vec<String> {
        vec!["home".to_string(), "aman".to_string()]
    }

    /// Resolves a path, one segment at a time, starting at the root.
    ///
    /// The empty path resolves to the root directory. Every intermediate
    /// segment must name a directory child; the final segment may name
    /// either node kind. Failures are reported as [`AuraError::PathNotFound`],
    /// never panics.
    pub fn resolve(&self, path: &[impl AsRef<str>]) -> Result<&FsNode> {
        let mut current = &self.root;
        for segment in path {
            let dir = current
                .as_directory()
                .ok_or_else(|| AuraError::path_not_found(path))?;
            current = dir
                .child(segment.as_ref())
                .ok_or_else(|| AuraError::path_not_found(path))?;
        }
        Ok(current)
    }

    /// Resolves a path that must be a directory.
    pub fn resolve_dir(&self, path: &[impl AsRef<str>]) -> Result<&DirectoryNode> {
        match self.resolve(path)? {
            FsNode::Directory(dir) => Ok(dir),
            FsNode::File(file) => Err(AuraError::NotADirectory {
                name: file.name.clone(),
            }),
        }
    }

    /// Resolves a path that must be a file.
    pub fn resolve_file(&self, path: &[impl AsRef<str>]) -> Result<&FileNode> {
        match self.resolve(path)? {
            FsNode::File(file) => Ok(file),
            FsNode::Directory(dir) => Err(AuraError::NotAFile {
                name: dir.name.clone(),
            }),
        }
    }

    /// The portfolio tree every session is seeded with.
    pub fn seeded() -> Self {
        let aman = DirectoryNode::new(
            "aman",
            vec![
                FsNode::File(
                    FileNode::new("about.md", ABOUT_MD).opens_with(AppId::Profile),
                ),
                FsNode::File(
                    FileNode::new("experience.json", EXPERIENCE_JSON)
                        .opens_with(AppId::Experience),
                ),
                FsNode::File(
                    FileNode::new("projects.json", PROJECTS_JSON).opens_with(AppId::Projects),
                ),
                FsNode::File(FileNode::new("skills.txt", SKILLS_TXT).opens_with(AppId::Skills)),
                FsNode::File(FileNode::new("contact.md", CONTACT_MD).opens_with(AppId::Contact)),
            ],
        );
        let home = DirectoryNode::new("home", vec![FsNode::Directory(aman)]);
        Self::new(DirectoryNode::new("root", vec![FsNode::Directory(home)]))
    }
}

const ABOUT_MD: &str = "# Aman Maurya\nSoftware Developer | Mumbai, India\n\n- Email: amaurya.dev@gmail.com\n- GitHub: https://github.com/amanmaurya7\n- LinkedIn: https://www.linkedin.com/in/amanmaurya-me/\n\nI am eager to connect with like-minded professionals and explore opportunities where I can contribute my technical skills.";

const EXPERIENCE_JSON: &str = r#"[
  {
    "company": "WeSee",
    "position": "Frontend Developer Intern",
    "period": "January 2025 – March 2025",
    "location": "Tokyo, Japan (Remote)",
    "description": "Developed a F1-themed reaction time game using React & TypeScript..."
  },
  {
    "company": "Shiemvoltech Private Limited",
    "position": "Software Development Intern",
    "period": "December 2024 – March 2025",
    "location": "Mumbai (Remote)",
    "description": "Developed a user-friendly employee management system..."
  },
  {
    "company": "VG Simulations Pvt. Ltd",
    "position": "Project Intern",
    "period": "July 2022 – August 2022",
    "location": "Mumbai",
    "description": "Gained proficiency in Blockchain technology..."
  }
]"#;

const PROJECTS_JSON: &str = r#"[
  {
    "title": "Kavach: A Quantum-Resistant Biometric Data System",
    "technologies": [
      "React.js",
      "QANplatform",
      "IPFS",
      "CRYSTALS-Kyber",
      "CRYSTALS-Dilithium",
      "zk-SNARKs",
      "Blockchain"
    ]
  },
  {
    "title": "Placement Power Hub",
    "link": "https://placement-power-hub.vercel.app/",
    "technologies": [
      "React",
      "TypeScript",
      "Supabase",
      "PostgreSQL",
      "React Query",
      "Recharts"
    ]
  },
  {
    "title": "Decentralized File Storage System",
    "link": "https://decendata.vercel.app/",
    "technologies": [
      "React.js",
      "Hardhat",
      "IPFS",
      "Pinata API",
      "Ethereum",
      "Solidity"
    ]
  }
]"#;

const SKILLS_TXT: &str = "Frontend: React, TypeScript, TailwindCSS\nBackend: Node.js, Express, PostgreSQL\nTools: Git, Docker, Linux";

const CONTACT_MD: &str = "Contact me at: amaurya.dev@gmail.com";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_path_resolves_to_root() {
        let vfs = Vfs::seeded();
        let empty: [&str; 0] = [];
        let node = vfs.resolve(&empty).unwrap();
        assert!(node.is_directory());
        assert_eq!(node.name(), "root");
    }

    #[test]
    fn test_resolve_home_directory() {
        let vfs = Vfs::seeded();
        let node = vfs.resolve(&["home", "aman"]).unwrap();
        assert!(node.is_directory());
    }

    #[test]
    fn test_resolve_file_under_home() {
        let vfs = Vfs::seeded();
        let file = vfs.resolve_file(&["home", "aman", "about.md"]).unwrap();
        assert!(file.content.starts_with("# Aman Maurya"));
        assert_eq!(file.opens_with, Some(AppId::Profile));
    }

    #[test]
    fn test_resolve_missing_path_is_not_found() {
        let vfs = Vfs::seeded();
        let err = vfs.resolve(&["home", "nobody"]).unwrap_err();
        assert!(err.is_path_not_found());
    }

    #[test]
    fn test_resolve_through_file_fails() {
        let vfs = Vfs::seeded();
        assert!(vfs.resolve(&["home", "aman", "about.md", "deeper"]).is_err());
    }

    #[test]
    fn test_home_listing_order_matches_seed() {
        let vfs = Vfs::seeded();
        let dir = vfs.resolve_dir(&["home", "aman"]).unwrap();
        let names: Vec<_> = dir.children.iter().map(FsNode::name).collect();
        assert_eq!(
            names,
            vec![
                "about.md",
                "experience.json",
                "projects.json",
                "skills.txt",
                "contact.md"
            ]
        );
    }

    #[test]
    fn test_seeded_json_files_parse() {
        let vfs = Vfs::shared();
        for name in ["experience.json", "projects.json"] {
            let file = vfs.resolve_file(&["home", "aman", name]).unwrap();
            serde_json::from_str::<serde_json::Value>(&file.content).unwrap();
        }
    }
}
