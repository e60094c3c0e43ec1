//! Test helpers for laying out project documents on disk.

use camino::{Utf8Path, Utf8PathBuf};
use stopcover_core::ProjectDocument;
use stopcover_core::test_support::line_request;
use tempfile::TempDir;

use crate::solve::SolveArgs;

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path, contents).expect("write test file");
}

pub(super) fn read_utf8(path: &Utf8Path) -> String {
    std::fs::read_to_string(path).expect("read test file")
}

/// A temporary directory holding a project document.
pub(super) struct Workspace {
    _dir: TempDir,
    pub(super) root: Utf8PathBuf,
    pub(super) document_path: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        let document_path = root.join("campus.json");
        Self {
            _dir: dir,
            root,
            document_path,
        }
    }

    /// Write the `A –10– B –10– C` line as the project document.
    pub(super) fn with_line_document(self, max_walk_distance: f64) -> Self {
        let request = line_request(max_walk_distance);
        let document = ProjectDocument {
            nodes: request.nodes,
            edges: request.edges,
            max_walk_distance,
            solution: None,
        };
        let payload = document.to_json_string_pretty().expect("encode document");
        write_utf8(&self.document_path, payload.as_bytes());
        self
    }

    pub(super) fn args(&self) -> SolveArgs {
        SolveArgs {
            document_path: Some(self.document_path.clone()),
            ..SolveArgs::default()
        }
    }
}
