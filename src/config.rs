use crate::documents::DocumentKind;
use std::path::{Path, PathBuf};

/// Where a run reads its assets and writes its documents.
///
/// Asset paths are relative to `project_root` and use `/` separators; they
/// are resolved through the project's resource provider. The defaults match
/// the repository layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub project_root: PathBuf,
    pub output_dir: String,
    pub font_dir: String,
    pub logo_path: String,
    pub partner_dir: String,
    pub leave_behind_file: String,
    pub deep_dive_file: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            project_root: PathBuf::from("."),
            output_dir: "docs".to_string(),
            font_dir: "docs/fonts".to_string(),
            logo_path: "src/app/icon.png".to_string(),
            partner_dir: "public/partners".to_string(),
            leave_behind_file: "hromada_2pager.pdf".to_string(),
            deep_dive_file: "hromada_6pager.pdf".to_string(),
        }
    }
}

impl GeneratorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_project_root<P: AsRef<Path>>(mut self, root: P) -> Self {
        self.project_root = root.as_ref().to_path_buf();
        self
    }

    pub fn with_output_dir(mut self, dir: impl Into<String>) -> Self {
        self.output_dir = dir.into();
        self
    }

    pub fn with_font_dir(mut self, dir: impl Into<String>) -> Self {
        self.font_dir = dir.into();
        self
    }

    pub fn with_logo_path(mut self, path: impl Into<String>) -> Self {
        self.logo_path = path.into();
        self
    }

    pub fn with_partner_dir(mut self, dir: impl Into<String>) -> Self {
        self.partner_dir = dir.into();
        self
    }

    /// Absolute (or root-relative) output directory.
    pub fn output_path(&self) -> PathBuf {
        self.project_root.join(&self.output_dir)
    }

    pub fn document_path(&self, kind: DocumentKind) -> PathBuf {
        let file = match kind {
            DocumentKind::LeaveBehind => &self.leave_behind_file,
            DocumentKind::DeepDive => &self.deep_dive_file,
        };
        self.output_path().join(file)
    }

    /// Provider-relative path of a file in the partner logo directory.
    pub fn partner_logo(&self, file: &str) -> String {
        let dir = self.partner_dir.trim_end_matches('/');
        if dir.is_empty() {
            file.to_string()
        } else {
            format!("{}/{}", dir, file)
        }
    }
}
