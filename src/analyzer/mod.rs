//! Zip-to-summary analysis pipeline.
//!
//! [`ArchiveAnalyzer::analyze`] unpacks an archive into a private
//! [`Workspace`], picks the project folder and derives every section of the
//! [`ProjectSummary`] from it. Only opening and unpacking the archive can
//! fail; the later stages fall back to placeholders.

use crate::config::AnalysisConfig;
use crate::error::Result;
use log::info;
use std::path::Path;

/// Filtering of packaging artifacts
pub mod entry;
/// Language detection
pub mod languages;
/// Dependency manifest discovery
pub mod manifests;
/// README excerpting
pub mod readme;
/// Project root selection
pub mod root;
/// Run hints
pub mod run_hint;
/// Folder tree rendering
pub mod structure;
/// Summary composition
pub mod summary;
/// Project traversal
pub mod walk;
/// Scratch directories and extraction
pub mod workspace;

pub use languages::LanguageTally;
pub use manifests::DependencySet;
pub use readme::ReadmeExcerpt;
pub use root::{choose_project_dir, CandidateDir};
pub use run_hint::RunHint;
pub use structure::FolderStructure;
pub use summary::ProjectSummary;
pub use workspace::Workspace;

/// Turns zip archives into project summaries
#[derive(Debug, Clone, Default)]
pub struct ArchiveAnalyzer {
    settings: AnalysisConfig,
}

impl ArchiveAnalyzer {
    /// Create an analyzer with the given settings
    pub fn new(settings: AnalysisConfig) -> Self {
        Self { settings }
    }

    /// Extracts `archive_path` and summarizes the project inside it.
    ///
    /// Fails only when the workspace cannot be created or the archive cannot
    /// be read or unpacked. The workspace is removed before returning.
    pub fn analyze(&self, archive_path: &Path) -> Result<ProjectSummary> {
        let workspace = Workspace::create(&self.settings.work_dir)?;
        workspace.extract(archive_path)?;

        let summary = self.summarize_dir(workspace.extract_dir());
        info!(
            "Summarized '{}' from {} ({} language(s), {} manifest(s))",
            summary.project_name,
            archive_path.display(),
            summary.languages.entries().len(),
            summary.dependencies.names().count()
        );
        Ok(summary)
    }

    /// Summarizes an already extracted tree rooted at `extract_dir`
    pub fn summarize_dir(&self, extract_dir: &Path) -> ProjectSummary {
        let project_root = root::locate_project_root(extract_dir);
        let project_name = project_root
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let structure = structure::folder_structure(&project_root, self.settings.max_depth);
        let readme = readme::readme_excerpt(&project_root, self.settings.readme_lines);
        let languages = languages::detect_languages(&project_root);
        let dependencies = manifests::detect_manifests(&project_root);
        let run_hint = RunHint::for_dependencies(&dependencies);

        ProjectSummary {
            project_name,
            readme,
            languages,
            dependencies,
            structure,
            run_hint,
        }
    }
}

/// Summarizes a zip archive with default settings and returns the rendered text
pub fn analyze_zip_file(archive_path: &Path) -> Result<String> {
    ArchiveAnalyzer::default()
        .analyze(archive_path)
        .map(|summary| summary.render())
}
