//! The composed project summary and its text rendering.

use super::languages::LanguageTally;
use super::manifests::DependencySet;
use super::readme::ReadmeExcerpt;
use super::run_hint::RunHint;
use super::structure::FolderStructure;
use std::fmt;

const NONE_DETECTED: &str = "None detected.";

/// Everything learned about one archive
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectSummary {
    /// Base name of the project root
    pub project_name: String,
    /// README excerpt or placeholder
    pub readme: ReadmeExcerpt,
    /// Language counts
    pub languages: LanguageTally,
    /// Dependency manifests present
    pub dependencies: DependencySet,
    /// Folder tree
    pub structure: FolderStructure,
    /// How to run it
    pub run_hint: RunHint,
}

impl ProjectSummary {
    /// Renders the summary text
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ProjectSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let languages = if self.languages.is_empty() {
            NONE_DETECTED.to_string()
        } else {
            self.languages.to_string()
        };
        let dependencies = if self.dependencies.is_empty() {
            NONE_DETECTED.to_string()
        } else {
            self.dependencies.to_string()
        };

        writeln!(f, "# 📘 Project Summary")?;
        writeln!(f)?;
        writeln!(f, "**📛 Project Name:** {}", self.project_name)?;
        writeln!(f)?;
        writeln!(f, "**📖 Description:**")?;
        writeln!(f, "{}", self.readme)?;
        writeln!(f)?;
        writeln!(f, "**🧠 Programming Languages Used:**")?;
        writeln!(f, "{}", languages)?;
        writeln!(f)?;
        writeln!(f, "**📦 Dependency Files:**")?;
        writeln!(f, "{}", dependencies)?;
        writeln!(f)?;
        writeln!(f, "**🗂️ Folder Structure:**")?;
        writeln!(f, "{}", self.structure)?;
        writeln!(f)?;
        writeln!(f, "**🚀 How to Run the Project:**")?;
        writeln!(f, "{}", self.run_hint)?;
        writeln!(f)?;
        writeln!(f, "**✅ Summary generated automatically.**")
    }
}
