#![allow(dead_code)]

use std::fs::File;
use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use zip::write::FileOptions;
use zip::ZipWriter;

pub mod test_helpers {
    use super::*;
    use projectbrief::config::AnalysisConfig;
    use projectbrief::ArchiveAnalyzer;

    /// Builds zip archives entry by entry; names ending in `/` become directories
    #[derive(Default)]
    pub struct ZipFixture {
        entries: Vec<(String, Vec<u8>)>,
    }

    impl ZipFixture {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn dir(mut self, name: &str) -> Self {
            let name = if name.ends_with('/') { name.to_string() } else { format!("{}/", name) };
            self.entries.push((name, Vec::new()));
            self
        }

        pub fn file(mut self, name: &str, body: &str) -> Self {
            self.entries.push((name.to_string(), body.as_bytes().to_vec()));
            self
        }

        pub fn bytes(mut self, name: &str, body: &[u8]) -> Self {
            self.entries.push((name.to_string(), body.to_vec()));
            self
        }

        pub fn to_bytes(&self) -> Vec<u8> {
            let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
            for (name, body) in &self.entries {
                if name.ends_with('/') {
                    writer.add_directory(name.as_str(), FileOptions::default()).unwrap();
                } else {
                    writer.start_file(name.as_str(), FileOptions::default()).unwrap();
                    writer.write_all(body).unwrap();
                }
            }
            writer.finish().unwrap().into_inner()
        }

        pub fn write_to(&self, path: &Path) -> PathBuf {
            let mut file = File::create(path).unwrap();
            file.write_all(&self.to_bytes()).unwrap();
            path.to_path_buf()
        }
    }

    /// Scratch area holding fixture archives and the analyzer's workspace root
    pub struct TestContext {
        pub temp_dir: TempDir,
        pub work_dir: PathBuf,
    }

    impl TestContext {
        pub fn new() -> std::io::Result<Self> {
            let temp_dir = TempDir::new()?;
            let work_dir = temp_dir.path().join("work");
            std::fs::create_dir_all(&work_dir)?;
            Ok(Self { temp_dir, work_dir })
        }

        pub fn archive(&self, name: &str, fixture: &ZipFixture) -> PathBuf {
            fixture.write_to(&self.temp_dir.path().join(name))
        }

        pub fn settings(&self) -> AnalysisConfig {
            AnalysisConfig {
                work_dir: self.work_dir.clone(),
                ..AnalysisConfig::default()
            }
        }

        pub fn analyzer(&self) -> ArchiveAnalyzer {
            ArchiveAnalyzer::new(self.settings())
        }

        /// Entries left behind in the workspace root
        pub fn leftover_workspaces(&self) -> usize {
            std::fs::read_dir(&self.work_dir).unwrap().count()
        }
    }

    /// A small node project wrapped the way the macOS archiver does it
    pub fn node_project() -> ZipFixture {
        ZipFixture::new()
            .dir("shop")
            .file("shop/README.md", "# Shop\n\nA tiny storefront.\n\n## Setup\nnpm i\n")
            .file("shop/package.json", "{\"name\": \"shop\"}")
            .file("shop/src/index.js", "console.log('hi')")
            .file("shop/src/App.jsx", "export default 1")
            .dir("__MACOSX/shop")
            .file("__MACOSX/shop/._package.json", "junk")
            .file("shop/._index.js", "junk")
    }
}
