//! Shared test helpers: tempdir-backed filesystem fixtures used by the
//! module tests.

#[cfg(test)]
pub mod helpers {
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::{tempdir, TempDir};

    /// A temporary directory with helpers for laying out test fixtures.
    pub struct TestFileSystem {
        #[allow(dead_code)]
        pub temp_dir: TempDir,
        pub root_path: PathBuf,
    }

    impl Default for TestFileSystem {
        fn default() -> Self {
            Self::new()
        }
    }

    impl TestFileSystem {
        pub fn new() -> Self {
            let temp_dir = tempdir().expect("Failed to create temporary directory");
            let root_path = temp_dir.path().to_path_buf();

            Self { temp_dir, root_path }
        }

        /// Create a file with given content at a path relative to the temp
        /// dir, creating parents as needed.
        pub fn create_file<P: AsRef<Path>>(&self, path: P, content: &str) -> PathBuf {
            self.create_binary_file(path, content.as_bytes())
        }

        /// Create a file with raw byte content at a path relative to the
        /// temp dir, creating parents as needed.
        pub fn create_binary_file<P: AsRef<Path>>(&self, path: P, content: &[u8]) -> PathBuf {
            let full_path = self.root_path.join(path);

            if let Some(parent) = full_path.parent() {
                fs::create_dir_all(parent).expect("Failed to create parent directories");
            }

            fs::write(&full_path, content).expect("Failed to write file");
            full_path
        }

        /// Create a directory at a path relative to the temp dir.
        pub fn create_dir<P: AsRef<Path>>(&self, path: P) -> PathBuf {
            let full_path = self.root_path.join(path);
            fs::create_dir_all(&full_path).expect("Failed to create directory");
            full_path
        }

        /// Create a symlink at a path relative to the temp dir, pointing at
        /// `target`. The target does not need to exist.
        #[cfg(unix)]
        pub fn create_symlink<P: AsRef<Path>>(&self, target: &Path, link: P) -> PathBuf {
            let link_path = self.root_path.join(link);
            std::os::unix::fs::symlink(target, &link_path).expect("Failed to create symlink");
            link_path
        }

        /// Get a path relative to the temp directory.
        pub fn path<P: AsRef<Path>>(&self, relative_path: P) -> PathBuf {
            self.root_path.join(relative_path)
        }
    }
}
