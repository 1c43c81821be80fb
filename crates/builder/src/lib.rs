//! Helpers for packaging AWS Lambda functions. The builder assumes the
//! configured folder holds a crate that cross-compiles with a plain
//! `cargo build` for the Lambda target, and produces a zipfile named after
//! that folder.

pub mod shell;

pub use shell::ShellError;

use std::path::PathBuf;

const BUILD_COMMAND: &str = "cargo build --release --target x86_64-unknown-linux-musl";

/// Factory builds and packages the function that lives in a configured folder.
#[derive(Debug, Clone, Default)]
pub struct Factory {
    folder: PathBuf,
}

impl Factory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the root folder where the function sources live and returns the
    /// factory for chaining.
    pub fn with_folder(mut self, folder: impl Into<PathBuf>) -> Self {
        self.folder = folder.into();
        self
    }

    /// Cross-compiles the function for the Linux/AMD64 Lambda target, in the
    /// configured folder.
    pub fn build(&self) -> Result<(), ShellError> {
        shell::run(BUILD_COMMAND, &self.folder)
    }

    /// Like [`Factory::build`], but panics if the build fails. For callers
    /// with no recovery strategy.
    pub fn must_build(&self) {
        if let Err(err) = self.build() {
            panic!("build failed: {err}");
        }
    }

    /// Zips the configured folder into `<folder>.zip`, named after the last
    /// path segment of the folder.
    pub fn archive(&self) -> Result<(), ShellError> {
        shell::run(&self.archive_command(), &self.folder)
    }

    /// Like [`Factory::archive`], but panics if archiving fails.
    pub fn must_archive(&self) {
        if let Err(err) = self.archive() {
            panic!("archive failed: {err}");
        }
    }

    fn archive_command(&self) -> String {
        let name = self
            .folder
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or_default();
        format!("zip ./{name}.zip ./{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn archive_is_named_after_the_last_path_segment() {
        let factory = Factory::new().with_folder("functions/orders");
        assert_eq!(factory.archive_command(), "zip ./orders.zip ./orders");
    }

    #[test]
    fn trailing_separator_does_not_change_the_archive_name() {
        let factory = Factory::new().with_folder("functions/orders/");
        assert_eq!(factory.archive_command(), "zip ./orders.zip ./orders");
    }

    #[test]
    fn with_folder_overwrites_earlier_values() {
        let factory = Factory::new().with_folder("a").with_folder("b");
        assert_eq!(factory.archive_command(), "zip ./b.zip ./b");
    }

    #[test]
    fn build_command_targets_linux_amd64() {
        assert!(BUILD_COMMAND.contains("x86_64-unknown-linux-musl"));
    }
}
