//! Serializer/Writer: canonical text emission and atomic persistence
//!
//! The output location is derived purely from the workflow's declared source
//! path, so repeated builds overwrite the same artifact. Writes go through a
//! temp file in the destination directory and an atomic rename; an IO failure
//! leaves no partial output behind (the temp file is removed on drop).

use std::io::Write as _;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::error::CompileError;
use crate::workflow::Workflow;

/// Fixed extension of the emitted workflow document
pub const TARGET_EXTENSION: &str = "yml";

/// Derive the output path from a source path: same directory, same stem,
/// target extension. Independent of model contents.
pub fn output_path(source: &Path) -> PathBuf {
    source.with_extension(TARGET_EXTENSION)
}

impl Workflow {
    /// Canonical text of the rendered document. Stable: repeated calls on
    /// the same model are byte-identical.
    pub fn to_yaml(&self) -> Result<String, CompileError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Where [`Workflow::write_to_file`] will emit this workflow
    pub fn output_path(&self) -> PathBuf {
        output_path(&self.source_path)
    }

    /// Serialize and persist the workflow document, returning the written
    /// path. Either a complete document lands at the output path or the
    /// previous contents stay untouched.
    pub fn write_to_file(&self) -> Result<PathBuf, CompileError> {
        let yaml = self.to_yaml()?;
        let path = self.output_path();

        // with_extension on a bare file name yields an empty parent
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        debug!(path = %path.display(), "writing workflow document");
        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(yaml.as_bytes())?;
        tmp.flush()?;
        tmp.persist(&path).map_err(|e| CompileError::Io(e.error))?;

        info!(path = %path.display(), bytes = yaml.len(), "workflow written");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_path_swaps_extension_in_place() {
        assert_eq!(
            output_path(Path::new("a/b/workflow.src")),
            PathBuf::from("a/b/workflow.yml")
        );
    }

    #[test]
    fn output_path_handles_bare_file_names() {
        assert_eq!(output_path(Path::new("ci.src")), PathBuf::from("ci.yml"));
    }

    #[test]
    fn output_path_ignores_dotted_stems() {
        // only the final extension is replaced
        assert_eq!(
            output_path(Path::new(".github/kts/maven.main.kts")),
            PathBuf::from(".github/kts/maven.main.yml")
        );
    }
}
