use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use study_core::model::content::{
    ABOUT_NOTICE, ExternalLink, GuideDocument, TRAINING_DISCLAIMER, regulator_link, study_guide,
};

use crate::error::ReferenceError;

/// Static reference pages and study-guide downloads.
#[derive(Debug, Clone)]
pub struct ReferenceService {
    guides_dir: PathBuf,
    downloads_dir: PathBuf,
    documents: Vec<GuideDocument>,
}

impl ReferenceService {
    #[must_use]
    pub fn new(guides_dir: impl Into<PathBuf>, downloads_dir: impl Into<PathBuf>) -> Self {
        Self {
            guides_dir: guides_dir.into(),
            downloads_dir: downloads_dir.into(),
            documents: study_guide(),
        }
    }

    #[must_use]
    pub fn documents(&self) -> &[GuideDocument] {
        &self.documents
    }

    #[must_use]
    pub fn guides_dir(&self) -> &Path {
        &self.guides_dir
    }

    #[must_use]
    pub fn downloads_dir(&self) -> &Path {
        &self.downloads_dir
    }

    #[must_use]
    pub fn about(&self) -> &'static str {
        ABOUT_NOTICE
    }

    #[must_use]
    pub fn disclaimer(&self) -> &'static str {
        TRAINING_DISCLAIMER
    }

    #[must_use]
    pub fn regulator_link(&self) -> ExternalLink {
        regulator_link()
    }

    /// Copy the named guide into the downloads directory and return the new path.
    ///
    /// # Errors
    ///
    /// Returns `ReferenceError::UnknownDocument` if `file_name` is not one of the
    /// listed guides, or `ReferenceError::DataUnavailable` if the copy fails.
    pub fn save_document(&self, file_name: &str) -> Result<PathBuf, ReferenceError> {
        let document = self
            .documents
            .iter()
            .find(|d| d.file_name() == file_name)
            .ok_or_else(|| ReferenceError::UnknownDocument(file_name.to_owned()))?;

        let source = self.guides_dir.join(document.file_name());
        let target = self.downloads_dir.join(document.file_name());

        fs::create_dir_all(&self.downloads_dir).map_err(|e| unavailable(&self.downloads_dir, &e))?;
        fs::copy(&source, &target).map_err(|e| {
            warn!(path = %source.display(), error = %e, "study guide copy failed");
            unavailable(&source, &e)
        })?;

        info!(document = document.title(), target = %target.display(), "study guide saved");
        Ok(target)
    }
}

fn unavailable(path: &Path, err: &std::io::Error) -> ReferenceError {
    ReferenceError::DataUnavailable {
        path: path.to_path_buf(),
        reason: err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_copies_guide_into_downloads() {
        let guides = tempfile::tempdir().unwrap();
        let downloads = tempfile::tempdir().unwrap();
        let svc = ReferenceService::new(guides.path(), downloads.path().join("nested"));
        let name = svc.documents()[0].file_name().to_owned();
        fs::write(guides.path().join(&name), b"docx bytes").unwrap();

        let saved = svc.save_document(&name).unwrap();

        assert_eq!(saved, downloads.path().join("nested").join(&name));
        assert_eq!(fs::read(saved).unwrap(), b"docx bytes");
    }

    #[test]
    fn missing_source_file_is_unavailable() {
        let guides = tempfile::tempdir().unwrap();
        let svc = ReferenceService::new(guides.path(), guides.path());
        let name = svc.documents()[1].file_name().to_owned();

        let err = svc.save_document(&name).unwrap_err();
        assert!(matches!(err, ReferenceError::DataUnavailable { .. }));
    }

    #[test]
    fn unlisted_document_is_rejected() {
        let svc = ReferenceService::new(".", ".");
        let err = svc.save_document("../secrets.docx").unwrap_err();
        assert!(matches!(err, ReferenceError::UnknownDocument(name) if name == "../secrets.docx"));
    }

    #[test]
    fn regulator_link_is_https() {
        let svc = ReferenceService::new(".", ".");
        assert_eq!(svc.regulator_link().url().scheme(), "https");
    }
}
