use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{info, warn};

use super::render::render_certificate_png;
use super::summary::CertificateSummary;
use crate::error::ExportError;

/// A rendered certificate and where it ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedCertificate {
    /// File on disk, if the exporter writes one.
    pub path: Option<PathBuf>,
    pub png: Vec<u8>,
    /// Whether a viewer was launched for the file.
    pub opened: bool,
}

/// Turns a finished session summary into a user-visible image.
pub trait CertificateExporter: Send + Sync {
    /// # Errors
    ///
    /// Returns `ExportError` if the image cannot be produced or stored.
    fn export(&self, summary: &CertificateSummary) -> Result<ExportedCertificate, ExportError>;
}

/// Shows an exported file to the user (system viewer, browser tab, ...).
pub trait CertificateOpener: Send + Sync {
    /// # Errors
    ///
    /// Returns an I/O error if the viewer could not be launched.
    fn open(&self, path: &Path) -> io::Result<()>;
}

/// Renders to memory only; the caller decides how to present the bytes.
#[derive(Debug, Clone, Copy, Default)]
pub struct InMemoryCertificateExporter;

impl CertificateExporter for InMemoryCertificateExporter {
    fn export(&self, summary: &CertificateSummary) -> Result<ExportedCertificate, ExportError> {
        let png = render_certificate_png(summary)?;
        Ok(ExportedCertificate {
            path: None,
            png,
            opened: false,
        })
    }
}

/// Writes `<dir>/certificate-<name>-<date>.png` and optionally opens it.
#[derive(Clone)]
pub struct FileCertificateExporter {
    dir: PathBuf,
    opener: Option<Arc<dyn CertificateOpener>>,
}

impl FileCertificateExporter {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            opener: None,
        }
    }

    #[must_use]
    pub fn with_opener(mut self, opener: Arc<dyn CertificateOpener>) -> Self {
        self.opener = Some(opener);
        self
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl CertificateExporter for FileCertificateExporter {
    fn export(&self, summary: &CertificateSummary) -> Result<ExportedCertificate, ExportError> {
        let png = render_certificate_png(summary)?;

        fs::create_dir_all(&self.dir)?;
        if !self.dir.is_dir() {
            return Err(ExportError::Unavailable(format!(
                "{} is not a directory",
                self.dir.display()
            )));
        }
        let path = self.dir.join(format!("{}.png", summary.file_stem()));
        fs::write(&path, &png)?;
        info!(path = %path.display(), bytes = png.len(), "certificate exported");

        // The file is already saved; a missing viewer is not an export failure.
        let opened = match &self.opener {
            Some(opener) => match opener.open(&path) {
                Ok(()) => true,
                Err(err) => {
                    warn!(path = %path.display(), error = %err, "could not open certificate");
                    false
                }
            },
            None => false,
        };

        Ok(ExportedCertificate {
            path: Some(path),
            png,
            opened,
        })
    }
}

impl std::fmt::Debug for FileCertificateExporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileCertificateExporter")
            .field("dir", &self.dir)
            .field("has_opener", &self.opener.is_some())
            .finish()
    }
}
