use std::io;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use services::{
    CertificateExporter, CertificateOpener, CertificateSummary, ExportError,
    FileCertificateExporter, InMemoryCertificateExporter,
};

fn summary() -> CertificateSummary {
    CertificateSummary {
        character_name: "Consent Champion".to_string(),
        score: 6,
        total: 7,
        time_remaining_formatted: "3:41".to_string(),
        date_stamp: "2023-11-14".to_string(),
    }
}

#[derive(Default)]
struct CountingOpener {
    calls: AtomicUsize,
}

impl CertificateOpener for CountingOpener {
    fn open(&self, path: &Path) -> io::Result<()> {
        assert!(path.exists());
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

struct BrokenOpener;

impl CertificateOpener for BrokenOpener {
    fn open(&self, _path: &Path) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::NotFound, "no viewer"))
    }
}

#[test]
fn file_exporter_writes_png_and_opens_it() {
    let dir = tempfile::tempdir().unwrap();
    let opener = Arc::new(CountingOpener::default());
    let exporter = FileCertificateExporter::new(dir.path().join("certs")).with_opener(opener.clone());

    let exported = exporter.export(&summary()).unwrap();
    let path = exported.path.clone().unwrap();
    assert_eq!(
        path.file_name().unwrap(),
        "certificate-consent-champion-2023-11-14.png"
    );
    assert_eq!(std::fs::read(&path).unwrap(), exported.png);
    assert!(exported.opened);
    assert_eq!(opener.calls.load(Ordering::SeqCst), 1);
}

#[test]
fn opener_failure_keeps_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let exporter = FileCertificateExporter::new(dir.path()).with_opener(Arc::new(BrokenOpener));

    let exported = exporter.export(&summary()).unwrap();
    assert!(!exported.opened);
    assert!(exported.path.unwrap().exists());
}

#[test]
fn unusable_directory_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("not-a-dir");
    std::fs::write(&blocker, b"x").unwrap();

    let err = FileCertificateExporter::new(&blocker)
        .export(&summary())
        .unwrap_err();
    assert!(matches!(err, ExportError::Io(_) | ExportError::Unavailable(_)));
}

#[test]
fn in_memory_exporter_returns_png_only() {
    let exported = InMemoryCertificateExporter.export(&summary()).unwrap();
    assert!(exported.path.is_none());
    assert!(exported.png.starts_with(b"\x89PNG"));
}
