use base64::{Engine as _, engine::general_purpose::STANDARD};
use services::ExportedCertificate;

/// `data:` URL so the PNG can be shown inline without touching disk.
#[must_use]
pub fn png_data_url(png: &[u8]) -> String {
    format!("data:image/png;base64,{}", STANDARD.encode(png))
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportedVm {
    pub location: Option<String>,
    pub data_url: String,
    pub opened: bool,
}

impl From<&ExportedCertificate> for ExportedVm {
    fn from(exported: &ExportedCertificate) -> Self {
        Self {
            location: exported
                .path
                .as_ref()
                .map(|path| path.display().to_string()),
            data_url: png_data_url(&exported.png),
            opened: exported.opened,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn data_url_encodes_bytes() {
        assert_eq!(png_data_url(b"abc"), "data:image/png;base64,YWJj");
    }

    #[test]
    fn exported_vm_reports_location() {
        let exported = ExportedCertificate {
            path: Some(PathBuf::from("/tmp/certificate.png")),
            png: vec![1, 2, 3],
            opened: true,
        };
        let vm = ExportedVm::from(&exported);
        assert_eq!(vm.location.as_deref(), Some("/tmp/certificate.png"));
        assert!(vm.opened);
        assert!(vm.data_url.starts_with("data:image/png;base64,"));
    }
}
