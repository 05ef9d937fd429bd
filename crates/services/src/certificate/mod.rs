mod exporter;
mod font;
mod render;
mod summary;

pub use exporter::{
    CertificateExporter, CertificateOpener, ExportedCertificate, FileCertificateExporter,
    InMemoryCertificateExporter,
};
pub use render::{CERTIFICATE_HEIGHT, CERTIFICATE_WIDTH, render_certificate, render_certificate_png};
pub use summary::{CertificateLine, CertificateSummary, LineStyle};
