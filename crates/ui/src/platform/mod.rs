mod desktop;

pub use desktop::DesktopCertificateOpener;
