use std::io;
use std::path::Path;
use std::process::Command;

use services::CertificateOpener;

/// Hands the exported file to the operating system's default viewer.
pub struct DesktopCertificateOpener;

impl CertificateOpener for DesktopCertificateOpener {
    fn open(&self, path: &Path) -> io::Result<()> {
        let mut command = if cfg!(target_os = "macos") {
            Command::new("open")
        } else if cfg!(target_os = "windows") {
            let mut command = Command::new("cmd");
            command.args(["/C", "start", ""]);
            command
        } else {
            Command::new("xdg-open")
        };
        command.arg(path).spawn()?;
        Ok(())
    }
}
