use services::{ExportError, SessionError};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewError {
    /// The exporter failed; carries its message for display.
    Export(String),
    NotFinished,
    Unknown,
}

impl ViewError {
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Export(reason) => format!("Could not create the certificate: {reason}"),
            Self::NotFinished => "Finish the quiz to earn your certificate.".to_string(),
            Self::Unknown => "Something went wrong. Please try again.".to_string(),
        }
    }
}

impl From<ExportError> for ViewError {
    fn from(err: ExportError) -> Self {
        Self::Export(err.to_string())
    }
}

impl From<SessionError> for ViewError {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::NotFinished | SessionError::NotStarted => Self::NotFinished,
            _ => Self::Unknown,
        }
    }
}
