#![forbid(unsafe_code)]

pub mod certificate;
pub mod error;
pub mod session;

pub use quiz_core::Clock;

pub use error::{ExportError, SessionError};
pub use session::{
    AnswerFeedback, DeferredAdvance, DeferredOutcome, QuizSessionController, SessionEpoch,
    SessionHandle, SessionProgress, SessionSnapshot, SharedController, SubmittedAnswer,
    TickOutcome,
};
pub use certificate::{
    CertificateExporter, CertificateOpener, CertificateSummary, ExportedCertificate,
    FileCertificateExporter, InMemoryCertificateExporter,
};
