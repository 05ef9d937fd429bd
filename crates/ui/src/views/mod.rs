mod certificate;
mod character_select;
mod export;
mod question;
mod quiz;
mod result;
mod state;

pub use certificate::CertificateView;
pub use character_select::CharacterSelect;
pub use export::{ExportStatus, use_certificate_export};
pub use question::QuestionCard;
pub use quiz::QuizView;
pub use result::ResultCard;
pub use state::ViewError;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;
