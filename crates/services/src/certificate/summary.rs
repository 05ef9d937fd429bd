/// Values printed on a completion certificate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CertificateSummary {
    pub character_name: String,
    pub score: u32,
    pub total: u32,
    pub time_remaining_formatted: String,
    pub date_stamp: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Title,
    Body,
    Strong,
    Small,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CertificateLine {
    pub text: String,
    pub style: LineStyle,
}

impl CertificateLine {
    fn new(text: impl Into<String>, style: LineStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

impl CertificateSummary {
    /// Certificate text, top to bottom. Shared by the preview and the image.
    #[must_use]
    pub fn lines(&self) -> Vec<CertificateLine> {
        vec![
            CertificateLine::new("Certificate of Completion", LineStyle::Title),
            CertificateLine::new("This certifies that", LineStyle::Body),
            CertificateLine::new(self.character_name.clone(), LineStyle::Strong),
            CertificateLine::new("has completed the Usercentrics App SDK Quiz", LineStyle::Body),
            CertificateLine::new(self.score_label(), LineStyle::Strong),
            CertificateLine::new(
                format!("Time remaining: {}", self.time_remaining_formatted),
                LineStyle::Body,
            ),
            CertificateLine::new(self.date_stamp.clone(), LineStyle::Small),
        ]
    }

    #[must_use]
    pub fn score_label(&self) -> String {
        format!("Score: {}/{}", self.score, self.total)
    }

    /// `certificate-<name>-<date>`, lowercase with dashes.
    #[must_use]
    pub fn file_stem(&self) -> String {
        let mut slug = String::with_capacity(self.character_name.len());
        for ch in self.character_name.chars() {
            if ch.is_ascii_alphanumeric() {
                slug.push(ch.to_ascii_lowercase());
            } else if !slug.ends_with('-') && !slug.is_empty() {
                slug.push('-');
            }
        }
        let slug = slug.trim_end_matches('-');
        let slug = if slug.is_empty() { "champion" } else { slug };
        format!("certificate-{slug}-{}", self.date_stamp)
    }

    pub(crate) fn is_valid(&self) -> bool {
        self.total > 0 && self.score <= self.total
    }
}
