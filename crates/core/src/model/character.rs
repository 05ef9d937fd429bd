use std::fmt;
use thiserror::Error;

/// Avatar used until real artwork is wired in. Inline so it needs no bundled file.
pub const PLACEHOLDER_AVATAR: &str = concat!(
    "data:image/svg+xml;utf8,",
    "%3Csvg xmlns='http://www.w3.org/2000/svg' width='100' height='100' viewBox='0 0 100 100'%3E",
    "%3Ccircle cx='50' cy='50' r='50' fill='lightsteelblue'/%3E",
    "%3Ccircle cx='50' cy='38' r='18' fill='white'/%3E",
    "%3Cpath d='M18 88a32 26 0 0 1 64 0z' fill='white'/%3E",
    "%3C/svg%3E",
);

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CharacterError {
    #[error("character name cannot be empty")]
    EmptyName,

    #[error("character avatar cannot be empty")]
    EmptyAvatar,
}

/// Opaque reference to an avatar image (asset path or URL).
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct AvatarRef(String);

impl AvatarRef {
    /// Creates a new `AvatarRef`
    ///
    /// # Errors
    ///
    /// Returns `CharacterError::EmptyAvatar` for blank references.
    pub fn new(value: impl Into<String>) -> Result<Self, CharacterError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(CharacterError::EmptyAvatar);
        }
        Ok(Self(value))
    }

    #[must_use]
    pub fn placeholder() -> Self {
        Self(PLACEHOLDER_AVATAR.to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AvatarRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AvatarRef({})", self.0)
    }
}

impl fmt::Display for AvatarRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A selectable quiz persona.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Character {
    name: String,
    avatar: AvatarRef,
    description: String,
}

impl Character {
    /// # Errors
    ///
    /// Returns `CharacterError::EmptyName` if the trimmed name is empty.
    pub fn new(
        name: impl Into<String>,
        avatar: AvatarRef,
        description: impl Into<String>,
    ) -> Result<Self, CharacterError> {
        let name = name.into().trim().to_owned();
        if name.is_empty() {
            return Err(CharacterError::EmptyName);
        }

        Ok(Self {
            name,
            avatar,
            description: description.into(),
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn avatar(&self) -> &AvatarRef {
        &self.avatar
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }
}
