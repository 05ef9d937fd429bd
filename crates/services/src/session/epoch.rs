use std::fmt;

/// Generation counter for a controller; bumped on every reset.
///
/// Deferred work captures the epoch when scheduled and is discarded if the
/// epoch moved on before it fired.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct SessionEpoch(u64);

impl SessionEpoch {
    #[must_use]
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    #[must_use]
    pub fn value(&self) -> u64 {
        self.0
    }

    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

impl fmt::Debug for SessionEpoch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SessionEpoch({})", self.0)
    }
}

impl fmt::Display for SessionEpoch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Post-submission advance, applied once the feedback delay has elapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeferredAdvance {
    pub(crate) epoch: SessionEpoch,
    pub(crate) question_index: usize,
}

impl DeferredAdvance {
    #[must_use]
    pub fn epoch(&self) -> SessionEpoch {
        self.epoch
    }

    #[must_use]
    pub fn question_index(&self) -> usize {
        self.question_index
    }
}
