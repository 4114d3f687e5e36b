// src/models/match_criteria.rs

/// The three optional filters. An empty string disables its criterion.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MatchCriteria {
    /// Filename wildcard.
    pub name: String,
    /// Exact capture date, compared as a string.
    pub date: String,
    /// Camera model wildcard.
    pub model: String,
}

impl MatchCriteria {
    #[inline]
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        date: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            date: date.into(),
            model: model.into(),
        }
    }

    #[inline]
    #[must_use]
    pub fn is_name_active(&self) -> bool {
        !self.name.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn is_date_active(&self) -> bool {
        !self.date.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn is_model_active(&self) -> bool {
        !self.model.is_empty()
    }
}
