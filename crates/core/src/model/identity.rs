use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum IdentityError {
    #[error("respondent name cannot be empty")]
    EmptyName,

    #[error("respondent group cannot be empty")]
    EmptyGroup,
}

/// Raw name/group input as typed on the start screen.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IdentityDraft {
    pub name: String,
    pub group: String,
}

impl IdentityDraft {
    #[must_use]
    pub fn new(name: impl Into<String>, group: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            group: group.into(),
        }
    }

    /// Trim both fields and require them to be non-empty.
    ///
    /// # Errors
    ///
    /// Returns `IdentityError::EmptyName` or `IdentityError::EmptyGroup`.
    pub fn validate(self) -> Result<RespondentIdentity, IdentityError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(IdentityError::EmptyName);
        }
        let group = self.group.trim();
        if group.is_empty() {
            return Err(IdentityError::EmptyGroup);
        }

        Ok(RespondentIdentity {
            name: name.to_string(),
            group: group.to_string(),
        })
    }
}

/// Who is taking the quiz. Only used to label the report.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RespondentIdentity {
    name: String,
    group: String,
}

impl RespondentIdentity {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn group(&self) -> &str {
        &self.group
    }
}
