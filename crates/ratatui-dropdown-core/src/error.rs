use thiserror::Error;

/// Errors raised while attaching a dropdown to its host markup.
///
/// Event handling never fails; these only surface from construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DropdownError {
    /// The host has no `<select>` descendant to mirror.
    #[error("dropdown host <{host}> has no <select> element")]
    MissingSelect { host: String },

    /// The host has no `<label>` descendant to reflect value/validity onto.
    #[error("dropdown host <{host}> has no <label> element")]
    MissingLabel { host: String },
}

pub type Result<T> = std::result::Result<T, DropdownError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_host() {
        let err = DropdownError::MissingSelect {
            host: "custom-dropdown".into(),
        };
        assert_eq!(
            err.to_string(),
            "dropdown host <custom-dropdown> has no <select> element"
        );
    }
}
