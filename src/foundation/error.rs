/// Convenience alias for results produced by this crate.
pub type CroquisResult<T> = Result<T, CroquisError>;

/// Crate-wide error type.
///
/// The styling core itself has no failure modes beyond "constraint not
/// satisfiable", which is modeled as an empty [`crate::outfit::composer::Outfit`],
/// not an error. Errors here come from the boundaries: invalid model data,
/// rasterization limits, and serialization.
#[derive(thiserror::Error, Debug)]
pub enum CroquisError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("render error: {0}")]
    Render(String),

    #[error("serialization error: {0}")]
    Serde(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CroquisError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefixes_are_stable() {
        assert!(
            CroquisError::validation("x")
                .to_string()
                .contains("validation error:")
        );
        assert!(
            CroquisError::render("x")
                .to_string()
                .contains("render error:")
        );
        assert!(CroquisError::serde("x").to_string().contains("serialization error:"));
    }

    #[test]
    fn other_preserves_source() {
        let base = std::io::Error::other("boom");
        let err = CroquisError::Other(anyhow::Error::new(base));
        assert!(err.to_string().contains("boom"));
    }
}
