//! Error taxonomy for menu construction.
//!
//! Every variant is raised at configuration/build time, before any frame
//! is produced. Render-time conditions (overlong art, empty menus) are
//! not errors; they degrade inside the renderers.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MenuError {
    /// Malformed geometry or shorthand: negative width/padding/margin,
    /// bad border-shorthand arity, unknown colour names.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A numeric colour code outside the range of the depth it requests.
    #[error("invalid colour code: {0}")]
    InvalidColour(String),

    /// An operation that would leave a menu uncontrollable.
    #[error("illegal operation: {0}")]
    IllegalOperation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = MenuError::InvalidColour("512 exceeds the 256 colour palette".into());
        assert_eq!(
            err.to_string(),
            "invalid colour code: 512 exceeds the 256 colour palette"
        );

        let err = MenuError::IllegalOperation("can't disable the root menu".into());
        assert!(err.to_string().contains("can't disable the root menu"));
    }
}
