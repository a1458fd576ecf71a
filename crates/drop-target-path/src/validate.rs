//! Validation functions for drop-target path expressions.
//!
//! The rewriter itself only skips empty expressions; these checks are for
//! hosts that want to reject suspicious widget configuration up front.

use thiserror::Error;

use crate::types::Segment;

/// Maximum allowed expression depth.
const MAX_EXPR_LENGTH: usize = 256;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("EMPTY_EXPR")]
    EmptyExpr,
    #[error("EXPR_TOO_LONG")]
    ExprTooLong,
    #[error("PROPERTY_NOT_TERMINAL")]
    PropertyNotTerminal,
    #[error("EMPTY_PROPERTY_NAME")]
    EmptyPropertyName,
}

/// Validate a parsed path expression.
///
/// # Errors
///
/// Returns an error if:
/// - The expression has no segments
/// - The expression exceeds the maximum depth (256 segments)
/// - A property segment appears in a non-terminal position
/// - A property segment has an empty name
///
/// # Example
///
/// ```
/// use drop_target_path::{parse_path_expr, validate_path_expr};
///
/// validate_path_expr(&parse_path_expr("/subNode/@items")).unwrap();
/// validate_path_expr(&parse_path_expr("@items/trailing")).unwrap_err();
/// validate_path_expr(&parse_path_expr("")).unwrap_err();
/// ```
pub fn validate_path_expr(expr: &[Segment]) -> Result<(), ValidationError> {
    if expr.is_empty() {
        return Err(ValidationError::EmptyExpr);
    }
    if expr.len() > MAX_EXPR_LENGTH {
        return Err(ValidationError::ExprTooLong);
    }
    for (i, segment) in expr.iter().enumerate() {
        if let Segment::Property(name) = segment {
            if name.is_empty() {
                return Err(ValidationError::EmptyPropertyName);
            }
            if i + 1 != expr.len() {
                return Err(ValidationError::PropertyNotTerminal);
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_path_expr;

    #[test]
    fn test_validate_ok() {
        assert!(validate_path_expr(&parse_path_expr("@items")).is_ok());
        assert!(validate_path_expr(&parse_path_expr("/subNode/@items")).is_ok());
        assert!(validate_path_expr(&parse_path_expr("/subNode/{{COMPOSITE}}/@link")).is_ok());
        // Navigation-only expressions are structurally valid
        assert!(validate_path_expr(&parse_path_expr("/a/b")).is_ok());
    }

    #[test]
    fn test_validate_empty() {
        assert_eq!(
            validate_path_expr(&parse_path_expr("")),
            Err(ValidationError::EmptyExpr)
        );
        assert_eq!(
            validate_path_expr(&parse_path_expr("///")),
            Err(ValidationError::EmptyExpr)
        );
    }

    #[test]
    fn test_validate_property_not_terminal() {
        assert_eq!(
            validate_path_expr(&parse_path_expr("@items/trailing")),
            Err(ValidationError::PropertyNotTerminal)
        );
        assert_eq!(
            validate_path_expr(&parse_path_expr("@a/@b")),
            Err(ValidationError::PropertyNotTerminal)
        );
    }

    #[test]
    fn test_validate_empty_property_name() {
        assert_eq!(
            validate_path_expr(&parse_path_expr("@")),
            Err(ValidationError::EmptyPropertyName)
        );
    }

    #[test]
    fn test_validate_long_expr() {
        let target: String = (0..300).map(|i| format!("/n{i}")).collect();
        assert_eq!(
            validate_path_expr(&parse_path_expr(&target)),
            Err(ValidationError::ExprTooLong)
        );
    }

    #[test]
    fn test_validate_max_length_expr() {
        let target: String = (0..256).map(|i| format!("/n{i}")).collect();
        assert!(validate_path_expr(&parse_path_expr(&target)).is_ok());
    }
}
