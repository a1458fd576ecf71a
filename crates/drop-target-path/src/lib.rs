//! Drop-target path expressions.
//!
//! A drop-target field name encodes a write instruction against a node tree:
//! the reserved prefix marks the field as an instruction, and the remainder is
//! a slash-separated path expression describing where the submitted value goes.
//!
//! # Example
//!
//! ```
//! use drop_target_path::{parse_path_expr, target_of, Segment};
//!
//! // Strip the reserved prefix from a submitted field name
//! let target = target_of("./dropTarget->/subNode/{{COMPOSITE}}/@link").unwrap();
//! assert_eq!(target, "/subNode/{{COMPOSITE}}/@link");
//!
//! // Parse the remainder into typed segments
//! let expr = parse_path_expr(target);
//! assert_eq!(
//!     expr,
//!     vec![
//!         Segment::Navigate("subNode".to_string()),
//!         Segment::Composite,
//!         Segment::Property("link".to_string()),
//!     ]
//! );
//! ```

pub mod types;
pub use types::{PathExpr, Segment};

pub mod validate;
pub use validate::{validate_path_expr, ValidationError};

/// Reserved prefix that marks a submitted field name as a drop-target
/// instruction.
pub const DROP_TARGET_PREFIX: &str = "./dropTarget->";

/// Path token that requests a fresh auto-numbered child node.
pub const COMPOSITE_MARKER: &str = "{{COMPOSITE}}";

/// Leading character of a property segment.
pub const PROPERTY_PREFIX: char = '@';

/// Segment separator within a path expression.
pub const SEPARATOR: char = '/';

/// Relative-property prefix used by the host's field naming convention.
pub const RELATIVE_PREFIX: &str = "./";

/// Check whether a submitted field name carries the drop-target prefix.
///
/// # Example
///
/// ```
/// use drop_target_path::is_drop_target;
///
/// assert!(is_drop_target("./dropTarget->@items"));
/// assert!(!is_drop_target("./items"));
/// ```
pub fn is_drop_target(field_name: &str) -> bool {
    field_name.starts_with(DROP_TARGET_PREFIX)
}

/// Strip the drop-target prefix from a field name.
///
/// Returns the path-expression remainder, or `None` when the name does not
/// carry the prefix.
///
/// # Example
///
/// ```
/// use drop_target_path::target_of;
///
/// assert_eq!(target_of("./dropTarget->@items"), Some("@items"));
/// assert_eq!(target_of("./items"), None);
/// ```
pub fn target_of(field_name: &str) -> Option<&str> {
    field_name.strip_prefix(DROP_TARGET_PREFIX)
}

/// Name of the scratch child node a previous widget implementation staged
/// under the target node: the reserved prefix with the relative-property
/// prefix stripped.
///
/// # Example
///
/// ```
/// use drop_target_path::scratch_node_name;
///
/// assert_eq!(scratch_node_name(), "dropTarget->");
/// ```
pub fn scratch_node_name() -> &'static str {
    DROP_TARGET_PREFIX
        .strip_prefix(RELATIVE_PREFIX)
        .unwrap_or(DROP_TARGET_PREFIX)
}

/// Classify one raw path segment.
///
/// Blank segments (consecutive or trailing separators, whitespace-only text)
/// classify to `None` and are skipped by [`parse_path_expr`].
fn classify(raw: &str) -> Option<Segment> {
    if let Some(name) = raw.strip_prefix(PROPERTY_PREFIX) {
        return Some(Segment::Property(name.to_string()));
    }
    if raw == COMPOSITE_MARKER {
        return Some(Segment::Composite);
    }
    if raw.trim().is_empty() {
        return None;
    }
    Some(Segment::Navigate(raw.to_string()))
}

/// Parse a path-expression remainder into typed segments.
///
/// The remainder is split on `/` and each piece classified:
/// - leading `@` makes a property segment,
/// - the `{{COMPOSITE}}` token makes a composite segment,
/// - blank pieces are skipped,
/// - anything else is a navigation segment.
///
/// Parsing is purely lexical: a property segment in a non-terminal position is
/// kept as-is. The walk treats the first property segment as terminal, and
/// [`validate_path_expr`](crate::validate_path_expr) reports the misplacement
/// for hosts that want to reject such expressions up front.
///
/// # Example
///
/// ```
/// use drop_target_path::{parse_path_expr, Segment};
///
/// assert_eq!(parse_path_expr(""), Vec::new());
/// assert_eq!(
///     parse_path_expr("/subNode/@items"),
///     vec![
///         Segment::Navigate("subNode".to_string()),
///         Segment::Property("items".to_string()),
///     ]
/// );
/// ```
pub fn parse_path_expr(target: &str) -> PathExpr {
    target.split(SEPARATOR).filter_map(classify).collect()
}

/// Format a path expression back into its textual form.
///
/// The inverse of [`parse_path_expr`] up to blank segments, which parsing
/// drops. Used for diagnostics and change-record messages.
///
/// # Example
///
/// ```
/// use drop_target_path::{format_path_expr, Segment};
///
/// let expr = vec![
///     Segment::Navigate("subNode".to_string()),
///     Segment::Composite,
///     Segment::Property("link".to_string()),
/// ];
/// assert_eq!(format_path_expr(&expr), "subNode/{{COMPOSITE}}/@link");
/// ```
pub fn format_path_expr(expr: &[Segment]) -> String {
    let mut out = String::new();
    for (i, segment) in expr.iter().enumerate() {
        if i > 0 {
            out.push(SEPARATOR);
        }
        match segment {
            Segment::Navigate(name) => out.push_str(name),
            Segment::Composite => out.push_str(COMPOSITE_MARKER),
            Segment::Property(name) => {
                out.push(PROPERTY_PREFIX);
                out.push_str(name);
            }
        }
    }
    out
}
