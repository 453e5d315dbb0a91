//! Expression escaping for provider template syntax
//!
//! String fields may embed interpolated expressions in the provider's
//! `${{ ... }}` form. The core never evaluates them; it only needs to tell
//! expression-bearing strings apart from plain literals (so the serializer
//! emits them verbatim) and to reject strings whose delimiters don't balance.

use std::fmt;
use std::ops::Range;

use crate::error::CompileError;

/// Opening delimiter of an interpolated expression
pub const EXPR_OPEN: &str = "${{";
/// Closing delimiter of an interpolated expression
pub const EXPR_CLOSE: &str = "}}";

/// An opaque interpolation token, e.g. `runner.os` in `${{ runner.os }}`.
///
/// Holds the bare expression body; [`Expression::escape`] produces the
/// delimited template form. The body itself may not contain delimiter
/// markers, so escape/extract round-trips exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expression(String);

impl Expression {
    /// Create an expression token from its bare body.
    pub fn new(inner: impl AsRef<str>) -> Result<Self, CompileError> {
        let inner = inner.as_ref().trim();
        if inner.contains(EXPR_OPEN) || inner.contains(EXPR_CLOSE) {
            return Err(CompileError::ExpressionNesting {
                inner: inner.to_string(),
            });
        }
        Ok(Expression(inner.to_string()))
    }

    /// The bare expression body
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The delimited template form, `${{ body }}`
    pub fn escape(&self) -> String {
        format!("{EXPR_OPEN} {} {EXPR_CLOSE}", self.0)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.escape())
    }
}

/// Whether `value` carries at least one well-formed expression and must
/// therefore bypass literal quoting when serialized.
pub fn is_expression(value: &str) -> bool {
    matches!(scan(value), Ok(spans) if !spans.is_empty())
}

/// Reject strings with unbalanced `${{` / `}}` markers.
///
/// A stray closer, an unclosed opener, or an opener inside an open expression
/// are all structural errors; they are never silently passed through.
pub fn validate_delimiters(value: &str) -> Result<(), CompileError> {
    scan(value).map(|_| ())
}

/// Extract the trimmed body of every balanced expression in `value`,
/// in order of appearance. Mixed literal/expression strings are fine;
/// the literal parts are simply skipped.
pub fn extract(value: &str) -> Result<Vec<&str>, CompileError> {
    let spans = scan(value)?;
    Ok(spans.into_iter().map(|s| value[s].trim()).collect())
}

/// Single pass over `value`, returning the byte range of each expression
/// body. Delimiters are ASCII, so every range starts and ends on a char
/// boundary.
fn scan(value: &str) -> Result<Vec<Range<usize>>, CompileError> {
    let bytes = value.as_bytes();
    let mut spans = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i..].starts_with(EXPR_OPEN.as_bytes()) {
            let body_start = i + EXPR_OPEN.len();
            let Some(rel) = value[body_start..].find(EXPR_CLOSE) else {
                return Err(CompileError::UnbalancedExpression {
                    value: value.to_string(),
                });
            };
            let body = &value[body_start..body_start + rel];
            if body.contains(EXPR_OPEN) {
                return Err(CompileError::UnbalancedExpression {
                    value: value.to_string(),
                });
            }
            spans.push(body_start..body_start + rel);
            i = body_start + rel + EXPR_CLOSE.len();
        } else if bytes[i..].starts_with(EXPR_CLOSE.as_bytes()) {
            // closer with no matching opener
            return Err(CompileError::UnbalancedExpression {
                value: value.to_string(),
            });
        } else {
            i += 1;
        }
    }

    Ok(spans)
}
