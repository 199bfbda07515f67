//! Per-call parser configuration.

use tokio_util::sync::CancellationToken;

/// Default bound on expression and block nesting.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Options for [`parse_with`](crate::parse_with).
///
/// There is no global configuration; every call carries its own options.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Deepest nesting of expressions, equations, statements and class
    /// definitions before the parser gives up on the construct (E0408).
    pub max_depth: usize,
    /// Checked before each class definition, element, equation and statement.
    pub cancellation: Option<CancellationToken>,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            cancellation: None,
        }
    }
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = ParseOptions::default();
        assert_eq!(options.max_depth, DEFAULT_MAX_DEPTH);
        assert!(options.cancellation.is_none());
    }

    #[test]
    fn test_builders() {
        let token = CancellationToken::new();
        let options = ParseOptions::new()
            .with_max_depth(8)
            .with_cancellation(token.clone());
        assert_eq!(options.max_depth, 8);
        token.cancel();
        assert!(options.cancellation.is_some_and(|t| t.is_cancelled()));
    }
}
