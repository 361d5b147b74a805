//! Structural classification of route selectors.

use crate::documentation::RouteDocumentation;
use crate::tree::Selector;

/// The structural role a route node plays while reconstructing paths.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectorKind<'a> {
    Root,
    TrailingSlash,
    /// Literal or parameter segment, in its path-template form
    Segment(String),
    /// Method terminator with the method token as registered
    HttpMethod(&'a str),
    AuthWrapper,
    DocumentationWrapper(&'a RouteDocumentation),
    /// Unrecognized node type, treated as a path segment
    Other(String),
}

/// Classify a selector by its own tag alone.
pub fn classify(selector: &Selector) -> SelectorKind<'_> {
    match selector {
        Selector::Root => SelectorKind::Root,
        Selector::TrailingSlash => SelectorKind::TrailingSlash,
        Selector::Constant(_)
        | Selector::Parameter(_)
        | Selector::OptionalParameter(_)
        | Selector::Wildcard
        | Selector::Tailcard(_) => SelectorKind::Segment(selector.to_string()),
        Selector::Method(method) => SelectorKind::HttpMethod(method),
        Selector::Authenticate(_) => SelectorKind::AuthWrapper,
        Selector::Documented(documentation) => SelectorKind::DocumentationWrapper(documentation),
        Selector::Extension { .. } => SelectorKind::Other(selector.to_string()),
    }
}
