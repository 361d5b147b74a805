//! Path reconstruction and metadata resolution over a node's ancestor chain.
//!
//! Every function here climbs from a node towards the root using parent
//! links only. Wrapper nodes (methods, authentication, documentation) add no
//! path segment; a trailing-slash node always reconstructs to `"/"`.

use crate::documentation::RouteDocumentation;
use crate::error::{Error, Result};
use crate::paths::HttpMethod;
use crate::selector::{classify, SelectorKind};
use crate::tree::{NodeId, RouteTree};

/// Longest ancestor chain the resolvers will climb.
pub const MAX_DEPTH: usize = 1024;

/// Reconstruct the path template of `node` from its ancestors.
pub fn reconstruct_path(tree: &RouteTree, node: NodeId) -> Result<String> {
    path_of(tree, node, 0)
}

fn path_of(tree: &RouteTree, node: NodeId, depth: usize) -> Result<String> {
    if depth >= MAX_DEPTH {
        return Err(Error::TreeTooDeep { limit: MAX_DEPTH });
    }
    let parent_path = || match tree.parent(node) {
        Some(parent) => path_of(tree, parent, depth + 1),
        None => Ok(String::new()),
    };

    match classify(tree.selector(node)) {
        SelectorKind::TrailingSlash => Ok("/".to_string()),
        SelectorKind::Root => Ok(String::new()),
        SelectorKind::DocumentationWrapper(_)
        | SelectorKind::HttpMethod(_)
        | SelectorKind::AuthWrapper => parent_path(),
        SelectorKind::Segment(raw) | SelectorKind::Other(raw) => {
            Ok(format!("{}/{}", parent_path()?, raw))
        }
    }
}

/// Climb from `node` (inclusive) to the root and return the first answer
/// `matches` produces.
fn find_ancestor<'t, T>(
    tree: &'t RouteTree,
    node: NodeId,
    mut matches: impl FnMut(SelectorKind<'t>) -> Option<T>,
) -> Result<Option<T>> {
    let mut current = Some(node);
    let mut depth = 0;
    while let Some(id) = current {
        if depth >= MAX_DEPTH {
            return Err(Error::TreeTooDeep { limit: MAX_DEPTH });
        }
        if let Some(found) = matches(classify(tree.selector(id))) {
            return Ok(Some(found));
        }
        current = tree.parent(id);
        depth += 1;
    }
    Ok(None)
}

/// Documentation of the nearest documented ancestor, or empty documentation.
pub fn resolve_documentation(tree: &RouteTree, node: NodeId) -> Result<RouteDocumentation> {
    let found = find_ancestor(tree, node, |kind| match kind {
        SelectorKind::DocumentationWrapper(documentation) => Some(documentation),
        _ => None,
    })?;
    Ok(found.cloned().unwrap_or_default())
}

/// Whether any ancestor (inclusive) is an authentication wrapper.
pub fn resolve_protected(tree: &RouteTree, node: NodeId) -> Result<bool> {
    let found = find_ancestor(tree, node, |kind| match kind {
        SelectorKind::AuthWrapper => Some(()),
        _ => None,
    })?;
    Ok(found.is_some())
}

/// The HTTP method of a method-terminator node.
///
/// A missing or unsupported method token is an error in the registered tree.
pub fn resolve_method(tree: &RouteTree, node: NodeId) -> Result<HttpMethod> {
    let token = match classify(tree.selector(node)) {
        SelectorKind::HttpMethod(token) => token,
        _ => "",
    };
    HttpMethod::parse(token).ok_or_else(|| Error::InvalidMethod {
        path: reconstruct_path(tree, node).unwrap_or_default(),
        method: token.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::Selector;
    use pretty_assertions::assert_eq;

    fn documentation(summary: &str) -> RouteDocumentation {
        RouteDocumentation {
            summary: Some(summary.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_reconstruct_simple_path() {
        let mut tree = RouteTree::new();
        let id = tree.route(tree.root(), "/users/{id}");
        let get = tree.method(id, "GET");

        assert_eq!(reconstruct_path(&tree, get).unwrap(), "/users/{id}");
        assert_eq!(reconstruct_path(&tree, id).unwrap(), "/users/{id}");
    }

    #[test]
    fn test_reconstruct_root_and_method_on_root() {
        let mut tree = RouteTree::new();
        let get = tree.method(tree.root(), "GET");

        assert_eq!(reconstruct_path(&tree, tree.root()).unwrap(), "");
        assert_eq!(reconstruct_path(&tree, get).unwrap(), "");
    }

    #[test]
    fn test_wrapper_without_parent_is_empty() {
        let tree = RouteTree::with_root(Selector::Authenticate(vec![]));
        assert_eq!(reconstruct_path(&tree, tree.root()).unwrap(), "");

        let tree = RouteTree::with_root(Selector::Constant("api".to_string()));
        assert_eq!(reconstruct_path(&tree, tree.root()).unwrap(), "/api");
    }

    #[test]
    fn test_trailing_slash_ignores_ancestors() {
        let mut tree = RouteTree::new();
        let slash = tree.route(tree.root(), "/api/v1/users/");
        let get = tree.method(slash, "GET");

        assert_eq!(reconstruct_path(&tree, slash).unwrap(), "/");
        assert_eq!(reconstruct_path(&tree, get).unwrap(), "/");
    }

    #[test]
    fn test_segment_after_trailing_slash() {
        let mut tree = RouteTree::new();
        let slash = tree.route(tree.root(), "/api/");
        let nested = tree.route(slash, "items");

        assert_eq!(reconstruct_path(&tree, nested).unwrap(), "//items");
    }

    #[test]
    fn test_wrapper_transparency() {
        let mut plain = RouteTree::new();
        let users = plain.route(plain.root(), "users");
        let id = plain.route(users, "{id}");
        let plain_get = plain.method(id, "GET");

        let mut wrapped = RouteTree::new();
        let users = wrapped.route(wrapped.root(), "users");
        let auth = wrapped.authenticate(users, &["jwt"]);
        let documented = wrapped.documented(auth, documentation("Get user"));
        let id = wrapped.route(documented, "{id}");
        let wrapped_get = wrapped.method(id, "GET");

        assert_eq!(
            reconstruct_path(&plain, plain_get).unwrap(),
            reconstruct_path(&wrapped, wrapped_get).unwrap()
        );
    }

    #[test]
    fn test_extension_node_is_a_segment() {
        let mut tree = RouteTree::new();
        let header = tree.add_child(
            tree.root(),
            Selector::Extension { kind: "header".to_string(), value: Some("X-Api".to_string()) },
        );
        let get = tree.method(header, "GET");

        assert_eq!(reconstruct_path(&tree, get).unwrap(), "/(header:X-Api)");
    }

    #[test]
    fn test_reconstruct_is_deterministic() {
        let mut tree = RouteTree::new();
        let leaf = tree.route(tree.root(), "/a/{b?}/*/{rest...}");
        let get = tree.method(leaf, "GET");

        let first = reconstruct_path(&tree, get).unwrap();
        let second = reconstruct_path(&tree, get).unwrap();
        assert_eq!(first, "/a/{b?}/*/{rest...}");
        assert_eq!(first, second);
    }

    #[test]
    fn test_nearest_documentation_wins() {
        let mut tree = RouteTree::new();
        let outer = tree.documented(tree.root(), documentation("outer"));
        let users = tree.route(outer, "users");
        let inner = tree.documented(users, documentation("inner"));
        let get = tree.method(inner, "GET");
        let post = tree.method(users, "POST");

        assert_eq!(resolve_documentation(&tree, get).unwrap().summary.as_deref(), Some("inner"));
        assert_eq!(resolve_documentation(&tree, post).unwrap().summary.as_deref(), Some("outer"));
    }

    #[test]
    fn test_missing_documentation_is_default() {
        let mut tree = RouteTree::new();
        let users = tree.route(tree.root(), "users/");
        let get = tree.method(users, "GET");

        assert_eq!(resolve_documentation(&tree, get).unwrap(), RouteDocumentation::default());
    }

    #[test]
    fn test_protection_propagates_from_any_depth() {
        let mut tree = RouteTree::new();
        let auth = tree.authenticate(tree.root(), &["session"]);
        let deep = tree.route(auth, "/a/b/c/");
        let get = tree.method(deep, "GET");

        let public = tree.route(tree.root(), "/a/b/c");
        let public_get = tree.method(public, "GET");

        assert!(resolve_protected(&tree, get).unwrap());
        assert!(!resolve_protected(&tree, public_get).unwrap());
    }

    #[test]
    fn test_node_itself_counts_as_ancestor() {
        let tree = RouteTree::with_root(Selector::Authenticate(vec![]));
        assert!(resolve_protected(&tree, tree.root()).unwrap());

        let tree = RouteTree::with_root(Selector::Documented(documentation("self")));
        assert_eq!(
            resolve_documentation(&tree, tree.root()).unwrap().summary.as_deref(),
            Some("self")
        );
    }

    #[test]
    fn test_resolve_method() {
        let mut tree = RouteTree::new();
        let users = tree.route(tree.root(), "users");
        let get = tree.method(users, "get");
        let brew = tree.method(users, "BREW");
        let empty = tree.method(users, "");

        assert_eq!(resolve_method(&tree, get).unwrap(), HttpMethod::Get);
        assert_eq!(
            resolve_method(&tree, brew).unwrap_err(),
            Error::InvalidMethod { path: "/users".to_string(), method: "BREW".to_string() }
        );
        assert_eq!(
            resolve_method(&tree, empty).unwrap_err(),
            Error::InvalidMethod { path: "/users".to_string(), method: String::new() }
        );
    }

    #[test]
    fn test_depth_guard() {
        let mut tree = RouteTree::new();
        let mut current = tree.root();
        for i in 0..MAX_DEPTH + 8 {
            current = tree.add_child(current, Selector::Constant(format!("s{}", i)));
        }
        let get = tree.method(current, "GET");

        assert_eq!(
            reconstruct_path(&tree, get).unwrap_err(),
            Error::TreeTooDeep { limit: MAX_DEPTH }
        );
        assert_eq!(
            resolve_protected(&tree, get).unwrap_err(),
            Error::TreeTooDeep { limit: MAX_DEPTH }
        );
    }
}
