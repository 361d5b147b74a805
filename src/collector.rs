//! Collection of method routes from a route tree.
//!
//! [`collect_routes`] walks the whole tree in pre-order and turns every HTTP
//! method terminator into a [`RouteRecord`]; [`filter_reserved`] then drops
//! the routes that serve the documentation UI itself.

use crate::documentation::RouteDocumentation;
use crate::error::Result;
use crate::paths::HttpMethod;
use crate::resolver::{reconstruct_path, resolve_documentation, resolve_method, resolve_protected};
use crate::selector::{classify, SelectorKind};
use crate::tree::{NodeId, RouteTree};
use log::debug;

/// A documented endpoint discovered in the route tree.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteRecord {
    /// The method-terminator node this record was built from
    pub node: NodeId,
    pub method: HttpMethod,
    /// Reconstructed path template (e.g. "/users/{id}")
    pub path: String,
    /// Documentation of the nearest documented ancestor
    pub documentation: RouteDocumentation,
    /// Whether an authentication wrapper encloses the route
    pub protected: bool,
}

/// Method-terminator nodes of the tree, in pre-order.
///
/// The walk keeps its own stack, so arbitrarily deep trees are visited
/// without growing the call stack.
pub fn method_nodes(tree: &RouteTree) -> Vec<NodeId> {
    let mut found = Vec::new();
    let mut pending = vec![tree.root()];
    while let Some(node) = pending.pop() {
        if let SelectorKind::HttpMethod(_) = classify(tree.selector(node)) {
            found.push(node);
        }
        // reversed so the first child is visited next
        pending.extend(tree.node(node).children().iter().rev().copied());
    }
    found
}

/// Build a route record for every method route in the tree.
///
/// # Errors
///
/// Returns an error if a method route has no usable HTTP method or an
/// ancestor chain exceeds [`crate::resolver::MAX_DEPTH`].
pub fn collect_routes(tree: &RouteTree) -> Result<Vec<RouteRecord>> {
    method_nodes(tree)
        .into_iter()
        .map(|node| {
            Ok(RouteRecord {
                node,
                method: resolve_method(tree, node)?,
                path: reconstruct_path(tree, node)?,
                documentation: resolve_documentation(tree, node)?,
                protected: resolve_protected(tree, node)?,
            })
        })
        .collect()
}

/// Remove routes served by the documentation UI mounted at `swagger_url`.
///
/// Paths are compared without their leading slash. With `forward_root` the
/// route at exactly `"/"` is removed too, since the UI forwards it.
pub fn filter_reserved(records: Vec<RouteRecord>, swagger_url: &str, forward_root: bool) -> Vec<RouteRecord> {
    let reserved = [
        swagger_url.to_string(),
        format!("{}/{{filename}}", swagger_url),
        format!("{}/schemas/{{schemaname}}", swagger_url),
    ];
    let reserved: Vec<&str> = reserved.iter().map(|path| remove_leading_slash(path)).collect();

    records
        .into_iter()
        .filter(|record| {
            let path = remove_leading_slash(&record.path);
            let keep = !reserved.contains(&path) && !(forward_root && record.path == "/");
            if !keep {
                debug!("Skipping reserved path: {} {}", record.method, record.path);
            }
            keep
        })
        .collect()
}

fn remove_leading_slash(path: &str) -> &str {
    path.strip_prefix('/').unwrap_or(path)
}
