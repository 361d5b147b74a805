//! Route registration tree.
//!
//! A [`RouteTree`] mirrors the routing tree a web server builds while routes
//! are registered: every node carries a [`Selector`] describing the role it
//! plays (a literal segment, a parameter capture, an HTTP method terminator,
//! an authentication wrapper, ...). Nodes live in an arena and are addressed
//! by [`NodeId`]; a node can only be created under an existing parent, so the
//! tree is always finite and acyclic.
//!
//! Trees are either built in code:
//!
//! ```
//! use openapi_from_routes::tree::RouteTree;
//!
//! let mut tree = RouteTree::new();
//! let users = tree.route(tree.root(), "/users/{id}");
//! tree.method(users, "GET");
//! assert_eq!(tree.len(), 4);
//! ```
//!
//! or deserialized from a [`NodeDefinition`] (see [`crate::loader`]).

use crate::documentation::RouteDocumentation;
use log::debug;
use serde::Deserialize;
use std::fmt;

/// Handle to a node inside a [`RouteTree`].
///
/// Ids are only meaningful for the tree that created them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

/// The tagged type of a route node.
#[derive(Debug, Clone, PartialEq)]
pub enum Selector {
    /// Root of the routing tree
    Root,
    /// Explicit trailing slash after the parent path
    TrailingSlash,
    /// Literal path segment
    Constant(String),
    /// Required parameter segment, `{name}`
    Parameter(String),
    /// Optional parameter segment, `{name?}`
    OptionalParameter(String),
    /// Single-segment wildcard, `*`
    Wildcard,
    /// Catch-all remainder of the path, `{name...}`
    Tailcard(String),
    /// HTTP method terminator carrying the method token as registered
    Method(String),
    /// Authentication wrapper with its provider names
    Authenticate(Vec<String>),
    /// Documentation wrapper
    Documented(RouteDocumentation),
    /// A node type this crate does not know about
    Extension { kind: String, value: Option<String> },
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::Root => Ok(()),
            Selector::TrailingSlash => write!(f, "<slash>"),
            Selector::Constant(value) => write!(f, "{}", value),
            Selector::Parameter(name) => write!(f, "{{{}}}", name),
            Selector::OptionalParameter(name) => write!(f, "{{{}?}}", name),
            Selector::Wildcard => write!(f, "*"),
            Selector::Tailcard(name) => write!(f, "{{{}...}}", name),
            Selector::Method(method) => write!(f, "(method:{})", method),
            Selector::Authenticate(providers) if providers.is_empty() => write!(f, "(authenticate)"),
            Selector::Authenticate(providers) => write!(f, "(authenticate {})", providers.join(", ")),
            Selector::Documented(_) => write!(f, "(documented)"),
            Selector::Extension { kind, value: Some(value) } => write!(f, "({}:{})", kind, value),
            Selector::Extension { kind, value: None } => write!(f, "({})", kind),
        }
    }
}

impl Selector {
    /// Parse a single path segment the way routes are registered
    /// (`users`, `{id}`, `{id?}`, `{rest...}`, `*`).
    pub fn from_segment(segment: &str) -> Self {
        if segment == "*" {
            return Selector::Wildcard;
        }
        match segment.strip_prefix('{').and_then(|s| s.strip_suffix('}')) {
            Some(inner) => {
                if let Some(name) = inner.strip_suffix("...") {
                    Selector::Tailcard(name.to_string())
                } else if let Some(name) = inner.strip_suffix('?') {
                    Selector::OptionalParameter(name.to_string())
                } else {
                    Selector::Parameter(inner.to_string())
                }
            }
            None => Selector::Constant(segment.to_string()),
        }
    }
}

/// A single node of a [`RouteTree`].
#[derive(Debug, Clone)]
pub struct RouteNode {
    selector: Selector,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl RouteNode {
    pub fn selector(&self) -> &Selector {
        &self.selector
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Children in registration order
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}

/// Arena-backed routing tree.
#[derive(Debug, Clone)]
pub struct RouteTree {
    nodes: Vec<RouteNode>,
}

impl RouteTree {
    /// Create a tree containing only a [`Selector::Root`] node
    pub fn new() -> Self {
        Self::with_root(Selector::Root)
    }

    /// Create a tree whose root carries the given selector
    pub fn with_root(selector: Selector) -> Self {
        Self {
            nodes: vec![RouteNode {
                selector,
                parent: None,
                children: Vec::new(),
            }],
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Number of nodes in the tree, root included.
    ///
    /// A tree always holds its root, so this is never zero.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Look up a node.
    ///
    /// # Panics
    ///
    /// Panics if `id` was created by a different tree and is out of range.
    pub fn node(&self, id: NodeId) -> &RouteNode {
        &self.nodes[id.0]
    }

    pub fn selector(&self, id: NodeId) -> &Selector {
        &self.node(id).selector
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    /// Add a child node under `parent` and return its id
    pub fn add_child(&mut self, parent: NodeId, selector: Selector) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(RouteNode {
            selector,
            parent: Some(parent),
            children: Vec::new(),
        });
        self.nodes[parent.0].children.push(id);
        id
    }

    /// Add one node per segment of `path` under `parent`, returning the deepest.
    ///
    /// A path ending in `/` gets a [`Selector::TrailingSlash`] node appended,
    /// so `"/"` alone adds a single trailing-slash node. An empty path returns
    /// `parent` unchanged.
    pub fn route(&mut self, parent: NodeId, path: &str) -> NodeId {
        let mut current = parent;
        for segment in path.split('/').filter(|s| !s.is_empty()) {
            current = self.add_child(current, Selector::from_segment(segment));
        }
        if path.ends_with('/') {
            current = self.add_child(current, Selector::TrailingSlash);
        }
        current
    }

    /// Add an HTTP method terminator under `parent`
    pub fn method(&mut self, parent: NodeId, method: &str) -> NodeId {
        self.add_child(parent, Selector::Method(method.to_string()))
    }

    /// Add an authentication wrapper under `parent`
    pub fn authenticate(&mut self, parent: NodeId, providers: &[&str]) -> NodeId {
        let providers = providers.iter().map(|p| p.to_string()).collect();
        self.add_child(parent, Selector::Authenticate(providers))
    }

    /// Add a documentation wrapper under `parent`
    pub fn documented(&mut self, parent: NodeId, documentation: RouteDocumentation) -> NodeId {
        self.add_child(parent, Selector::Documented(documentation))
    }

    /// Build a tree from a nested definition; the top definition becomes the root.
    pub fn from_definition(definition: NodeDefinition) -> Self {
        let mut tree = Self::with_root(definition.selector());
        for child in &definition.children {
            tree.insert_definition(NodeId(0), child);
        }
        debug!("Built route tree with {} nodes", tree.len());
        tree
    }

    fn insert_definition(&mut self, parent: NodeId, definition: &NodeDefinition) {
        let id = self.add_child(parent, definition.selector());
        for child in &definition.children {
            self.insert_definition(id, child);
        }
    }
}

impl Default for RouteTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Serialized form of a route node and its subtree.
///
/// ```yaml
/// type: root
/// children:
///   - type: constant
///     value: users
///     children:
///       - type: method
///         method: GET
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeDefinition {
    /// Node type: `root`, `trailing-slash`, `constant`, `parameter`,
    /// `optional-parameter`, `wildcard`, `tailcard`, `method`,
    /// `authenticate`, `documented`, or anything else for extension nodes
    #[serde(rename = "type")]
    pub kind: String,
    /// Literal value for constants and extension nodes
    #[serde(default)]
    pub value: Option<String>,
    /// Parameter name for parameter and tailcard nodes
    #[serde(default)]
    pub name: Option<String>,
    /// Method token for method nodes
    #[serde(default)]
    pub method: Option<String>,
    /// Provider names for authentication nodes
    #[serde(default)]
    pub providers: Vec<String>,
    /// Documentation for documented nodes
    #[serde(default)]
    pub documentation: Option<RouteDocumentation>,
    #[serde(default)]
    pub children: Vec<NodeDefinition>,
}

impl NodeDefinition {
    /// Map the definition's type tag onto a [`Selector`]
    pub fn selector(&self) -> Selector {
        let name = || self.name.clone().unwrap_or_default();
        match self.kind.as_str() {
            "root" => Selector::Root,
            "trailing-slash" => Selector::TrailingSlash,
            "constant" => Selector::Constant(self.value.clone().unwrap_or_default()),
            "parameter" => Selector::Parameter(name()),
            "optional-parameter" => Selector::OptionalParameter(name()),
            "wildcard" => Selector::Wildcard,
            "tailcard" => Selector::Tailcard(name()),
            "method" => Selector::Method(self.method.clone().unwrap_or_default()),
            "authenticate" => Selector::Authenticate(self.providers.clone()),
            "documented" => Selector::Documented(self.documentation.clone().unwrap_or_default()),
            other => Selector::Extension {
                kind: other.to_string(),
                value: self.value.clone(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_tree_has_root() {
        let tree = RouteTree::new();
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.selector(tree.root()), &Selector::Root);
        assert_eq!(tree.parent(tree.root()), None);
    }

    #[test]
    fn test_add_child_links_parent_and_children() {
        let mut tree = RouteTree::new();
        let root = tree.root();
        let a = tree.add_child(root, Selector::Constant("a".to_string()));
        let b = tree.add_child(root, Selector::Constant("b".to_string()));

        assert_eq!(tree.node(root).children(), &[a, b]);
        assert_eq!(tree.parent(a), Some(root));
        assert_eq!(tree.parent(b), Some(root));
    }

    #[test]
    fn test_route_parses_segments() {
        let mut tree = RouteTree::new();
        let leaf = tree.route(tree.root(), "/files/{id}/{version?}/*/{rest...}");

        let mut selectors = Vec::new();
        let mut current = Some(leaf);
        while let Some(id) = current {
            selectors.push(tree.selector(id).clone());
            current = tree.parent(id);
        }
        selectors.reverse();

        assert_eq!(
            selectors,
            vec![
                Selector::Root,
                Selector::Constant("files".to_string()),
                Selector::Parameter("id".to_string()),
                Selector::OptionalParameter("version".to_string()),
                Selector::Wildcard,
                Selector::Tailcard("rest".to_string()),
            ]
        );
    }

    #[test]
    fn test_route_trailing_slash() {
        let mut tree = RouteTree::new();
        let leaf = tree.route(tree.root(), "users/");
        assert_eq!(tree.selector(leaf), &Selector::TrailingSlash);

        let slash = tree.route(tree.root(), "/");
        assert_eq!(tree.selector(slash), &Selector::TrailingSlash);
        assert_eq!(tree.parent(slash), Some(tree.root()));
    }

    #[test]
    fn test_route_empty_path_returns_parent() {
        let mut tree = RouteTree::new();
        let root = tree.root();
        assert_eq!(tree.route(root, ""), root);
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn test_selector_display() {
        assert_eq!(Selector::Root.to_string(), "");
        assert_eq!(Selector::Constant("users".to_string()).to_string(), "users");
        assert_eq!(Selector::Parameter("id".to_string()).to_string(), "{id}");
        assert_eq!(Selector::OptionalParameter("id".to_string()).to_string(), "{id?}");
        assert_eq!(Selector::Wildcard.to_string(), "*");
        assert_eq!(Selector::Tailcard("path".to_string()).to_string(), "{path...}");
        assert_eq!(Selector::Tailcard(String::new()).to_string(), "{...}");
        assert_eq!(Selector::Method("GET".to_string()).to_string(), "(method:GET)");
        assert_eq!(
            Selector::Authenticate(vec!["jwt".to_string(), "basic".to_string()]).to_string(),
            "(authenticate jwt, basic)"
        );
        assert_eq!(
            Selector::Extension { kind: "header".to_string(), value: Some("X-Api".to_string()) }
                .to_string(),
            "(header:X-Api)"
        );
        assert_eq!(
            Selector::Extension { kind: "accept".to_string(), value: None }.to_string(),
            "(accept)"
        );
    }

    #[test]
    fn test_from_definition() {
        let yaml = r#"
type: root
children:
  - type: constant
    value: users
    children:
      - type: method
        method: GET
      - type: authenticate
        providers: [jwt]
        children:
          - type: method
            method: POST
  - type: header
    value: X-Version
"#;
        let definition: NodeDefinition = serde_yaml::from_str(yaml).unwrap();
        let tree = RouteTree::from_definition(definition);

        assert_eq!(tree.len(), 6);
        assert_eq!(tree.selector(tree.root()), &Selector::Root);

        let root_children = tree.node(tree.root()).children();
        assert_eq!(root_children.len(), 2);
        assert_eq!(tree.selector(root_children[0]), &Selector::Constant("users".to_string()));
        assert_eq!(
            tree.selector(root_children[1]),
            &Selector::Extension { kind: "header".to_string(), value: Some("X-Version".to_string()) }
        );

        let users_children = tree.node(root_children[0]).children();
        assert_eq!(tree.selector(users_children[0]), &Selector::Method("GET".to_string()));
        assert_eq!(
            tree.selector(users_children[1]),
            &Selector::Authenticate(vec!["jwt".to_string()])
        );
    }

    #[test]
    fn test_definition_method_without_token() {
        let definition: NodeDefinition = serde_json::from_str(r#"{"type": "method"}"#).unwrap();
        assert_eq!(definition.selector(), Selector::Method(String::new()));
    }
}
