use crate::tree::{NodeDefinition, RouteTree};
use anyhow::{Context, Result};
use log::debug;
use std::fs;
use std::path::Path;

/// Loads route trees exported by a web server.
///
/// Tree files are nested [`NodeDefinition`]s in JSON (`.json`) or YAML
/// (`.yaml`, `.yml`, or any other extension).
///
/// Nesting is bounded by the parsers' recursion limit of 128, which a node
/// and its `children` list consume two at a time. Files therefore nest at
/// most about 60 nodes deep, well inside [`crate::resolver::MAX_DEPTH`];
/// deeper files fail to parse with an error rather than being truncated.
/// Trees built in code with [`RouteTree::add_child`] are not bounded this way.
///
/// # Example
///
/// ```no_run
/// use openapi_from_routes::loader::load_tree;
/// use std::path::Path;
///
/// let tree = load_tree(Path::new("routes.yaml")).unwrap();
/// println!("Loaded {} route nodes", tree.len());
/// ```
pub fn load_tree(path: &Path) -> Result<RouteTree> {
    debug!("Loading route tree: {}", path.display());

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read route tree file: {}", path.display()))?;

    let tree = if is_json(path) {
        parse_json_tree(&content)
    } else {
        parse_yaml_tree(&content)
    }
    .with_context(|| format!("Failed to parse route tree file: {}", path.display()))?;

    debug!("Loaded route tree with {} nodes from {}", tree.len(), path.display());
    Ok(tree)
}

/// Parse a route tree from JSON text
pub fn parse_json_tree(content: &str) -> Result<RouteTree> {
    let definition: NodeDefinition =
        serde_json::from_str(content).context("Invalid JSON route tree")?;
    Ok(RouteTree::from_definition(definition))
}

/// Parse a route tree from YAML text
pub fn parse_yaml_tree(content: &str) -> Result<RouteTree> {
    let definition: NodeDefinition =
        serde_yaml::from_str(content).context("Invalid YAML route tree")?;
    Ok(RouteTree::from_definition(definition))
}

pub(crate) fn is_json(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}
