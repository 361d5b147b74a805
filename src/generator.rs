//! Generation of the OpenAPI paths document from a route tree.

use crate::collector::{collect_routes, filter_reserved};
use crate::config::GeneratorConfig;
use crate::error::Result;
use crate::operation::{DefaultOperationGenerator, OperationGenerator};
use crate::paths::Paths;
use crate::tree::RouteTree;
use log::{debug, info};

/// Walks a route tree and assembles its OpenAPI paths.
///
/// # Example
///
/// ```
/// use openapi_from_routes::config::GeneratorConfig;
/// use openapi_from_routes::generator::PathsGenerator;
/// use openapi_from_routes::tree::RouteTree;
///
/// let mut tree = RouteTree::new();
/// let users = tree.route(tree.root(), "/users");
/// tree.method(users, "GET");
/// tree.method(users, "POST");
///
/// let paths = PathsGenerator::new(GeneratorConfig::default()).generate(&tree).unwrap();
/// assert_eq!(paths.len(), 1);
/// assert!(paths["/users"].get.is_some());
/// assert!(paths["/users"].post.is_some());
/// ```
pub struct PathsGenerator<G = DefaultOperationGenerator> {
    config: GeneratorConfig,
    operations: G,
}

impl PathsGenerator {
    /// Create a generator using [`DefaultOperationGenerator`]
    pub fn new(config: GeneratorConfig) -> Self {
        Self::with_operation_generator(config, DefaultOperationGenerator)
    }
}

impl<G: OperationGenerator> PathsGenerator<G> {
    /// Create a generator with a custom per-route operation generator
    pub fn with_operation_generator(config: GeneratorConfig, operations: G) -> Self {
        Self { config, operations }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate the paths document for `tree`.
    ///
    /// Every call builds a fresh document; the tree is only read.
    ///
    /// # Errors
    ///
    /// Fails if a method route carries no usable HTTP method or the tree is
    /// deeper than [`crate::resolver::MAX_DEPTH`].
    pub fn generate(&self, tree: &RouteTree) -> Result<Paths> {
        let records = collect_routes(tree)?;
        let collected = records.len();
        let records = filter_reserved(records, &self.config.swagger_url, self.config.forward_root);
        info!(
            "Collected {} routes ({} reserved routes skipped)",
            records.len(),
            collected - records.len()
        );

        let mut paths = Paths::new();
        for record in &records {
            debug!("Configure path: {} {}", record.method, record.path);
            let (path, item) = self.operations.generate(
                record,
                self.config.default_unauthorized_response.as_ref(),
                self.config.default_security_scheme_name.as_deref(),
                self.config.automatic_tag_generator.as_ref(),
            );
            paths.merge(path, item);
        }

        Ok(paths)
    }
}
