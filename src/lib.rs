//! OpenAPI From Routes - OpenAPI paths generation from a server's route registration tree.
//!
//! Web servers keep their routes in a tree: literal and parameter segments,
//! HTTP method terminators, and wrapper nodes for authentication and
//! documentation. This library walks such a tree, rebuilds the path template
//! of every method route, resolves its documentation and whether it is
//! protected, leaves out the documentation UI's own routes, and merges all
//! operations sharing a path into one OpenAPI path item.
//!
//! # Architecture
//!
//! 1. [`tree`] - The route tree, its selectors, and its serialized form
//! 2. [`selector`] - Classifies selectors into structural kinds
//! 3. [`resolver`] - Rebuilds paths and resolves metadata by climbing parents
//! 4. [`collector`] - Collects method routes and filters reserved paths
//! 5. [`operation`] - Turns each route into an OpenAPI operation
//! 6. [`paths`] - The paths document and its merge rule
//! 7. [`generator`] - Drives the steps above for one tree
//! 8. [`openapi_builder`] - Wraps the paths in a complete OpenAPI document
//! 9. [`serializer`] - Serializes the document to YAML or JSON
//!
//! # Example Usage
//!
//! ```
//! use openapi_from_routes::{
//!     config::GeneratorConfig,
//!     documentation::RouteDocumentation,
//!     generator::PathsGenerator,
//!     openapi_builder::OpenApiBuilder,
//!     serializer::serialize_yaml,
//!     tree::RouteTree,
//! };
//!
//! let mut tree = RouteTree::new();
//! let users = tree.route(tree.root(), "/users");
//! let documented = tree.documented(users, RouteDocumentation {
//!     summary: Some("List users".to_string()),
//!     ..Default::default()
//! });
//! tree.method(documented, "GET");
//!
//! let config = GeneratorConfig::new().with_swagger_url("docs");
//! let paths = PathsGenerator::new(config).generate(&tree).unwrap();
//! let document = OpenApiBuilder::new().paths(paths).build();
//!
//! let yaml = serialize_yaml(&document).unwrap();
//! assert!(yaml.contains("List users"));
//! ```
//!
//! # Command-Line Interface
//!
//! For command-line usage, see the [`cli`] module.

pub mod cli;
pub mod collector;
pub mod config;
pub mod documentation;
pub mod error;
pub mod generator;
pub mod loader;
pub mod openapi_builder;
pub mod operation;
pub mod paths;
pub mod resolver;
pub mod selector;
pub mod serializer;
pub mod tree;
