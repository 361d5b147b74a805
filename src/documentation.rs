//! Per-route documentation attached to documented route nodes.
//!
//! The tree walker never looks inside these types: it only finds the nearest
//! [`RouteDocumentation`] above a method route and hands it to the operation
//! generator, which turns it into an OpenAPI operation.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Documentation for a single route, as registered alongside the route itself.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RouteDocumentation {
    /// Tags grouping the operation
    pub tags: Vec<String>,
    /// Short summary of the operation
    pub summary: Option<String>,
    /// Longer description of the operation
    pub description: Option<String>,
    /// Explicit operation ID
    pub operation_id: Option<String>,
    /// Whether the operation is deprecated
    pub deprecated: bool,
    /// Security schemes protecting this route, overriding the default scheme
    pub security_scheme_names: Vec<String>,
    /// Path, query, header and cookie parameters
    pub parameters: Vec<ParameterDocumentation>,
    /// Request body, if the route accepts one
    pub request_body: Option<BodyDocumentation>,
    /// Responses keyed by status code (e.g. "200", "404", "default")
    pub responses: IndexMap<String, ResponseDocumentation>,
}

/// A documented request parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterDocumentation {
    /// Parameter name
    pub name: String,
    /// Where the parameter is read from
    #[serde(rename = "in")]
    pub location: ParameterLocation,
    /// Whether the parameter must be present
    #[serde(default)]
    pub required: bool,
    /// Parameter description
    #[serde(default)]
    pub description: Option<String>,
    /// JSON schema of the parameter value
    #[serde(default)]
    pub schema: Option<serde_json::Value>,
}

/// The location where a parameter value is read from in an HTTP request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterLocation {
    /// Path parameter embedded in the URL (e.g., `/users/{id}`)
    Path,
    /// Query string parameter (e.g., `?page=1`)
    Query,
    /// HTTP header parameter
    Header,
    /// Cookie parameter
    Cookie,
}

impl ParameterLocation {
    /// Get the location as the OpenAPI `in` value
    pub fn as_str(&self) -> &'static str {
        match self {
            ParameterLocation::Path => "path",
            ParameterLocation::Query => "query",
            ParameterLocation::Header => "header",
            ParameterLocation::Cookie => "cookie",
        }
    }
}

/// A documented request or response body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BodyDocumentation {
    /// Body description
    #[serde(default)]
    pub description: Option<String>,
    /// Whether the body is required (request bodies only)
    #[serde(default)]
    pub required: bool,
    /// Media type of the body
    #[serde(default = "default_media_type")]
    pub media_type: String,
    /// JSON schema of the body
    #[serde(default)]
    pub schema: Option<serde_json::Value>,
}

/// A documented response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseDocumentation {
    /// Response description
    pub description: String,
    /// Response body, if any
    #[serde(default)]
    pub body: Option<BodyDocumentation>,
}

fn default_media_type() -> String {
    "application/json".to_string()
}

impl ResponseDocumentation {
    /// Create a response with a description and no body
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            body: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_documentation_deserializes_to_default() {
        let doc: RouteDocumentation = serde_yaml::from_str("{}").unwrap();
        assert_eq!(doc, RouteDocumentation::default());
    }

    #[test]
    fn test_documentation_from_yaml() {
        let yaml = r#"
tags: [users]
summary: Get a user
operationId: getUser
securitySchemeNames: [jwt]
parameters:
  - name: id
    in: path
    required: true
    schema: { type: integer }
responses:
  "200":
    description: The user
    body:
      schema: { type: object }
  "404":
    description: Not found
"#;
        let doc: RouteDocumentation = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(doc.tags, vec!["users".to_string()]);
        assert_eq!(doc.operation_id.as_deref(), Some("getUser"));
        assert_eq!(doc.security_scheme_names, vec!["jwt".to_string()]);
        assert_eq!(doc.parameters[0].location, ParameterLocation::Path);
        assert!(doc.parameters[0].required);

        let keys: Vec<&str> = doc.responses.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["200", "404"]);
        let body = doc.responses["200"].body.as_ref().unwrap();
        assert_eq!(body.media_type, "application/json");
    }

    #[test]
    fn test_parameter_location_as_str() {
        assert_eq!(ParameterLocation::Path.as_str(), "path");
        assert_eq!(ParameterLocation::Query.as_str(), "query");
        assert_eq!(ParameterLocation::Header.as_str(), "header");
        assert_eq!(ParameterLocation::Cookie.as_str(), "cookie");
    }
}
