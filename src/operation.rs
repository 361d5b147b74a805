//! Per-route OpenAPI operation generation.

use crate::collector::RouteRecord;
use crate::config::AutomaticTagGenerator;
use crate::documentation::{BodyDocumentation, ResponseDocumentation};
use crate::openapi_builder::{MediaType, Operation, Parameter, RequestBody, Response};
use crate::paths::PathItem;
use indexmap::IndexMap;

/// Turns one route record into the path item holding its operation.
pub trait OperationGenerator {
    /// Generate the path and a path item whose slot for the record's method is populated.
    fn generate(
        &self,
        route: &RouteRecord,
        default_unauthorized_response: Option<&ResponseDocumentation>,
        default_security_scheme_name: Option<&str>,
        tag_generator: Option<&AutomaticTagGenerator>,
    ) -> (String, PathItem);
}

/// Builds operations straight from the route's documentation.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultOperationGenerator;

impl OperationGenerator for DefaultOperationGenerator {
    fn generate(
        &self,
        route: &RouteRecord,
        default_unauthorized_response: Option<&ResponseDocumentation>,
        default_security_scheme_name: Option<&str>,
        tag_generator: Option<&AutomaticTagGenerator>,
    ) -> (String, PathItem) {
        let documentation = &route.documentation;

        let mut tags = documentation.tags.clone();
        if let Some(generator) = tag_generator {
            let segments: Vec<&str> = route.path.split('/').filter(|s| !s.is_empty()).collect();
            if let Some(tag) = (**generator)(segments.as_slice()) {
                if !tags.contains(&tag) {
                    tags.push(tag);
                }
            }
        }

        let parameters = if documentation.parameters.is_empty() {
            None
        } else {
            Some(
                documentation
                    .parameters
                    .iter()
                    .map(|p| Parameter {
                        name: p.name.clone(),
                        location: p.location.as_str().to_string(),
                        required: p.required,
                        schema: p.schema.clone(),
                        description: p.description.clone(),
                    })
                    .collect(),
            )
        };

        let request_body = documentation.request_body.as_ref().map(|body| RequestBody {
            description: body.description.clone(),
            required: body.required,
            content: content(body),
        });

        let mut responses: IndexMap<String, Response> = documentation
            .responses
            .iter()
            .map(|(status, response)| (status.clone(), convert_response(response)))
            .collect();
        if responses.is_empty() {
            // Default response when nothing is documented
            responses.insert(
                "200".to_string(),
                convert_response(&ResponseDocumentation::new("Successful response")),
            );
        }
        if route.protected && !responses.contains_key("401") {
            if let Some(unauthorized) = default_unauthorized_response {
                responses.insert("401".to_string(), convert_response(unauthorized));
            }
        }

        let security: Option<Vec<IndexMap<String, Vec<String>>>> = if route.protected {
            let schemes: Vec<String> = if documentation.security_scheme_names.is_empty() {
                default_security_scheme_name.map(str::to_string).into_iter().collect()
            } else {
                documentation.security_scheme_names.clone()
            };
            if schemes.is_empty() {
                None
            } else {
                Some(
                    schemes
                        .into_iter()
                        .map(|scheme| IndexMap::from([(scheme, Vec::new())]))
                        .collect(),
                )
            }
        } else {
            None
        };

        let operation = Operation {
            tags,
            summary: documentation.summary.clone(),
            description: documentation.description.clone(),
            operation_id: documentation.operation_id.clone(),
            parameters,
            request_body,
            responses,
            deprecated: documentation.deprecated,
            security,
        };

        (route.path.clone(), PathItem::with_operation(route.method, operation))
    }
}

fn content(body: &BodyDocumentation) -> IndexMap<String, MediaType> {
    IndexMap::from([(
        body.media_type.clone(),
        MediaType {
            schema: body.schema.clone(),
        },
    )])
}

fn convert_response(response: &ResponseDocumentation) -> Response {
    Response {
        description: response.description.clone(),
        content: response.body.as_ref().map(content),
    }
}
