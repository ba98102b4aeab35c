use serde_json::Value;
use utoipa::openapi::OpenApi;

use crate::router::PagedRoute;

/// Why strategy parameters could not be merged into an [`OpenApi`] document.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    /// A paged route has no GET operation in the document, usually because
    /// the handler's `#[utoipa::path]` entry is missing from the document.
    #[error("no documented GET operation at `{path}`")]
    UndocumentedRoute { path: String },
    #[error("the GET operation at `{path}` is not an operation object")]
    MalformedOperation { path: String },
    #[error(transparent)]
    Document(#[from] serde_json::Error),
}

/// Appends each route's strategy parameters to its documented GET operation.
///
/// Parameters the handler documents itself stay first, in declaration order.
pub(crate) fn attach_parameters(
    api: OpenApi,
    routes: &[PagedRoute],
) -> Result<OpenApi, DocumentError> {
    if routes.is_empty() {
        return Ok(api);
    }

    let mut doc = serde_json::to_value(&api)?;
    for route in routes {
        let operation = doc
            .get_mut("paths")
            .and_then(|paths| paths.get_mut(route.path.as_str()))
            .and_then(|item| item.get_mut("get"))
            .and_then(Value::as_object_mut)
            .ok_or_else(|| DocumentError::UndocumentedRoute {
                path: route.path.clone(),
            })?;

        let parameters = operation
            .entry("parameters")
            .or_insert_with(|| Value::Array(Vec::new()));
        let Value::Array(parameters) = parameters else {
            return Err(DocumentError::MalformedOperation {
                path: route.path.clone(),
            });
        };
        for parameter in &route.parameters {
            parameters.push(serde_json::to_value(parameter)?);
        }
    }

    Ok(serde_json::from_value(doc)?)
}
