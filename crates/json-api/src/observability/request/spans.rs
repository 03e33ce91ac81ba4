//! HTTP span naming.

/// Collections whose next path segment is a resource identifier.
const ID_COLLECTIONS: [&str; 2] = ["products", "subscription-plans"];

const ID_PLACEHOLDER: &str = "{id}";

#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct RequestSpanName {
    /// Route template with identifiers replaced, used as the metrics label.
    pub(super) route: String,
    pub(super) otel_span_name: String,
}

pub(super) fn request_span_name(method: &str, path: &str) -> RequestSpanName {
    let route = route_template(path);
    let otel_span_name = format!("{method} {route}");

    RequestSpanName {
        route,
        otel_span_name,
    }
}

/// Collapse identifier segments so every request to a route shares one label.
///
/// The segment after a known collection is replaced whether or not it parses,
/// keeping label cardinality bounded for malformed ids too.
fn route_template(path: &str) -> String {
    let mut route = String::new();
    let mut after_collection = false;

    for segment in path.split('/').filter(|segment| !segment.is_empty()) {
        route.push('/');

        if after_collection {
            route.push_str(ID_PLACEHOLDER);
            after_collection = false;
        } else {
            route.push_str(segment);
            after_collection = ID_COLLECTIONS.contains(&segment);
        }
    }

    if route.is_empty() {
        route.push('/');
    }

    route
}
