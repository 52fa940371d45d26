//! HTTP span and metric route naming.

#[derive(Debug, Clone)]
pub(super) struct RequestSpanName {
    pub(super) route: String,
    pub(super) otel_span_name: String,
}

pub(super) fn request_span_name(method: &str, path: &str) -> RequestSpanName {
    let route = normalise_route(path);
    let otel_span_name = format!("{method} {route}");

    RequestSpanName {
        route,
        otel_span_name,
    }
}

const ID_SEGMENT: &str = "{id}";

/// Label for any path outside the served routes.
const UNMATCHED_ROUTE: &str = "unmatched";

/// Served routes. Anything else shares [`UNMATCHED_ROUTE`] so arbitrary paths
/// cannot grow metric label sets.
const ROUTE_TEMPLATES: &[&str] = &[
    "/healthcheck",
    "/api/Productos",
    "/api/Productos/{id}",
    "/api/Providers",
    "/api/Providers/{id}",
];

fn segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|segment| !segment.is_empty()).collect()
}

fn matches_template(template: &str, path: &[&str]) -> bool {
    let template = segments(template);

    template.len() == path.len()
        && template
            .iter()
            .zip(path)
            .all(|(expected, actual)| *expected == ID_SEGMENT || expected == actual)
}

fn normalise_route(path: &str) -> String {
    let path = segments(path);

    ROUTE_TEMPLATES
        .iter()
        .find(|template| matches_template(template, &path))
        .map_or(UNMATCHED_ROUTE, |template| *template)
        .to_owned()
}
