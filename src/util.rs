use heck::ToSnakeCase as _;

/// Converts a camel-case or studly-case identifier to the snake_case form
/// Elasticsearch uses for field type names, e.g. `geoPoint` -> `geo_point`.
/// Idempotent on input that is already snake_case.
pub fn to_snake_case(value: &str) -> String {
    value.to_snake_case()
}
