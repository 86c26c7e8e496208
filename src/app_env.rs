/// URL for accessing the PostgreSQL database (should contain a database name in the path)
pub const DB_URL: &str = "DATABASE_URL";
/// Maximum number of pooled connections held open to the database
pub const DB_MAX_CONNECTIONS: &str = "DB_MAX_CONNECTIONS";
/// Whether embedded schema migrations should be applied before the server starts accepting requests.
/// Accepts "true"/"false" (also "1"/"0", "yes"/"no")
pub const DB_MIGRATE_ON_START: &str = "DB_MIGRATE_ON_START";
/// Socket address the HTTP server binds to, such as 0.0.0.0:8080
pub const LISTEN_ADDR: &str = "LISTEN_ADDR";
/// Deployment environment name. "development" turns on the swagger UI
pub const APP_ENVIRONMENT: &str = "APP_ENVIRONMENT";
/// Log level configuration for the application. For formatting info, see [tracing_subscriber's EnvFilter documentation](https://docs.rs/tracing-subscriber/latest/tracing_subscriber/filter/struct.EnvFilter.html)
pub const LOG_LEVEL: &str = "LOG_LEVEL";

/// OpenTelemetry span export URL. Should be http://localhost:4317 by default, as the service should
/// have an OpenTelemetry collector sidecar which directs metrics to the correct place
pub const OTEL_SPAN_EXPORT_URL: &str = "OTEL_SPAN_EXPORT_URL";
/// OpenTelemetry metrics export URL. Should be http://localhost:4317 by default, as the service should
/// have an OpenTelemetry collector sidecar which directs metrics to the correct place
pub const OTEL_METRIC_EXPORT_URL: &str = "OTEL_METRIC_EXPORT_URL";

pub mod test {
    /// URL for accessing the PostgreSQL database during integration tests (should not contain a database name in the path)
    pub const TEST_DB_URL: &str = "TEST_DB_URL";
}
