// This module setup the logger level.

use tracing_subscriber::EnvFilter;

const TARGETS: [&str; 5] = [
    "roster_app",
    "roster_routing",
    "roster_infrastructure",
    "roster_interface",
    "tower_http",
];

pub fn directives(logger_level: &str) -> String {
    TARGETS
        .iter()
        .map(|target| format!("{target}={logger_level}"))
        .collect::<Vec<String>>()
        .join(",")
}

pub fn setup(logger_level: &str) {
    // RUST_LOG wins over the configured level.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(directives(logger_level)));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
