use env_logger::{Builder, Env};

// Our own messages at info; HTTP and line-editor internals only when they matter
const DEFAULT_FILTER: &str = "info,reqwest=warn,hyper_util=warn,rustyline=warn";

/// Initializes `env_logger`. `RUST_LOG` overrides the default filter.
pub fn init_logging() {
    Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER))
        .format_timestamp_secs()
        .format_module_path(false)
        .format_target(false)
        .init();
}
