use tracing_subscriber::EnvFilter;

/// `RUST_LOG` wins; otherwise `-v` flags pick the level.
pub fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    if let Err(error) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
    {
        eprintln!("logging already initialized: {error}");
    }
}
