use tracing_subscriber::EnvFilter;

const QUIET_DIRECTIVES: &str = "warn";
const VERBOSE_DIRECTIVES: &str = concat!(
    "warn,",
    "wpi2svg_ext=debug,",
    "wpi_import_core=debug,",
    "wpi_import_runexec=debug"
);

/// Installs the stderr subscriber. Stdout is reserved for the helper's SVG.
///
/// `RUST_LOG` takes precedence over the host's verbose switch.
pub fn init(verbose: bool) {
    let directives = if verbose {
        VERBOSE_DIRECTIVES
    } else {
        QUIET_DIRECTIVES
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directives));

    // Keep whatever subscriber is already installed.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .without_time()
        .try_init();
}
