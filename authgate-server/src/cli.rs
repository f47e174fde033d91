/// Parsed command-line arguments.
pub struct CliArgs {
    /// Path to configuration file, if provided via `--config-path` or `-c`.
    pub config_path: Option<String>,
    /// Whether help was requested.
    pub help_requested: bool,
}

impl CliArgs {
    /// Parse command-line arguments.
    ///
    /// Supported flags:
    /// - `--config-path <path>` or `--config-path=<path>` or `-c <path>`: Path to config file
    /// - `--help` or `-h`: Print help and exit
    pub fn parse() -> Self {
        Self::from_args(std::env::args().skip(1))
    }

    fn from_args(args: impl Iterator<Item = String>) -> Self {
        let mut config_path = None;
        let mut help_requested = false;

        let mut args = args;
        while let Some(a) = args.next() {
            if a == "--help" || a == "-h" {
                help_requested = true;
            } else if a == "--config-path" || a == "-c" {
                config_path = args.next();
            } else if let Some(rest) = a.strip_prefix("--config-path=") {
                config_path = Some(rest.to_string());
            } else if let Some(rest) = a.strip_prefix("-c=") {
                config_path = Some(rest.to_string());
            }
        }

        Self {
            config_path,
            help_requested,
        }
    }

    /// Print usage information to stderr.
    pub fn print_help() {
        eprintln!(
            "Usage: authgate-server [--config-path PATH] [--help]\n\n\
             --config-path, -c    Path to configuration file (overrides AUTHGATE_CONFIG_PATH env var)"
        );
    }
}
