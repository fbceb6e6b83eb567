use std::env;

use wpi_import_cmdline::HostArgs;
use wpi_import_core::DEFAULT_HELPER;

/// Environment variable that points the adapter at a specific helper binary.
pub const HELPER_ENV: &str = "INKLINGREADER";

/// Runtime settings for one adapter run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdapterConfig {
    pub helper: String,
    pub verbose: bool,
}

impl AdapterConfig {
    pub fn from_env(host: &HostArgs) -> Self {
        Self::resolve(host, env::var(HELPER_ENV).ok())
    }

    fn resolve(host: &HostArgs, helper_override: Option<String>) -> Self {
        let helper = helper_override
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_HELPER.to_string());
        Self {
            helper,
            verbose: host.verbose,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn host(args: &[&str]) -> HostArgs {
        wpi_import_cmdline::parse(args.iter().copied()).expect("host args")
    }

    #[test]
    fn defaults_to_inklingreader() {
        let config = AdapterConfig::resolve(&host(&["wpi2svg-ext", "in.wpi"]), None);
        assert_eq!(config.helper, "inklingreader");
        assert!(!config.verbose);
    }

    #[test]
    fn override_wins_unless_blank() {
        let args = host(&["wpi2svg-ext", "--verbose=true", "in.wpi"]);
        let config = AdapterConfig::resolve(&args, Some("/opt/inkling/bin/inklingreader".into()));
        assert_eq!(config.helper, "/opt/inkling/bin/inklingreader");
        assert!(config.verbose);

        let config = AdapterConfig::resolve(&args, Some("  ".into()));
        assert_eq!(config.helper, DEFAULT_HELPER);
    }
}
