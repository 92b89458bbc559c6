use crate::config::toml_config::RoastConfig;
use crate::utils::error::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "regret-roast")]
#[command(about = "HTTP service that roasts your historical purchases")]
pub struct ServeArgs {
    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the bind address from config
    #[arg(long)]
    pub bind: Option<String>,

    /// Force the generation provider on (still requires an API key)
    #[arg(long)]
    pub enable_provider: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

impl ServeArgs {
    /// 載入配置並套用命令列覆蓋設定
    pub fn resolve_config(&self) -> Result<RoastConfig> {
        let mut config = RoastConfig::load(self.config.as_deref())?;

        if let Some(bind) = &self.bind {
            config.server.bind = bind.clone();
        }
        if self.enable_provider {
            config.provider.enabled = true;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_cli_overrides_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[server]\nbind = \"127.0.0.1:4000\"\n")
            .unwrap();

        let args = ServeArgs::parse_from([
            "regret-roast",
            "--config",
            temp_file.path().to_str().unwrap(),
            "--bind",
            "127.0.0.1:5000",
            "--enable-provider",
        ]);

        let config = args.resolve_config().unwrap();
        assert_eq!(config.server.bind, "127.0.0.1:5000");
        assert!(config.provider.enabled);
    }

    #[test]
    fn test_defaults_without_flags() {
        let args = ServeArgs::parse_from(["regret-roast"]);
        assert!(args.config.is_none());
        assert!(!args.verbose);
        assert!(!args.json_logs);
    }
}
