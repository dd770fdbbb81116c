use crate::config::Config;
use crate::errors::AppResult;

/// `--print-config`: dump the effective configuration as YAML.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let yaml = cfg.to_yaml()?;
    println!("📄 Default configuration file: {}", Config::config_file().display());
    println!("{yaml}");
    Ok(())
}
