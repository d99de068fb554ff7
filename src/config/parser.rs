use crate::config::types::FileConfig;
use crate::config::validation::validate_file;
use crate::ConfigError;
use std::path::Path;

/// Loads and parses a configuration file from the given path
///
/// The seed may be left unset in the file and supplied on the command line
/// instead, so this only checks the fields the file actually pins down.
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Returns
///
/// * `Ok(FileConfig)` - Successfully loaded and validated configuration
/// * `Err(ConfigError)` - Failed to load, parse, or validate the configuration
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use linkharvest::config::load_config;
///
/// let config = load_config(Path::new("config.toml")).unwrap();
/// println!("Crawl budget: {}ms", config.crawl.duration_ms);
/// ```
pub fn load_config(path: &Path) -> Result<FileConfig, ConfigError> {
    // Read the configuration file
    let content = std::fs::read_to_string(path)?;

    // Parse TOML
    let config: FileConfig = toml::from_str(&content)?;

    // Validate the fields the file provides
    validate_file(&config)?;

    Ok(config)
}
