use crate::config::types::{CrawlConfig, FileConfig};
use crate::ConfigError;
use url::Url;

/// Validates a fully assembled crawl configuration
///
/// This is the gate every crawl passes through before it starts: the seed
/// must be a fetchable http(s) URL and the numeric limits must be sane.
pub fn validate(config: &CrawlConfig) -> Result<(), ConfigError> {
    validate_seed(&config.seed)?;
    validate_limits(config)?;
    if let Some(scope) = config.scope.as_deref() {
        validate_scope(scope)?;
    }
    Ok(())
}

/// Validates the fields a config file can pin down on its own
///
/// The seed may still arrive from the command line, so an absent seed is not
/// an error here; a present one must parse.
pub fn validate_file(config: &FileConfig) -> Result<(), ConfigError> {
    if !config.crawl.seed.is_empty() {
        validate_seed(&config.crawl.seed)?;
    }
    validate_limits(&config.crawl)?;
    if let Some(scope) = config.crawl.scope.as_deref() {
        validate_scope(scope)?;
    }

    if config.output.report_path.is_empty() {
        return Err(ConfigError::Validation(
            "report-path cannot be empty".to_string(),
        ));
    }

    Ok(())
}

fn validate_seed(seed: &str) -> Result<(), ConfigError> {
    if seed.is_empty() {
        return Err(ConfigError::InvalidSeed(
            "a seed URL is required".to_string(),
        ));
    }

    let url = Url::parse(seed)
        .map_err(|e| ConfigError::InvalidSeed(format!("'{}': {}", seed, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::InvalidSeed(format!(
            "'{}': only http and https seeds are supported",
            seed
        )));
    }

    if url.host_str().is_none() {
        return Err(ConfigError::InvalidSeed(format!("'{}': missing host", seed)));
    }

    Ok(())
}

fn validate_limits(config: &CrawlConfig) -> Result<(), ConfigError> {
    if config.duration_ms == 0 {
        return Err(ConfigError::Validation(
            "duration-ms must be positive".to_string(),
        ));
    }

    if config.max_workers < 1 || config.max_workers > 512 {
        return Err(ConfigError::Validation(format!(
            "max-workers must be between 1 and 512, got {}",
            config.max_workers
        )));
    }

    if config.max_connections < 1 {
        return Err(ConfigError::Validation(format!(
            "max-connections must be >= 1, got {}",
            config.max_connections
        )));
    }

    if config.fetch_timeout_ms == 0 {
        return Err(ConfigError::Validation(
            "fetch-timeout-ms must be positive".to_string(),
        ));
    }

    // grace-ms may be zero: the deadline then aborts in-flight fetches
    // immediately

    Ok(())
}

/// Validates a scope host suffix
///
/// The scope is a bare host like `wikipedia.org`, not a pattern; subdomain
/// matching is implied.
fn validate_scope(scope: &str) -> Result<(), ConfigError> {
    if scope.is_empty() {
        return Err(ConfigError::Validation(
            "scope cannot be empty".to_string(),
        ));
    }

    if !scope
        .chars()
        .all(|c| c.is_alphanumeric() || c == '.' || c == '-')
    {
        return Err(ConfigError::Validation(format!(
            "scope '{}' contains invalid characters",
            scope
        )));
    }

    if scope.starts_with('.') || scope.ends_with('.') || scope.starts_with('-') || scope.ends_with('-')
    {
        return Err(ConfigError::Validation(format!(
            "scope '{}' cannot start or end with '.' or '-'",
            scope
        )));
    }

    if scope.contains("..") {
        return Err(ConfigError::Validation(format!(
            "scope '{}' cannot contain consecutive dots",
            scope
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_default_config_with_seed() {
        let config = CrawlConfig::new("https://example.com/");
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn test_empty_seed_rejected() {
        let config = CrawlConfig::default();
        let result = validate(&config);
        assert!(matches!(result, Err(ConfigError::InvalidSeed(_))));
    }

    #[test]
    fn test_malformed_seed_rejected() {
        let config = CrawlConfig::new("not a url");
        assert!(matches!(
            validate(&config),
            Err(ConfigError::InvalidSeed(_))
        ));
    }

    #[test]
    fn test_non_http_seed_rejected() {
        let config = CrawlConfig::new("ftp://example.com/");
        assert!(matches!(
            validate(&config),
            Err(ConfigError::InvalidSeed(_))
        ));
    }

    #[test]
    fn test_http_seed_accepted() {
        // Plain http stays valid so local test servers can be crawled
        let config = CrawlConfig::new("http://127.0.0.1:8080/");
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn test_zero_duration_rejected() {
        let mut config = CrawlConfig::new("https://example.com/");
        config.duration_ms = 0;
        assert!(matches!(
            validate(&config),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_zero_workers_rejected() {
        let mut config = CrawlConfig::new("https://example.com/");
        config.max_workers = 0;
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_excessive_workers_rejected() {
        let mut config = CrawlConfig::new("https://example.com/");
        config.max_workers = 10_000;
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_zero_grace_allowed() {
        let mut config = CrawlConfig::new("https://example.com/");
        config.grace_ms = 0;
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn test_scope_validation() {
        let mut config = CrawlConfig::new("https://example.com/");

        config.scope = Some("wikipedia.org".to_string());
        assert!(validate(&config).is_ok());

        config.scope = Some("127.0.0.1".to_string());
        assert!(validate(&config).is_ok());

        config.scope = Some("".to_string());
        assert!(validate(&config).is_err());

        config.scope = Some(".wikipedia.org".to_string());
        assert!(validate(&config).is_err());

        config.scope = Some("wiki..org".to_string());
        assert!(validate(&config).is_err());

        config.scope = Some("wiki pedia.org".to_string());
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_validate_file_allows_missing_seed() {
        let config = FileConfig::default();
        assert!(validate_file(&config).is_ok());
    }

    #[test]
    fn test_validate_file_rejects_bad_present_seed() {
        let mut config = FileConfig::default();
        config.crawl.seed = "nonsense".to_string();
        assert!(validate_file(&config).is_err());
    }

    #[test]
    fn test_validate_file_rejects_empty_report_path() {
        let mut config = FileConfig::default();
        config.output.report_path = String::new();
        assert!(matches!(
            validate_file(&config),
            Err(ConfigError::Validation(_))
        ));
    }
}
