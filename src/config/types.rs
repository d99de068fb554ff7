use serde::Deserialize;

/// Top-level configuration structure for linkharvest
///
/// Every section and field is optional in the TOML file; anything absent
/// falls back to its default, and the command line can override any field
/// afterwards.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub crawl: CrawlConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Crawl behavior configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CrawlConfig {
    /// Seed URL the crawl starts from
    #[serde(default)]
    pub seed: String,

    /// Total wall-clock budget for the crawl (milliseconds)
    #[serde(rename = "duration-ms", default = "default_duration_ms")]
    pub duration_ms: u64,

    /// Number of concurrent fetch/extract workers
    #[serde(rename = "max-workers", default = "default_max_workers")]
    pub max_workers: usize,

    /// Upper bound on simultaneous HTTP requests
    #[serde(rename = "max-connections", default = "default_max_connections")]
    pub max_connections: usize,

    /// Per-request timeout (milliseconds)
    #[serde(rename = "fetch-timeout-ms", default = "default_fetch_timeout_ms")]
    pub fetch_timeout_ms: u64,

    /// Extra time granted to in-flight fetches once the deadline has passed
    /// (milliseconds)
    #[serde(rename = "grace-ms", default = "default_grace_ms")]
    pub grace_ms: u64,

    /// Optional host suffix; discovered links outside it are discarded
    #[serde(default)]
    pub scope: Option<String>,
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Path the JSON report is written to
    #[serde(rename = "report-path", default = "default_report_path")]
    pub report_path: String,
}

fn default_duration_ms() -> u64 {
    20_000
}

fn default_max_workers() -> usize {
    50
}

fn default_max_connections() -> usize {
    50
}

fn default_fetch_timeout_ms() -> u64 {
    3_000
}

fn default_grace_ms() -> u64 {
    2_000
}

fn default_report_path() -> String {
    "links.json".to_string()
}

impl Default for CrawlConfig {
    fn default() -> Self {
        Self {
            seed: String::new(),
            duration_ms: default_duration_ms(),
            max_workers: default_max_workers(),
            max_connections: default_max_connections(),
            fetch_timeout_ms: default_fetch_timeout_ms(),
            grace_ms: default_grace_ms(),
            scope: None,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            report_path: default_report_path(),
        }
    }
}

impl CrawlConfig {
    /// Builds a configuration for the given seed with every other field at
    /// its default
    pub fn new(seed: impl Into<String>) -> Self {
        Self {
            seed: seed.into(),
            ..Self::default()
        }
    }
}
