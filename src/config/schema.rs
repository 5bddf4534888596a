use serde::{Deserialize, Serialize};

/// User configuration.
///
/// Example YAML:
/// ```yaml
/// pass_mark: 50
/// distinction:
///   mark: 90
///   subjects: [Math, English]
/// decimals: 2
/// color: auto
/// weights: [60, 40]
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Marks strictly below this count as failing in the "any subject" query
    #[serde(default = "default_pass_mark")]
    pub pass_mark: i64,

    #[serde(default)]
    pub distinction: DistinctionConfig,

    /// Decimal places for means, deviations and weighted scores
    #[serde(default = "default_decimals")]
    pub decimals: usize,

    #[serde(default)]
    pub color: ColorMode,

    /// Default subject weights offered by the weighted-score prompt
    #[serde(default)]
    pub weights: Option<Vec<f64>>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pass_mark: default_pass_mark(),
            distinction: DistinctionConfig::default(),
            decimals: default_decimals(),
            color: ColorMode::default(),
            weights: None,
        }
    }
}

/// The two-subject distinction query.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct DistinctionConfig {
    #[serde(default = "default_distinction_mark")]
    pub mark: i64,

    /// Exactly two subject names, matched case-sensitively
    #[serde(default = "default_distinction_subjects")]
    pub subjects: Vec<String>,
}

impl Default for DistinctionConfig {
    fn default() -> Self {
        Self {
            mark: default_distinction_mark(),
            subjects: default_distinction_subjects(),
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Colors when stdout is a terminal
    #[default]
    Auto,
    Always,
    Never,
}

fn default_pass_mark() -> i64 {
    50
}

fn default_distinction_mark() -> i64 {
    90
}

fn default_distinction_subjects() -> Vec<String> {
    vec!["Math".to_string(), "English".to_string()]
}

fn default_decimals() -> usize {
    2
}
