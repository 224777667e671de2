use crate::hierarchy::DEFAULT_SEPARATOR;
use crate::navigation::ALL_LABEL;

/// Environment variable that overrides the default data source.
pub const DATA_ENV: &str = "SUNBURST_DATA";

/// Default document location, relative to the working directory.
pub const DEFAULT_DATA_SOURCE: &str = "hierarchical_data.json";

/// Viewer settings.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewerConfig {
    /// File path or http(s) URL of the hierarchy document
    pub data_source: String,
    /// Edge length of the square sunburst canvas, in points
    pub canvas_size: f32,
    pub breadcrumb_separator: String,
    /// Label shown for the root in the category pane and at the chart centre
    pub root_label: String,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            data_source: DEFAULT_DATA_SOURCE.to_string(),
            canvas_size: 600.0,
            breadcrumb_separator: DEFAULT_SEPARATOR.to_string(),
            root_label: ALL_LABEL.to_string(),
        }
    }
}

impl ViewerConfig {
    /// Defaults, then `SUNBURST_DATA`, then the first CLI argument.
    pub fn from_env_and_args<I>(env_source: Option<String>, args: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = Self::default();
        if let Some(source) = env_source.filter(|s| !s.trim().is_empty()) {
            config.data_source = source;
        }
        if let Some(source) = args.into_iter().next() {
            config.data_source = source;
        }
        config
    }

    /// Read settings from the process environment and arguments.
    pub fn from_process() -> Self {
        Self::from_env_and_args(std::env::var(DATA_ENV).ok(), std::env::args().skip(1))
    }

    pub fn with_data_source(mut self, source: impl Into<String>) -> Self {
        self.data_source = source.into();
        self
    }

    pub fn with_canvas_size(mut self, size: f32) -> Self {
        self.canvas_size = size.max(100.0);
        self
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.breadcrumb_separator = separator.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ViewerConfig::default();
        assert_eq!(config.data_source, "hierarchical_data.json");
        assert_eq!(config.breadcrumb_separator, "->");
        assert_eq!(config.root_label, "All");
    }

    #[test]
    fn argument_beats_environment() {
        let config = ViewerConfig::from_env_and_args(
            Some("env.json".into()),
            vec!["arg.json".to_string()],
        );
        assert_eq!(config.data_source, "arg.json");

        let config = ViewerConfig::from_env_and_args(Some("env.json".into()), Vec::new());
        assert_eq!(config.data_source, "env.json");

        let config = ViewerConfig::from_env_and_args(Some("  ".into()), Vec::new());
        assert_eq!(config.data_source, DEFAULT_DATA_SOURCE);
    }

    #[test]
    fn builders() {
        let config = ViewerConfig::default()
            .with_data_source("https://example.com/h.json")
            .with_canvas_size(10.0)
            .with_separator(" > ");
        assert_eq!(config.canvas_size, 100.0);
        assert_eq!(config.breadcrumb_separator, " > ");
        assert!(crate::source::is_remote(&config.data_source));
    }
}
