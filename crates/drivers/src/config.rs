use crate::cli::Cli;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub site: String,
    pub data_path: String,
    pub document_path: String,
    pub inline_element_id: String,
    pub window_size: [f32; 2],
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            site: ".".to_string(),
            data_path: "data/pages.json".to_string(),
            document_path: "index.html".to_string(),
            inline_element_id: "pages-inline".to_string(),
            window_size: [1200.0, 820.0],
        }
    }
}

impl AppConfig {
    pub fn from_cli(cli: &Cli) -> Self {
        let defaults = Self::default();
        Self {
            site: cli.site().map_or(defaults.site, str::to_string),
            data_path: cli.data_path.clone().unwrap_or(defaults.data_path),
            document_path: cli.document.clone().unwrap_or(defaults.document_path),
            inline_element_id: cli.inline_id.clone().unwrap_or(defaults.inline_element_id),
            window_size: defaults.window_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn default_config_points_at_published_layout() {
        let config = AppConfig::default();
        assert_eq!(config.site, ".");
        assert_eq!(config.data_path, "data/pages.json");
        assert_eq!(config.document_path, "index.html");
        assert_eq!(config.inline_element_id, "pages-inline");
    }

    #[test]
    fn cli_overrides_only_given_fields() {
        let cli = Cli::try_parse_from(["platebook", "--site", "out", "--document", "deck.html"])
            .expect("should parse");
        let config = AppConfig::from_cli(&cli);
        assert_eq!(config.site, "out");
        assert_eq!(config.document_path, "deck.html");
        assert_eq!(config.data_path, "data/pages.json");
        assert_eq!(config.inline_element_id, "pages-inline");
    }

    #[test]
    fn positional_site_sets_config_site() {
        let cli = Cli::try_parse_from(["platebook", "presentation_site", "list"])
            .expect("should parse");
        assert_eq!(AppConfig::from_cli(&cli).site, "presentation_site");
    }
}
