use rotei_core::format::OutputFormat;
use rotei_core::graph::RoadCategory;

/// Parse output format from string
pub fn parse_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Parse road category from string
pub fn parse_category(s: &str) -> std::result::Result<RoadCategory, String> {
    s.parse::<RoadCategory>().map_err(|e| e.to_string())
}
