//! Parser for the legacy plain-text settings file (`~/fcp-git/.config`).
//!
//! The file predates PostSync and was written by shell scripts, so it uses a
//! simple `KEY=VALUE` format:
//!
//! ```text
//! # fcp-git settings
//! SERVER_ADDRESS=git.example.com
//! SERVER_PORT=2222
//! SERVER_PATH=/data/repos
//! ```
//!
//! # Parsing rules
//!
//! - Lines end at any Unicode line separator: `\n`, `\r`, vertical tab,
//!   form feed, U+0085, U+2028 and U+2029.
//! - Each line is trimmed of spaces and tabs (including no-break and other
//!   Unicode space separators); blank lines and lines starting with `#` are
//!   skipped.
//! - The line is split on **every** `=`.  Only lines that yield exactly two
//!   parts are applied, so `SERVER_PATH=/data=repos` is ignored and the field
//!   keeps its default.  Existing files rely on this, so it is kept as is.
//! - Key and value are trimmed.  Unknown keys are ignored.
//! - Parsing starts from [`ServerConfig::default`]; keys absent from the file
//!   keep their default values.

use tracing::debug;

use crate::domain::config::{ConfigField, ServerConfig};

/// Characters that end a line.  Once these are split off, the only whitespace
/// left in a line is tabs and Unicode space separators, so `str::trim` strips
/// nothing else.
const LINE_SEPARATORS: [char; 7] = [
    '\n', '\u{000B}', '\u{000C}', '\r', '\u{0085}', '\u{2028}', '\u{2029}',
];

/// Maps a legacy key name to the config field it sets.
fn legacy_key(key: &str) -> Option<ConfigField> {
    match key {
        "SERVER_ADDRESS" => Some(ConfigField::ServerAddress),
        "SERVER_PORT" => Some(ConfigField::ServerPort),
        "SERVER_PATH" => Some(ConfigField::ServerPath),
        _ => None,
    }
}

/// Parses legacy `KEY=VALUE` content on top of the default config.
///
/// Never fails: malformed lines are skipped.
pub fn parse_legacy_config(content: &str) -> ServerConfig {
    let mut config = ServerConfig::default();

    for line in content.split(LINE_SEPARATORS) {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let parts: Vec<&str> = trimmed.split('=').collect();
        if parts.len() != 2 {
            debug!("skipping legacy config line with {} '=' separators", parts.len() - 1);
            continue;
        }

        let key = parts[0].trim();
        let value = parts[1].trim();
        match legacy_key(key) {
            Some(field) => config.set_field(field, value),
            None => debug!("ignoring unknown legacy config key {key:?}"),
        }
    }

    config
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_file_with_comment_and_blank_line() {
        // Arrange
        let content = "SERVER_ADDRESS=git.example.com\nSERVER_PORT=2222\n# comment\n\nSERVER_PATH=/data/repos";

        // Act
        let cfg = parse_legacy_config(content);

        // Assert
        assert_eq!(cfg, ServerConfig::new("git.example.com", "2222", "/data/repos"));
    }

    #[test]
    fn test_value_containing_equals_is_dropped() {
        // Arrange
        let content = "SERVER_ADDRESS=h\nSERVER_PATH=/data=repos";

        // Act
        let cfg = parse_legacy_config(content);

        // Assert: the path line splits into three parts and is ignored
        assert_eq!(cfg.server_path, "~/repositories");
        assert_eq!(cfg.server_address, "h");
    }

    #[test]
    fn test_missing_keys_keep_defaults() {
        let cfg = parse_legacy_config("SERVER_ADDRESS=host");
        assert_eq!(cfg.server_address, "host");
        assert_eq!(cfg.server_port, "22");
        assert_eq!(cfg.server_path, "~/repositories");
    }

    #[test]
    fn test_empty_content_yields_default() {
        assert_eq!(parse_legacy_config(""), ServerConfig::default());
    }

    #[test]
    fn test_keys_and_values_are_trimmed() {
        let cfg = parse_legacy_config("   SERVER_PORT  =  2200  \n\tSERVER_ADDRESS=h\t");
        assert_eq!(cfg.server_port, "2200");
        assert_eq!(cfg.server_address, "h");
    }

    #[test]
    fn test_indented_comment_is_skipped() {
        let cfg = parse_legacy_config("   # SERVER_ADDRESS=commented\nSERVER_PORT=1");
        assert_eq!(cfg.server_address, "");
        assert_eq!(cfg.server_port, "1");
    }

    #[test]
    fn test_unknown_keys_and_lines_without_equals_are_ignored() {
        let cfg = parse_legacy_config("USER=scott\njust some text\nSERVER_PATH=/srv");
        assert_eq!(cfg, ServerConfig::new("", "22", "/srv"));
    }

    #[test]
    fn test_crlf_line_endings_are_accepted() {
        let cfg = parse_legacy_config("SERVER_ADDRESS=h\r\nSERVER_PORT=2\r\n");
        assert_eq!(cfg.server_address, "h");
        assert_eq!(cfg.server_port, "2");
    }

    #[test]
    fn test_unicode_line_separators_end_lines() {
        // Arrange: NEL, LINE SEPARATOR and PARAGRAPH SEPARATOR between entries
        let content = "SERVER_ADDRESS=h\u{0085}SERVER_PORT=2\u{2028}SERVER_PATH=/srv\u{2029}# c";

        // Act
        let cfg = parse_legacy_config(content);

        // Assert
        assert_eq!(cfg, ServerConfig::new("h", "2", "/srv"));
    }

    #[test]
    fn test_form_feed_separates_lines() {
        let cfg = parse_legacy_config("SERVER_ADDRESS=h\u{000C}SERVER_PORT=2");
        assert_eq!(cfg.server_address, "h");
        assert_eq!(cfg.server_port, "2");
    }

    #[test]
    fn test_no_break_spaces_are_trimmed_like_spaces() {
        let cfg = parse_legacy_config("\u{00A0}SERVER_ADDRESS\u{3000}=\u{2003}h\u{00A0}");
        assert_eq!(cfg.server_address, "h");
    }

    #[test]
    fn test_later_line_overrides_earlier_one() {
        let cfg = parse_legacy_config("SERVER_PORT=1\nSERVER_PORT=2");
        assert_eq!(cfg.server_port, "2");
    }

    #[test]
    fn test_empty_value_is_applied() {
        let cfg = parse_legacy_config("SERVER_PORT=");
        assert_eq!(cfg.server_port, "");
    }
}
