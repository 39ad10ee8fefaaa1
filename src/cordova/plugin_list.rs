use super::version::UNKNOWN_VERSION;

/// Literal id some Cordova versions print for a broken plugin entry.
const UNDEFINED_ID: &str = "undefined";

/// What Cordova prints instead of a listing when a project has no plugins.
const EMPTY_LISTING_NOTICE: &str = "No plugins added";

/// A plugin as reported by `cordova plugin list`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstalledPlugin {
    pub id: String,
    pub version: String,
}

impl InstalledPlugin {
    pub fn new(id: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            version: version.into(),
        }
    }
}

/// Turns the raw output of a plugin listing command into plugin records.
pub trait PluginListParser: Send + Sync {
    fn parse(&self, raw: &str) -> Vec<InstalledPlugin>;
}

/// Parser for the line-oriented `cordova plugin list` output:
///
/// ```text
/// cordova-plugin-device 2.1.0 "Device"
/// > cordova-plugin-whitelist 1.3.5 "Whitelist"
/// ```
///
/// The `No plugins added. ...` notice of an empty project yields no records.
#[derive(Debug, Default)]
pub struct TextListParser;

impl TextListParser {
    fn parse_line(line: &str) -> Option<InstalledPlugin> {
        let cleaned = line.trim_start_matches(['>', ' ']).trim_end();
        if cleaned.is_empty() || cleaned.starts_with(EMPTY_LISTING_NOTICE) {
            return None;
        }

        let mut tokens = cleaned.split(' ').filter(|token| !token.is_empty());
        let id = tokens.next()?;
        if id == UNDEFINED_ID {
            return None;
        }

        let version = tokens.next().unwrap_or(UNKNOWN_VERSION);
        Some(InstalledPlugin::new(id, version))
    }
}

impl PluginListParser for TextListParser {
    fn parse(&self, raw: &str) -> Vec<InstalledPlugin> {
        raw.lines()
            .filter(|line| !line.trim().is_empty())
            .filter_map(Self::parse_line)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(raw: &str) -> Vec<InstalledPlugin> {
        TextListParser.parse(raw)
    }

    #[test]
    fn parses_standard_listing() {
        let raw = "cordova-plugin-device 2.1.0 \"Device\"\ncordova-plugin-camera 6.0.0 \"Camera\"\n";
        assert_eq!(
            parse(raw),
            vec![
                InstalledPlugin::new("cordova-plugin-device", "2.1.0"),
                InstalledPlugin::new("cordova-plugin-camera", "6.0.0"),
            ]
        );
    }

    #[test]
    fn skips_blank_lines_and_strips_markers() {
        let raw = "\n> cordova-plugin-device 2.1.0\n   \n  >cordova-plugin-file 7.0.0\n\n";
        assert_eq!(
            parse(raw),
            vec![
                InstalledPlugin::new("cordova-plugin-device", "2.1.0"),
                InstalledPlugin::new("cordova-plugin-file", "7.0.0"),
            ]
        );
    }

    #[test]
    fn id_without_version_is_unknown() {
        assert_eq!(
            parse("cordova-plugin-splash\n"),
            vec![InstalledPlugin::new("cordova-plugin-splash", UNKNOWN_VERSION)]
        );
    }

    #[test]
    fn drops_undefined_entries() {
        let raw = "undefined 1.0.0\ncordova-plugin-device 2.1.0\n> undefined\n";
        assert_eq!(
            parse(raw),
            vec![InstalledPlugin::new("cordova-plugin-device", "2.1.0")]
        );
    }

    #[test]
    fn handles_crlf_line_endings() {
        assert_eq!(
            parse("cordova-plugin-device 2.1.0\r\ncordova-plugin-file\r\n"),
            vec![
                InstalledPlugin::new("cordova-plugin-device", "2.1.0"),
                InstalledPlugin::new("cordova-plugin-file", UNKNOWN_VERSION),
            ]
        );
    }

    #[test]
    fn empty_project_notice_is_not_a_plugin() {
        assert!(parse("No plugins added. Use `cordova plugin add <plugin>`.\n").is_empty());
    }

    #[test]
    fn empty_input_yields_nothing() {
        assert!(parse("").is_empty());
        assert!(parse("\n \n>\n").is_empty());
    }
}
