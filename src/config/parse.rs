use super::Settings;

/// What: Remove a trailing comment from a settings value.
///
/// Inputs:
/// - `s`: Raw value text after the `=` sign.
///
/// Output:
/// - Trimmed value without its comment.
///
/// Details:
/// - `#` and `//` only start a comment at the beginning of the value or after whitespace,
///   so URLs (`https://…`, `…/#frag`) survive intact.
pub(crate) fn strip_inline_comment(s: &str) -> &str {
    let bytes = s.as_bytes();
    for (i, _) in s.char_indices() {
        let rest = &s[i..];
        let at_boundary = i == 0 || bytes[i - 1].is_ascii_whitespace();
        if at_boundary && (rest.starts_with('#') || rest.starts_with("//")) {
            return s[..i].trim();
        }
    }
    s.trim()
}

/// What: Interpret a settings value as a boolean flag.
fn parse_bool(val: &str) -> bool {
    let lv = val.to_ascii_lowercase();
    lv == "true" || lv == "1" || lv == "yes" || lv == "on"
}

/// What: Parse settings.conf content into `settings`.
///
/// Inputs:
/// - `content`: Content of the settings file as a string.
/// - `settings`: Mutable reference to `Settings` to populate.
///
/// Output:
/// - None (modifies `settings` in-place).
///
/// Details:
/// - Lines are `key = value`; blank lines and `#`/`//` comment lines are skipped.
/// - Keys are case-insensitive and `.`, `-`, and spaces are treated as `_`.
/// - Unknown keys are ignored; values that fail to parse keep the previous value.
pub fn parse_settings(content: &str, settings: &mut Settings) {
    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with("//") {
            continue;
        }
        let Some((raw_key, val_raw)) = trimmed.split_once('=') else {
            continue;
        };
        let key = raw_key.trim().to_lowercase().replace(['.', '-', ' '], "_");
        let val = strip_inline_comment(val_raw);
        match key.as_str() {
            "sheet_id" | "sheet" => settings.sheet_id = val.to_string(),
            "sheet_name" | "worksheet" | "tab" => settings.sheet_name = val.to_string(),
            "endpoint_template" => {
                if !val.is_empty() {
                    settings.endpoint_template = val.to_string();
                }
            }
            "endpoint" | "endpoint_url" => settings.endpoint = val.to_string(),
            "default_category" => {
                if !val.is_empty() {
                    settings.default_category = val.to_string();
                }
            }
            "search_debounce_ms" | "debounce_ms" => {
                if let Ok(v) = val.parse::<u64>() {
                    settings.search_debounce_ms = v;
                }
            }
            "show_icons" | "icons" => settings.show_icons = parse_bool(val),
            "icon_size" => {
                if let Ok(v) = val.parse::<u16>()
                    && v > 0
                {
                    settings.icon_size = v;
                }
            }
            _ => {
                tracing::debug!(key = %key, "ignoring unknown settings key");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Comments are stripped only at word boundaries.
    ///
    /// Inputs:
    /// - Values with trailing comments, URLs containing `//` and `#`.
    ///
    /// Output:
    /// - Comments removed; URLs left intact.
    fn strip_inline_comment_keeps_urls() {
        assert_eq!(strip_inline_comment(" nav # worksheet"), "nav");
        assert_eq!(strip_inline_comment("120 // ms"), "120");
        assert_eq!(
            strip_inline_comment(" https://a.example/x#top "),
            "https://a.example/x#top"
        );
        assert_eq!(strip_inline_comment("# only comment"), "");
    }

    #[test]
    /// What: Known keys populate settings; bad values keep defaults.
    ///
    /// Inputs:
    /// - Content with aliases, mixed-case keys, an invalid number, and an unknown key.
    ///
    /// Output:
    /// - Parsed fields updated, untouched fields at their defaults.
    fn parse_settings_reads_known_keys() {
        let mut s = Settings::default();
        let content = "\
# comment line
Sheet-ID = abc123
sheet name = links   # tab
endpoint = https://mirror.example/rows.json
search.debounce_ms = 250
icon_size = zero
show_icons = off
default_category = Misc
unknown = 1
no equals sign here
";
        parse_settings(content, &mut s);
        assert_eq!(s.sheet_id, "abc123");
        assert_eq!(s.sheet_name, "links");
        assert_eq!(s.endpoint, "https://mirror.example/rows.json");
        assert_eq!(s.search_debounce_ms, 250);
        assert_eq!(s.icon_size, Settings::default().icon_size);
        assert!(!s.show_icons);
        assert_eq!(s.default_category, "Misc");
    }
}
