use std::fs;
use std::path::Path;

/// Skeleton settings file written on first run.
pub const SETTINGS_SKELETON_CONTENT: &str = "# sheetnav settings\n\
#\n\
# Format: key = value\n\
# Lines starting with # are comments. Inline comments need a space before # or //.\n\
#\n\
#-----------------------------------------------------------------------------------------------------------------------\n\
#\n\
# ---------- Data source ----------\n\
#\n\
# Spreadsheet id and worksheet name, composed into endpoint_template.\n\
sheet_id = 1Iqsg-RPs0zxd6ZZ6wV3h4-J5_4BZcQb9o8EOtHHJh3o\n\
sheet_name = nav\n\
endpoint_template = https://opensheet.elk.sh/{sheet_id}/{sheet_name}\n\
#\n\
# Full endpoint URL. When set, sheet_id/sheet_name/endpoint_template are ignored.\n\
endpoint =\n\
#\n\
# ---------- Display ----------\n\
#\n\
# Section title for rows without a category.\n\
default_category = uncategorized\n\
# Quiet interval after the last keystroke before the grid is filtered.\n\
search_debounce_ms = 120\n\
# Favicons in exported HTML pages.\n\
show_icons = true\n\
icon_size = 64\n";

/// What: Write the settings skeleton when `path` is missing or empty.
///
/// Inputs:
/// - `path`: Target settings file.
///
/// Output:
/// - `true` when a new file was written; `false` when one already existed or the write failed.
///
/// Details:
/// - Existing content is never touched.
pub fn ensure_settings_file(path: &Path) -> bool {
    let has_content = fs::metadata(path).is_ok_and(|m| m.len() > 0);
    if has_content {
        return false;
    }
    if let Some(dir) = path.parent() {
        let _ = fs::create_dir_all(dir);
    }
    match fs::write(path, SETTINGS_SKELETON_CONTENT) {
        Ok(()) => {
            tracing::info!(path = %path.display(), "wrote default settings");
            true
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "could not write default settings");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Settings, parse_settings};

    #[test]
    /// What: The skeleton parses back to the built-in defaults.
    ///
    /// Inputs:
    /// - `SETTINGS_SKELETON_CONTENT`.
    ///
    /// Output:
    /// - Parsed settings equal `Settings::default()`.
    fn skeleton_matches_defaults() {
        let mut s = Settings::default();
        parse_settings(SETTINGS_SKELETON_CONTENT, &mut s);
        assert_eq!(s, Settings::default());
    }

    #[test]
    /// What: The skeleton is written once and never overwrites user content.
    ///
    /// Inputs:
    /// - Missing file, then a file with user content.
    ///
    /// Output:
    /// - First call writes; later call leaves content untouched.
    fn ensure_settings_file_writes_once() {
        let Ok(dir) = tempfile::tempdir() else {
            panic!("tempdir");
        };
        let path = dir.path().join("nested").join("settings.conf");
        assert!(ensure_settings_file(&path));
        assert!(!ensure_settings_file(&path));

        let _ = fs::write(&path, "sheet_name = mine\n");
        assert!(!ensure_settings_file(&path));
        assert_eq!(
            fs::read_to_string(&path).unwrap_or_default(),
            "sheet_name = mine\n"
        );
    }
}
