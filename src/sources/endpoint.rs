//! Composition of the sheet JSON endpoint from configured identifiers.

use crate::util::percent_encode;

/// Template for the public sheet-to-JSON bridge.
pub const DEFAULT_ENDPOINT_TEMPLATE: &str = "https://opensheet.elk.sh/{sheet_id}/{sheet_name}";

/// What: Fill the endpoint template with a sheet id and worksheet name.
///
/// Inputs:
/// - `template`: URL template containing `{sheet_id}` and `{sheet_name}` placeholders.
/// - `sheet_id`: Spreadsheet identifier, inserted verbatim.
/// - `sheet_name`: Worksheet name, percent-encoded as a URI component.
///
/// Output:
/// - The endpoint URL to fetch.
#[must_use]
pub fn compose_endpoint(template: &str, sheet_id: &str, sheet_name: &str) -> String {
    template
        .replace("{sheet_id}", sheet_id.trim())
        .replace("{sheet_name}", &percent_encode(sheet_name.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Worksheet names are encoded while the id is kept verbatim.
    ///
    /// Inputs:
    /// - Default template, an id with dashes, a name with a space and CJK text.
    ///
    /// Output:
    /// - Fully composed URL with `%20` and UTF-8 percent escapes.
    fn compose_endpoint_encodes_sheet_name() {
        assert_eq!(
            compose_endpoint(DEFAULT_ENDPOINT_TEMPLATE, "1Abc-_x", "nav"),
            "https://opensheet.elk.sh/1Abc-_x/nav"
        );
        assert_eq!(
            compose_endpoint(DEFAULT_ENDPOINT_TEMPLATE, "id", "my links"),
            "https://opensheet.elk.sh/id/my%20links"
        );
        assert_eq!(
            compose_endpoint("https://bridge.example/{sheet_id}?tab={sheet_name}", "id", "导航"),
            "https://bridge.example/id?tab=%E5%AF%BC%E8%88%AA"
        );
    }
}
