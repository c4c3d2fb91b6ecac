//! Parsing of `k3d <kind> list -o json` output.

use super::{ParseListingError, ResourceKind};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct ListedResource {
    name: String,
}

/// Extracts resource names from JSON list output.
///
/// The output must be a JSON array of objects carrying a `name` field; other
/// fields are ignored. Whitespace-only output is an empty listing.
///
/// # Errors
///
/// Returns [`ParseListingError`] when the output is not such an array.
pub fn parse_listing(kind: ResourceKind, output: &str) -> Result<Vec<String>, ParseListingError> {
    let trimmed = output.trim();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }

    serde_json::from_str::<Vec<ListedResource>>(trimmed)
        .map(|resources| resources.into_iter().map(|resource| resource.name).collect())
        .map_err(|err| ParseListingError {
            kind,
            reason: err.to_string(),
        })
}

#[cfg(test)]
#[expect(clippy::expect_used, reason = "Test code uses expect for assertion clarity")]
mod tests {
    use super::parse_listing;
    use crate::k3d::domain::ResourceKind;

    #[test]
    fn extracts_names_and_ignores_other_fields() {
        let output = r#"[
            {"name": "kyma", "serversCount": 1, "agentsCount": 1, "nodes": []},
            {"name": "other", "serversCount": 1}
        ]"#;

        let names = parse_listing(ResourceKind::Cluster, output).expect("listing should parse");

        assert_eq!(names, vec!["kyma", "other"]);
    }

    #[test]
    fn blank_output_is_an_empty_listing() {
        let names = parse_listing(ResourceKind::Registry, "  \n").expect("listing should parse");
        assert!(names.is_empty());
    }

    #[test]
    fn table_output_is_rejected() {
        let output = "NAME   SERVERS   AGENTS\nkyma   1/1       1/1\n";

        let error = parse_listing(ResourceKind::Cluster, output).expect_err("table should fail");

        assert_eq!(error.kind, ResourceKind::Cluster);
    }

    #[test]
    fn entries_without_names_are_rejected() {
        let result = parse_listing(ResourceKind::Registry, r#"[{"role": "registry"}]"#);
        assert!(result.is_err());
    }
}
