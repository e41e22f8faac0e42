//! Gist records and their projection from the upstream payload

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Description used when the upstream record carries none
pub const NO_DESCRIPTION: &str = "No description";

/// Normalized projection of one upstream gist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GistSummary {
    pub id: String,
    pub description: String,
    pub public: bool,
    /// File names, in upstream order
    pub files: Vec<String>,
    pub url: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Upstream gist object as served by the listing endpoint.
///
/// Only the projected fields are declared; everything else in the payload is
/// ignored. `files` stays loosely typed since only its keys are used.
#[derive(Debug, Deserialize)]
struct UpstreamGist {
    id: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    public: Option<bool>,
    #[serde(default)]
    files: Option<Map<String, Value>>,
    html_url: String,
    created_at: String,
    updated_at: String,
}

impl From<UpstreamGist> for GistSummary {
    fn from(raw: UpstreamGist) -> Self {
        Self {
            id: raw.id,
            description: raw
                .description
                .unwrap_or_else(|| NO_DESCRIPTION.to_string()),
            public: raw.public.unwrap_or(true),
            files: raw
                .files
                .map(|files| files.into_iter().map(|(name, _)| name).collect())
                .unwrap_or_default(),
            url: raw.html_url,
            created_at: raw.created_at,
            updated_at: raw.updated_at,
        }
    }
}

/// Parse an upstream listing body into normalized summaries
pub(crate) fn parse_gists(body: &str) -> Result<Vec<GistSummary>, serde_json::Error> {
    let raw: Vec<UpstreamGist> = serde_json::from_str(body)?;
    Ok(raw.into_iter().map(GistSummary::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_projects_upstream_fields() {
        let body = r#"[{
            "id": "abc123",
            "description": "Example gist",
            "public": true,
            "files": {"hello.rb": {"filename": "hello.rb", "size": 12}},
            "html_url": "https://gist.github.com/abc123",
            "created_at": "2023-01-01T00:00:00Z",
            "updated_at": "2023-01-02T00:00:00Z",
            "owner": {"login": "octocat"},
            "comments": 0
        }]"#;

        let gists = parse_gists(body).unwrap();
        assert_eq!(
            gists,
            vec![GistSummary {
                id: "abc123".to_string(),
                description: "Example gist".to_string(),
                public: true,
                files: vec!["hello.rb".to_string()],
                url: "https://gist.github.com/abc123".to_string(),
                created_at: "2023-01-01T00:00:00Z".to_string(),
                updated_at: "2023-01-02T00:00:00Z".to_string(),
            }]
        );
    }

    #[test]
    fn test_missing_or_null_description() {
        let body = r#"[
            {"id": "a", "html_url": "u", "created_at": "c", "updated_at": "u"},
            {"id": "b", "description": null, "html_url": "u", "created_at": "c", "updated_at": "u"},
            {"id": "c", "description": "", "html_url": "u", "created_at": "c", "updated_at": "u"}
        ]"#;

        let gists = parse_gists(body).unwrap();
        assert_eq!(gists[0].description, NO_DESCRIPTION);
        assert_eq!(gists[1].description, NO_DESCRIPTION);
        assert_eq!(gists[2].description, "");
        // Absent visibility and files fall back to public with no files
        assert!(gists[0].public);
        assert!(gists[0].files.is_empty());
    }

    #[test]
    fn test_file_order_follows_upstream() {
        let body = r#"[{
            "id": "a",
            "files": {"zeta.txt": {}, "alpha.txt": {}, "mid.rs": {}},
            "html_url": "u",
            "created_at": "c",
            "updated_at": "u"
        }]"#;

        let gists = parse_gists(body).unwrap();
        assert_eq!(gists[0].files, vec!["zeta.txt", "alpha.txt", "mid.rs"]);
    }

    #[test]
    fn test_rejects_unexpected_shapes() {
        // Not an array
        assert!(parse_gists(r#"{"message": "oops"}"#).is_err());
        // Missing id
        assert!(parse_gists(r#"[{"html_url": "u", "created_at": "c", "updated_at": "u"}]"#).is_err());
        // Wrong type
        assert!(parse_gists(r#"[{"id": 5, "html_url": "u", "created_at": "c", "updated_at": "u"}]"#).is_err());
        // Not JSON at all
        assert!(parse_gists("<html>").is_err());
        // Empty listing is fine
        assert!(parse_gists("[]").unwrap().is_empty());
    }
}
