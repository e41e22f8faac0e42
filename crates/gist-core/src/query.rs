//! Validated request parameters

use std::num::IntErrorKind;

use crate::cache::CacheKey;
use crate::error::PipelineError;

/// Page size used when the caller gives none
pub const DEFAULT_PER_PAGE: u32 = 30;

/// Largest page size the upstream accepts
pub const MAX_PER_PAGE: u32 = 100;

/// Page used when the caller gives none
pub const DEFAULT_PAGE: u64 = 1;

/// Validated parameters for one gists listing request.
///
/// Instances only exist with a non-empty username, `per_page` in
/// `1..=MAX_PER_PAGE` and `page >= 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GistsQuery {
    username: String,
    per_page: u32,
    page: u64,
}

impl GistsQuery {
    /// Build a query from already-typed values
    pub fn new(username: &str, per_page: u32, page: u64) -> Result<Self, PipelineError> {
        let username = username.trim();
        if username.is_empty() {
            return Err(PipelineError::InvalidUsername);
        }
        if !(1..=MAX_PER_PAGE).contains(&per_page) {
            return Err(PipelineError::InvalidPerPage);
        }
        if page < 1 {
            return Err(PipelineError::InvalidPage);
        }

        Ok(Self {
            username: username.to_string(),
            per_page,
            page,
        })
    }

    /// Build a query from raw request values, applying defaults for absent
    /// pagination parameters
    pub fn parse(
        raw_username: &str,
        raw_per_page: Option<&str>,
        raw_page: Option<&str>,
    ) -> Result<Self, PipelineError> {
        if raw_username.trim().is_empty() {
            return Err(PipelineError::InvalidUsername);
        }

        let per_page = match raw_per_page {
            Some(raw) => raw
                .trim()
                .parse::<u32>()
                .map_err(|_| PipelineError::InvalidPerPage)?,
            None => DEFAULT_PER_PAGE,
        };
        let page = match raw_page {
            Some(raw) => parse_page(raw)?,
            None => DEFAULT_PAGE,
        };

        Self::new(raw_username, per_page, page)
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn per_page(&self) -> u32 {
        self.per_page
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn cache_key(&self) -> CacheKey {
        CacheKey {
            username: self.username.clone(),
            per_page: self.per_page,
            page: self.page,
        }
    }
}

fn parse_page(raw: &str) -> Result<u64, PipelineError> {
    raw.trim().parse::<u64>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow => PipelineError::PageTooLarge,
        _ => PipelineError::InvalidPage,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let query = GistsQuery::parse("octocat", None, None).unwrap();
        assert_eq!(query.username(), "octocat");
        assert_eq!(query.per_page(), DEFAULT_PER_PAGE);
        assert_eq!(query.page(), DEFAULT_PAGE);
    }

    #[test]
    fn test_explicit_values() {
        let query = GistsQuery::parse("octocat", Some("50"), Some("2")).unwrap();
        assert_eq!(query.per_page(), 50);
        assert_eq!(query.page(), 2);

        // Bounds are inclusive
        assert!(GistsQuery::parse("octocat", Some("1"), None).is_ok());
        assert!(GistsQuery::parse("octocat", Some("100"), None).is_ok());
    }

    #[test]
    fn test_username_is_trimmed() {
        let query = GistsQuery::parse("  octocat ", None, None).unwrap();
        assert_eq!(query.username(), "octocat");
    }

    #[test]
    fn test_invalid_username() {
        for raw in ["", "   ", "\t"] {
            assert!(matches!(
                GistsQuery::parse(raw, None, None),
                Err(PipelineError::InvalidUsername)
            ));
        }
    }

    #[test]
    fn test_invalid_per_page() {
        for raw in ["0", "101", "-1", "abc", "", "2.5", "99999999999"] {
            assert!(
                matches!(
                    GistsQuery::parse("octocat", Some(raw), None),
                    Err(PipelineError::InvalidPerPage)
                ),
                "per_page={raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_invalid_page() {
        for raw in ["0", "-1", "abc", ""] {
            assert!(
                matches!(
                    GistsQuery::parse("octocat", None, Some(raw)),
                    Err(PipelineError::InvalidPage)
                ),
                "page={raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_pages_beyond_u32_are_accepted() {
        let query = GistsQuery::parse("octocat", None, Some("4294967296")).unwrap();
        assert_eq!(query.page(), 4_294_967_296);
        assert_eq!(query.cache_key().page, 4_294_967_296);

        let query = GistsQuery::parse("octocat", None, Some("18446744073709551615")).unwrap();
        assert_eq!(query.page(), u64::MAX);
    }

    #[test]
    fn test_page_above_u64_states_limit() {
        let err = GistsQuery::parse("octocat", None, Some("18446744073709551616")).unwrap_err();
        assert!(matches!(err, PipelineError::PageTooLarge));
        assert_eq!(err.to_string(), "page must be at most 18446744073709551615");
    }

    #[test]
    fn test_username_checked_before_pagination() {
        assert!(matches!(
            GistsQuery::parse("", Some("abc"), Some("abc")),
            Err(PipelineError::InvalidUsername)
        ));
    }

    #[test]
    fn test_cache_key_depends_on_all_fields() {
        let a = GistsQuery::new("octocat", 30, 1).unwrap().cache_key();
        let b = GistsQuery::parse("octocat", Some("30"), Some("1")).unwrap().cache_key();
        assert_eq!(a, b);

        assert_ne!(a, GistsQuery::new("octocat", 30, 2).unwrap().cache_key());
        assert_ne!(a, GistsQuery::new("octocat", 31, 1).unwrap().cache_key());
        assert_ne!(a, GistsQuery::new("hubot", 30, 1).unwrap().cache_key());
    }
}
