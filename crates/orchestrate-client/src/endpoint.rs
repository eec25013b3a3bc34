//! URL composition for API paths.
//!
//! Every path segment is escaped on its own, so a key such as
//! `byrd@bowery.io` or `a/b` stays a single segment instead of changing the
//! shape of the path.

use url::Url;

use crate::error::{Error, Result};

/// A query parameter whose value may be absent. Absent entries are dropped.
pub(crate) type QueryParam<'a> = (&'a str, Option<String>);

/// Compose an absolute URL below `api_base` from path segments and query
/// parameters.
///
/// `api_base` must end with `/` (the client normalizes it that way).
pub(crate) fn compose_url(
    api_base: &Url,
    segments: &[&str],
    query: &[QueryParam<'_>],
) -> Result<Url> {
    if segments.is_empty() {
        return Err(Error::InvalidArgument(
            "at least one path segment is required".to_string(),
        ));
    }

    let mut encoded = Vec::with_capacity(segments.len());
    for segment in segments {
        if segment.is_empty() || *segment == "." || *segment == ".." {
            return Err(Error::InvalidArgument(format!(
                "invalid path segment {:?}",
                segment
            )));
        }
        encoded.push(urlencoding::encode(segment));
    }

    let mut url = api_base.clone();
    url.set_path(&format!("{}{}", api_base.path(), encoded.join("/")));

    let present: Vec<(&str, &str)> = query
        .iter()
        .filter_map(|(name, value)| value.as_deref().map(|v| (*name, v)))
        .collect();
    if !present.is_empty() {
        url.query_pairs_mut().extend_pairs(present);
    }

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://api.orchestrate.io/v0/").unwrap()
    }

    #[test]
    fn test_segments_are_encoded_independently() {
        let url = compose_url(&base(), &["users", "sjkaliski@gmail.com"], &[]).unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.orchestrate.io/v0/users/sjkaliski%40gmail.com"
        );

        let url = compose_url(&base(), &["files", "a/b c"], &[]).unwrap();
        assert_eq!(url.path(), "/v0/files/a%2Fb%20c");
        assert_eq!(url.path_segments().unwrap().count(), 3);
    }

    #[test]
    fn test_no_query_means_no_question_mark() {
        let url = compose_url(&base(), &["users"], &[("limit", None)]).unwrap();
        assert_eq!(url.query(), None);
        assert!(!url.as_str().contains('?'));
    }

    #[test]
    fn test_absent_params_are_dropped() {
        let url = compose_url(
            &base(),
            &["users"],
            &[
                ("limit", Some("10".to_string())),
                ("startKey", None),
                ("endKey", Some("zed".to_string())),
            ],
        )
        .unwrap();
        assert_eq!(url.query(), Some("limit=10&endKey=zed"));
    }

    #[test]
    fn test_query_values_are_escaped() {
        let url = compose_url(
            &base(),
            &["users"],
            &[("query", Some("name:Steve & age:[20 TO 30]".to_string()))],
        )
        .unwrap();
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(
            pairs,
            vec![("query".to_string(), "name:Steve & age:[20 TO 30]".to_string())]
        );
    }

    #[test]
    fn test_empty_segments_rejected() {
        assert!(matches!(
            compose_url(&base(), &[], &[]),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            compose_url(&base(), &["users", ""], &[]),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            compose_url(&base(), &["users", ".."], &[]),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_base_with_prefix_path() {
        let base = Url::parse("http://127.0.0.1:9000/proxy/v0/").unwrap();
        let url = compose_url(&base, &["users", "x"], &[]).unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:9000/proxy/v0/users/x");
    }
}
