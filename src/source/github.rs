//! GitHub URL handling for the `--git` source

use reqwest::{Client, Url};

use crate::error::{MdRefactorError, Result};

/// Parse `raw` and check that it points at GitHub
///
/// Only the host is checked: it must contain `github.com`.
///
/// # Errors
///
/// Returns [`MdRefactorError::InvalidGitHubUrl`] if the string is not a URL
/// or the host is not GitHub
pub fn validate(raw: &str) -> Result<Url> {
    let url = Url::parse(raw).map_err(|e| MdRefactorError::InvalidGitHubUrl(format!("{raw}: {e}")))?;

    match url.host_str() {
        Some(host) if host.contains("github.com") => Ok(url),
        _ => Err(MdRefactorError::InvalidGitHubUrl(raw.to_string())),
    }
}

/// Rewrite a `github.com/<owner>/<repo>/blob/<ref>/<path>` URL onto the raw-content host
///
/// # Errors
///
/// Returns a configuration error if the URL is not a blob URL
pub fn raw_content_url(url: &Url, raw_base: &str) -> Result<Url> {
    let segments: Vec<&str> = url
        .path_segments()
        .map(|s| s.filter(|seg| !seg.is_empty()).collect())
        .unwrap_or_default();

    let [owner, repo, "blob", reference, path @ ..] = segments.as_slice() else {
        return Err(MdRefactorError::ConfigValidation(format!(
            "Could not convert {url} to a raw GitHub URL: expected /<owner>/<repo>/blob/<ref>/<path>"
        )));
    };
    if path.is_empty() {
        return Err(MdRefactorError::ConfigValidation(format!(
            "Could not convert {url} to a raw GitHub URL: no file path after the ref"
        )));
    }

    let raw = format!(
        "{}/{owner}/{repo}/{reference}/{}",
        raw_base.trim_end_matches('/'),
        path.join("/")
    );
    Url::parse(&raw).map_err(|e| MdRefactorError::ConfigValidation(format!("{raw}: {e}")))
}

/// Download the file behind a raw-content URL
///
/// # Errors
///
/// Returns a transport error if the request fails and a protocol error on a
/// non-success status
pub async fn fetch_raw(client: &Client, url: &Url) -> Result<String> {
    tracing::info!(url = %url, "Fetching raw content from GitHub...");

    let response = client.get(url.clone()).send().await?;
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        return Err(MdRefactorError::UnexpectedStatus {
            url: url.to_string(),
            status: status.as_u16(),
            body,
        });
    }

    tracing::debug!(bytes = body.len(), "fetched raw content");
    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use std::time::Duration;
    use wiremock::{
        matchers::{method, path},
        Mock, MockServer, ResponseTemplate,
    };

    #[test]
    fn test_validate_accepts_github_hosts() {
        assert!(validate("https://github.com/rust-lang/rust").is_ok());
        assert!(validate("https://gist.github.com/someone/abc").is_ok());
    }

    #[test]
    fn test_validate_rejects_other_hosts() {
        let err = validate("https://gitlab.com/group/project").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Configuration);

        // The raw host does not contain "github.com" either.
        assert!(validate("https://raw.githubusercontent.com/a/b/main/README.md").is_err());
    }

    #[test]
    fn test_validate_rejects_garbage() {
        let err = validate("not a url").unwrap_err();
        assert!(matches!(err, MdRefactorError::InvalidGitHubUrl(_)));
    }

    #[test]
    fn test_raw_content_url_from_blob() {
        let url = validate("https://github.com/owner/repo/blob/main/docs/guide.md").unwrap();
        let raw = raw_content_url(&url, "https://raw.githubusercontent.com").unwrap();
        assert_eq!(
            raw.as_str(),
            "https://raw.githubusercontent.com/owner/repo/main/docs/guide.md"
        );
    }

    #[test]
    fn test_raw_content_url_rejects_repo_root() {
        let url = validate("https://github.com/owner/repo").unwrap();
        let err = raw_content_url(&url, "https://raw.githubusercontent.com").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Configuration);

        let url = validate("https://github.com/owner/repo/blob/main").unwrap();
        assert!(raw_content_url(&url, "https://raw.githubusercontent.com").is_err());
    }

    #[tokio::test]
    async fn test_fetch_raw() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/owner/repo/main/README.md"))
            .respond_with(ResponseTemplate::new(200).set_body_string("# Readme\n"))
            .mount(&server)
            .await;

        let url = validate("https://github.com/owner/repo/blob/main/README.md").unwrap();
        let raw = raw_content_url(&url, &server.uri()).unwrap();
        let client = Client::builder()
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap();

        assert_eq!(fetch_raw(&client, &raw).await.unwrap(), "# Readme\n");
    }

    #[tokio::test]
    async fn test_fetch_raw_not_found() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404).set_body_string("404: Not Found"))
            .mount(&server)
            .await;

        let raw = Url::parse(&format!("{}/owner/repo/main/missing.md", server.uri())).unwrap();
        let err = fetch_raw(&Client::new(), &raw).await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Protocol);
        assert!(err.to_string().contains("404"));
    }
}
