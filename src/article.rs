//! Article text extraction for URL inputs.
//!
//! When `/verificar` receives a literal URL, the page is fetched and reduced
//! to plain text before entering the pipeline. This is a thin collaborator:
//! a crude tag stripper, not a readability engine.

use regex::Regex;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ArticleError {
    #[error("could not fetch {url}: {reason}")]
    Fetch { url: String, reason: String },

    #[error("article fetch returned status {0}")]
    Status(u16),

    #[error("could not read article body: {0}")]
    Read(String),
}

pub struct ArticleFetcher {
    client: reqwest::Client,
}

impl ArticleFetcher {
    pub fn new(timeout_secs: u64) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()
            .expect("Failed to create HTTP client");
        Self { client }
    }

    /// Fetch a page and return its visible text.
    pub async fn fetch(&self, url: &str) -> Result<String, ArticleError> {
        tracing::info!(url = %url, "extracting article text");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ArticleError::Fetch {
                url: url.to_string(),
                reason: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ArticleError::Status(status.as_u16()));
        }

        let html = response
            .text()
            .await
            .map_err(|e| ArticleError::Read(e.to_string()))?;

        Ok(strip_html(&html))
    }
}

/// Drop script/style blocks and tags, then collapse whitespace.
fn strip_html(html: &str) -> String {
    let no_blocks = Regex::new(r"(?is)<(script|style)[^>]*>.*?</(script|style)>")
        .unwrap()
        .replace_all(html, " ");
    let no_tags = Regex::new(r"(?s)<[^>]+>")
        .unwrap()
        .replace_all(&no_blocks, " ");
    no_tags.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_tags_and_collapses_whitespace() {
        let html = "<html><body><h1>Titular</h1>\n  <p>El  gobierno\nconfirmó.</p></body></html>";
        assert_eq!(strip_html(html), "Titular El gobierno confirmó.");
    }

    #[test]
    fn drops_script_and_style_content() {
        let html = r#"<head><style>p { color: red }</style></head>
<body><script>var x = "oculto";</script><p>Visible</p></body>"#;
        let text = strip_html(html);
        assert_eq!(text, "Visible");
        assert!(!text.contains("oculto"));
    }

    #[test]
    fn plain_text_passes_through() {
        assert_eq!(strip_html("sin etiquetas"), "sin etiquetas");
    }
}
