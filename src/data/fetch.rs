use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use reqwest::Client;

use crate::error::{DataError, Result};

// ---------------------------------------------------------------------------
// DataSource – where the raw CSV text comes from
// ---------------------------------------------------------------------------

/// Location of the raw CSV text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    /// `http://` or `https://` resource.
    Url(String),
    /// Local file.
    File(PathBuf),
}

impl FromStr for DataSource {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let s = s.trim();
        if s.starts_with("http://") || s.starts_with("https://") {
            Ok(DataSource::Url(s.to_string()))
        } else if let Some(path) = s.strip_prefix("file://") {
            Ok(DataSource::File(PathBuf::from(path)))
        } else {
            Ok(DataSource::File(PathBuf::from(s)))
        }
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::Url(url) => write!(f, "{url}"),
            DataSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

// ---------------------------------------------------------------------------
// TextFetcher – one-shot raw text retrieval
// ---------------------------------------------------------------------------

/// Fetches the raw text of a [`DataSource`].
#[derive(Debug, Clone)]
pub struct TextFetcher {
    client: Client,
}

impl TextFetcher {
    /// Build a fetcher whose HTTP requests give up after `timeout`.
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(DataError::Client)?;
        Ok(Self { client })
    }

    /// Fetch the complete text. Non-success HTTP statuses are errors.
    ///
    /// Both transports decode the same way: the bytes must be UTF-8, and
    /// anything else is a parse-family error rather than a fetch failure.
    pub async fn fetch_text(&self, source: &DataSource) -> Result<String> {
        let bytes = match source {
            DataSource::Url(url) => self.fetch_url(url).await?,
            DataSource::File(path) => {
                tokio::fs::read(path)
                    .await
                    .map_err(|source| DataError::Io {
                        path: path.clone(),
                        source,
                    })?
            }
        };
        Ok(String::from_utf8(bytes)?)
    }

    async fn fetch_url(&self, url: &str) -> Result<Vec<u8>> {
        let fetch_err = |source| DataError::Fetch {
            url: url.to_string(),
            source,
        };

        let response = self.client.get(url).send().await.map_err(fetch_err)?;
        let status = response.status();
        if !status.is_success() {
            return Err(DataError::HttpStatus {
                url: url.to_string(),
                status,
            });
        }
        let body = response.bytes().await.map_err(fetch_err)?;
        Ok(body.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_source_from_str() {
        assert_eq!(
            "https://example.org/data.csv".parse::<DataSource>().unwrap(),
            DataSource::Url("https://example.org/data.csv".to_string())
        );
        assert_eq!(
            "http://localhost:8080/data.csv".parse::<DataSource>().unwrap(),
            DataSource::Url("http://localhost:8080/data.csv".to_string())
        );
        assert_eq!(
            "file:///tmp/data.csv".parse::<DataSource>().unwrap(),
            DataSource::File(PathBuf::from("/tmp/data.csv"))
        );
        assert_eq!(
            "data.csv".parse::<DataSource>().unwrap(),
            DataSource::File(PathBuf::from("data.csv"))
        );
    }

    #[test]
    fn test_data_source_display() {
        let url = DataSource::Url("https://example.org/data.csv".to_string());
        assert_eq!(url.to_string(), "https://example.org/data.csv");
        let file = DataSource::File(PathBuf::from("data.csv"));
        assert_eq!(file.to_string(), "data.csv");
    }

    #[tokio::test]
    async fn test_missing_file_is_fetch_error() {
        let fetcher = TextFetcher::new(Duration::from_secs(5)).unwrap();
        let source = DataSource::File(PathBuf::from("/definitely/not/here/data.csv"));
        let err = fetcher.fetch_text(&source).await.unwrap_err();
        assert!(err.is_fetch());
        assert!(!err.is_parse());
    }

    #[tokio::test]
    async fn test_invalid_utf8_file_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        std::io::Write::write_all(
            &mut file,
            b"Country Name,Country Code,Year,Value\nC\xf4te d'Ivoire,CIV,2000,100\n",
        )
        .unwrap();

        let fetcher = TextFetcher::new(Duration::from_secs(5)).unwrap();
        let source = DataSource::File(file.path().to_path_buf());
        let err = fetcher.fetch_text(&source).await.unwrap_err();
        assert!(matches!(err, DataError::InvalidUtf8 { .. }));
        assert!(err.is_parse());
        assert!(!err.is_fetch());
    }
}
