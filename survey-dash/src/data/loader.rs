//! Fetch-and-parse for the survey CSV.

use std::{path::PathBuf, time::Duration};

use reqwest::Client;
use tokio::time::Instant;
use tracing::{info, warn};

use crate::{
    data::table::Table,
    error::{Error, Result},
};

/// Where a dataset comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Http(String),
    File(PathBuf),
}

impl Source {
    /// `http(s)://` URLs go over the network; `file://` URLs and bare paths
    /// are read from disk.
    pub fn parse(url: &str) -> Self {
        let trimmed = url.trim();
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            Source::Http(trimmed.to_owned())
        } else if let Some(path) = trimmed.strip_prefix("file://") {
            Source::File(PathBuf::from(path))
        } else {
            Source::File(PathBuf::from(trimmed))
        }
    }
}

/// Fetches the raw CSV bytes and parses them into a table.
#[tracing::instrument(skip(timeout))]
pub async fn fetch_table(url: &str, timeout: Duration) -> Result<Table> {
    let start = Instant::now();
    let bytes = match Source::parse(url) {
        Source::Http(url) => fetch_http(&url, timeout).await?,
        Source::File(path) => tokio::fs::read(&path).await.map_err(|e| Error::Io {
            path: path.display().to_string(),
            source: e,
        })?,
    };

    let table = tokio::task::spawn_blocking(move || Table::from_csv(bytes.as_slice()))
        .await
        .map_err(|e| Error::Io {
            path: url.to_owned(),
            source: std::io::Error::other(e),
        })??;

    if table.is_empty() {
        warn!(url, "dataset parsed but has no rows");
    }
    info!(
        url,
        rows = table.len(),
        columns = table.headers().len(),
        elapsed = ?start.elapsed(),
        "dataset loaded"
    );
    Ok(table)
}

async fn fetch_http(url: &str, timeout: Duration) -> Result<Vec<u8>> {
    let http = |source| Error::Http {
        url: url.to_owned(),
        source,
    };
    let client = Client::builder().timeout(timeout).build().map_err(http)?;
    let resp = client
        .get(url)
        .send()
        .await
        .map_err(http)?
        .error_for_status()
        .map_err(http)?;
    let bytes = resp.bytes().await.map_err(http)?;
    Ok(bytes.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_source_parse() {
        assert_eq!(
            Source::parse("https://example.com/df.csv"),
            Source::Http("https://example.com/df.csv".into())
        );
        assert_eq!(
            Source::parse("file:///tmp/df.csv"),
            Source::File(PathBuf::from("/tmp/df.csv"))
        );
        assert_eq!(
            Source::parse("data/df.csv"),
            Source::File(PathBuf::from("data/df.csv"))
        );
    }

    #[tokio::test]
    async fn test_fetch_table_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "age_midpoint,smoking").unwrap();
        writeln!(file, "22.5,Yes").unwrap();
        writeln!(file, "27.5,No").unwrap();

        let url = file.path().display().to_string();
        let table = fetch_table(&url, Duration::from_secs(1)).await.unwrap();
        assert_eq!(table.len(), 2);
        assert!(table.column("smoking").is_ok());
    }

    /// A local address nothing listens on.
    fn closed_port_url() -> String {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);
        format!("http://127.0.0.1:{port}/df.csv")
    }

    #[tokio::test]
    async fn test_fetch_table_unreachable_host() {
        let url = closed_port_url();
        let err = fetch_table(&url, Duration::from_secs(2)).await.unwrap_err();
        assert!(matches!(&err, Error::Http { url: u, .. } if *u == url));
        assert!(err.is_data_source());
    }

    #[tokio::test]
    async fn test_fetch_table_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let url = dir.path().join("absent.csv").display().to_string();
        let err = fetch_table(&url, Duration::from_secs(1)).await.unwrap_err();
        assert!(err.is_data_source());
    }
}
