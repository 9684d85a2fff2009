//! CSV decoding and the URL fetch channel.

use astrobib_common::Result;
use tracing::debug;

use crate::models::RawRow;

/// Decode CSV text (header row required) into raw rows.
/// Ragged rows are tolerated; rows whose cells are all empty are skipped.
pub fn parse_csv(text: &str) -> Result<Vec<RawRow>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = reader.headers()?.clone();
    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        if record.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }
        let row: RawRow = headers
            .iter()
            .zip(record.iter())
            .map(|(h, v)| (h.to_string(), v.to_string()))
            .collect();
        rows.push(row);
    }
    debug!(rows = rows.len(), "decoded CSV document");
    Ok(rows)
}

/// Fetch a CSV document from a URL. The body is returned as text; decode
/// failures surface from [`parse_csv`] at the caller.
pub async fn fetch_csv(url: &str) -> Result<String> {
    let resp = reqwest::get(url).await?.error_for_status()?;
    let text = resp.text().await?;
    debug!(url, bytes = text.len(), "downloaded CSV document");
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_header_and_rows() {
        let rows = parse_csv("Title,Link\nA study,https://x\nB study,\n").unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["Title"], "A study");
        assert_eq!(rows[0]["Link"], "https://x");
        assert_eq!(rows[1]["Link"], "");
    }

    #[test]
    fn skips_all_empty_rows() {
        let rows = parse_csv("Title,Link\n,,\nReal,\n").unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["Title"], "Real");
    }

    #[test]
    fn tolerates_ragged_rows() {
        let rows = parse_csv("Title,Link,Mission\nshort row,\n").unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["Title"], "short row");
        assert!(!rows[0].contains_key("Mission"));
    }

    #[test]
    fn header_only_is_empty() {
        assert!(parse_csv("Title,Link\n").unwrap().is_empty());
    }

    #[tokio::test]
    async fn fetch_rejects_malformed_url() {
        // fails at URL construction, before any request is sent
        assert!(fetch_csv("not a url").await.is_err());
    }
}
