// src/content/fetch.rs
use super::decode::{decode_row_objects, decode_table, DecodeError, SheetRow};
use super::{default_content, merge_overrides, ContentMap};
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use std::time::Duration;
use tracing::{debug, info, warn};

const ROWS_API_BASE: &str = "https://gsx2json.com";
const TABLE_API_BASE: &str = "https://docs.google.com";

// Sheet tabs get renamed by editors; try the usual naming variants in order,
// ending with the unnamed/default request.
const SHEET_NAME_CANDIDATES: [&str; 5] = ["Sheet1", "Sheet 1", "Sheet", "1", ""];

/// Which remote strategy produced a response. Decides the decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transport {
    RowObjects { sheet: &'static str },
    Table,
}

impl Transport {
    fn describe(&self) -> String {
        match self {
            Transport::RowObjects { sheet: "" } => "rows-api (default sheet)".to_string(),
            Transport::RowObjects { sheet } => format!("rows-api (sheet: {})", sheet),
            Transport::Table => "gviz table".to_string(),
        }
    }
}

/// Why a fetch produced no overrides. Internal taxonomy only: every variant
/// collapses to the default content at the `fetch` boundary.
#[derive(Debug)]
pub enum FetchFailure {
    /// No candidate on either transport returned a success status.
    Transport,
    Parse(DecodeError),
    /// Well-formed response, but zero usable rows after filtering.
    EmptyRows,
}

impl fmt::Display for FetchFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchFailure::Transport => write!(f, "all transports failed"),
            FetchFailure::Parse(e) => write!(f, "parse failed: {}", e),
            FetchFailure::EmptyRows => write!(f, "no usable rows in sheet"),
        }
    }
}

/// Diagnostic result of a single probe of the remote source, surfaced by the
/// content-status endpoint.
#[derive(Debug, Serialize)]
pub struct ProbeReport {
    pub ok: bool,
    pub method: Option<String>,
    pub row_count: Option<usize>,
    pub usable_rows: Option<usize>,
    pub error: Option<String>,
}

/// Fetches editable page copy from the spreadsheet source.
///
/// The public `fetch` entry point never fails: every failure mode degrades
/// to the hardcoded defaults so the page always has copy to render.
pub struct ContentFetcher {
    client: reqwest::Client,
    timeout: Duration,
    rows_api_base: String,
    table_api_base: String,
}

impl ContentFetcher {
    pub fn new(timeout: Duration) -> Self {
        Self::with_endpoints(timeout, ROWS_API_BASE.to_string(), TABLE_API_BASE.to_string())
    }

    /// Endpoint bases are parameterizable so tests can point the fetcher at
    /// loopback servers.
    pub fn with_endpoints(timeout: Duration, rows_api_base: String, table_api_base: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            timeout,
            rows_api_base,
            table_api_base,
        }
    }

    /// Produce the complete content map for a render. With no sheet
    /// configured this is the defaults with no network attempt; otherwise
    /// remote overrides are merged on top, and any failure along the way
    /// falls back to the defaults unchanged.
    pub async fn fetch(&self, sheet_id: Option<&str>) -> ContentMap {
        let Some(id) = sheet_id.filter(|s| !s.is_empty()) else {
            debug!("no sheet id configured, using default content");
            return default_content();
        };

        match self.fetch_overrides(id).await {
            Ok(overrides) => {
                info!(overrides = overrides.len(), "content loaded from sheet");
                merge_overrides(overrides)
            }
            Err(failure) => {
                warn!(%failure, "content fetch degraded to defaults");
                default_content()
            }
        }
    }

    /// The fallible inner pipeline: transport, decode, filter. Kept separate
    /// from `fetch` so the always-defaults policy lives in exactly one place.
    async fn fetch_overrides(&self, sheet_id: &str) -> Result<HashMap<String, String>, FetchFailure> {
        let (transport, body) = self.fetch_raw(sheet_id).await.ok_or(FetchFailure::Transport)?;

        let rows = match transport {
            Transport::RowObjects { .. } => decode_row_objects(&body),
            Transport::Table => decode_table(&body),
        }
        .map_err(FetchFailure::Parse)?;

        let overrides = build_override_map(rows);
        if overrides.is_empty() {
            return Err(FetchFailure::EmptyRows);
        }
        Ok(overrides)
    }

    /// Try each transport strictly in order, stopping at the first
    /// success-status response. Returns the raw body along with which
    /// transport produced it.
    async fn fetch_raw(&self, sheet_id: &str) -> Option<(Transport, String)> {
        for sheet in SHEET_NAME_CANDIDATES {
            let url = if sheet.is_empty() {
                format!("{}/api?id={}", self.rows_api_base, sheet_id)
            } else {
                format!(
                    "{}/api?id={}&sheet={}",
                    self.rows_api_base,
                    sheet_id,
                    urlencoding::encode(sheet)
                )
            };

            if let Some(body) = self.try_get(&url).await {
                return Some((Transport::RowObjects { sheet }, body));
            }
        }

        let url = format!(
            "{}/spreadsheets/d/{}/gviz/tq?tqx=out:json",
            self.table_api_base, sheet_id
        );
        self.try_get(&url).await.map(|body| (Transport::Table, body))
    }

    async fn try_get(&self, url: &str) -> Option<String> {
        let response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .timeout(self.timeout)
            .send()
            .await;

        match response {
            Ok(resp) if resp.status().is_success() => match resp.text().await {
                Ok(body) => Some(body),
                Err(e) => {
                    debug!(url, error = %e, "failed reading response body");
                    None
                }
            },
            Ok(resp) => {
                debug!(url, status = %resp.status(), "candidate rejected");
                None
            }
            Err(e) => {
                debug!(url, error = %e, "candidate unreachable");
                None
            }
        }
    }

    /// One-shot diagnostic pass for the status endpoint. Same transport and
    /// decode path as `fetch_overrides`, but reports what happened instead of
    /// collapsing to defaults.
    pub async fn probe(&self, sheet_id: &str) -> ProbeReport {
        let Some((transport, body)) = self.fetch_raw(sheet_id).await else {
            return ProbeReport {
                ok: false,
                method: None,
                row_count: None,
                usable_rows: None,
                error: Some(FetchFailure::Transport.to_string()),
            };
        };

        let decoded = match transport {
            Transport::RowObjects { .. } => decode_row_objects(&body),
            Transport::Table => decode_table(&body),
        };

        match decoded {
            Ok(rows) => {
                let usable = build_override_map(rows.clone()).len();
                ProbeReport {
                    ok: usable > 0,
                    method: Some(transport.describe()),
                    row_count: Some(rows.len()),
                    usable_rows: Some(usable),
                    error: (usable == 0).then(|| FetchFailure::EmptyRows.to_string()),
                }
            }
            Err(e) => ProbeReport {
                ok: false,
                method: Some(transport.describe()),
                row_count: None,
                usable_rows: None,
                error: Some(FetchFailure::Parse(e).to_string()),
            },
        }
    }
}

/// Filter row candidates into the override map: both key and value must be
/// non-empty. Rejected rows are skipped, never fatal. Later rows win on
/// duplicate keys, matching last-write-wins in the sheet.
fn build_override_map(rows: Vec<SheetRow>) -> HashMap<String, String> {
    rows.into_iter()
        .filter(|row| !row.key.is_empty() && !row.value.is_empty())
        .map(|row| (row.key, row.value))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::Query;
    use axum::http::StatusCode;
    use axum::routing::get;
    use axum::Router;
    use std::collections::HashMap as Params;

    async fn serve(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn fetcher(base: &str) -> ContentFetcher {
        ContentFetcher::with_endpoints(Duration::from_secs(2), base.to_string(), base.to_string())
    }

    #[tokio::test]
    async fn missing_sheet_id_returns_defaults_without_network() {
        let fetcher = fetcher("http://127.0.0.1:1"); // nothing listening
        assert_eq!(fetcher.fetch(None).await, default_content());
        assert_eq!(fetcher.fetch(Some("")).await, default_content());
    }

    #[tokio::test]
    async fn row_objects_transport_overrides_defaults() {
        let app = Router::new().route(
            "/api",
            get(|| async { r#"{"rows":[{"key":"heroTitle","value":"X"}]}"# }),
        );
        let base = serve(app).await;

        let content = fetcher(&base).fetch(Some("sheet-123")).await;
        assert_eq!(content.get("heroTitle").map(String::as_str), Some("X"));
        // Everything else still at defaults
        assert_eq!(
            content.get("impact1").map(String::as_str),
            Some("Personalized Mentorship")
        );
        assert_eq!(content.len(), default_content().len());
    }

    #[tokio::test]
    async fn sheet_name_candidates_are_tried_in_order() {
        // Only the second naming variant ("Sheet 1") exists on this server.
        let app = Router::new().route(
            "/api",
            get(|Query(params): Query<Params<String, String>>| async move {
                if params.get("sheet").map(String::as_str) == Some("Sheet 1") {
                    (StatusCode::OK, r#"{"rows":[{"key":"heroTitle","value":"named"}]}"#)
                } else {
                    (StatusCode::NOT_FOUND, "")
                }
            }),
        );
        let base = serve(app).await;

        let content = fetcher(&base).fetch(Some("abc")).await;
        assert_eq!(content.get("heroTitle").map(String::as_str), Some("named"));
    }

    #[tokio::test]
    async fn falls_back_to_table_transport() {
        let app = Router::new()
            .route("/api", get(|| async { StatusCode::NOT_FOUND }))
            .route(
                "/spreadsheets/d/:id/gviz/tq",
                get(|| async {
                    concat!(
                        "/*O_o*/\ngoogle.visualization.Query.setResponse(",
                        r#"{"table":{"rows":[{"c":[{"v":"heroTitle"},{"v":"Y"}]}]}}"#,
                        ");"
                    )
                }),
            );
        let base = serve(app).await;

        let content = fetcher(&base).fetch(Some("abc")).await;
        assert_eq!(content.get("heroTitle").map(String::as_str), Some("Y"));
    }

    #[tokio::test]
    async fn all_transports_failing_returns_defaults() {
        let app = Router::new()
            .route("/api", get(|| async { StatusCode::INTERNAL_SERVER_ERROR }))
            .route(
                "/spreadsheets/d/:id/gviz/tq",
                get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
            );
        let base = serve(app).await;

        assert_eq!(fetcher(&base).fetch(Some("abc")).await, default_content());
    }

    #[tokio::test]
    async fn zero_usable_rows_returns_defaults() {
        let app = Router::new().route(
            "/api",
            get(|| async { r#"{"rows":[{"key":"","value":"x"},{"key":"k","value":""}]}"# }),
        );
        let base = serve(app).await;
        let f = fetcher(&base);

        assert!(matches!(
            f.fetch_overrides("abc").await,
            Err(FetchFailure::EmptyRows)
        ));
        assert_eq!(f.fetch(Some("abc")).await, default_content());
    }

    #[tokio::test]
    async fn truncated_success_body_returns_defaults() {
        // Success status, garbage body: ParseFailure, not a retry of the
        // other transport.
        let app = Router::new().route("/api", get(|| async { r#"{"rows":[{"key""# }));
        let base = serve(app).await;
        let f = fetcher(&base);

        assert!(matches!(
            f.fetch_overrides("abc").await,
            Err(FetchFailure::Parse(_))
        ));
        assert_eq!(f.fetch(Some("abc")).await, default_content());
    }

    #[tokio::test]
    async fn probe_reports_transport_and_row_counts() {
        let app = Router::new().route(
            "/api",
            get(|| async { r#"{"rows":[{"key":"a","value":"1"},{"value":"x"}]}"# }),
        );
        let base = serve(app).await;

        let report = fetcher(&base).probe("abc").await;
        assert!(report.ok);
        assert_eq!(report.row_count, Some(1)); // partial row dropped at decode
        assert_eq!(report.usable_rows, Some(1));
        assert!(report.error.is_none());
    }

    #[test]
    fn filter_drops_empty_keys_and_values() {
        let rows = vec![
            SheetRow { key: "".into(), value: "v".into() },
            SheetRow { key: "k".into(), value: "".into() },
            SheetRow { key: "keep".into(), value: "yes".into() },
        ];
        let map = build_override_map(rows);
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("keep").map(String::as_str), Some("yes"));
    }
}
