/// Order data loading
///
/// This module handles:
/// - Reading the order data document from a local file
/// - Fetching it over HTTP(S) with a single GET
/// - Parsing and consistency-checking the result
///
/// Any failure here is fatal for the tool: nothing else is initialized
/// without a dataset.

use crate::config::DataSource;
use crate::dataset::Dataset;
use log::debug;
use std::fs;

const USER_AGENT: &str = concat!("order-lookup/", env!("CARGO_PKG_VERSION"));

/// Fetch a text document, requiring a 2xx response
pub fn http_get_text(url: &str) -> Result<String, String> {
    debug!("GET {}", url);
    let resp = match ureq::get(url).set("User-Agent", USER_AGENT).call() {
        Ok(resp) => resp,
        Err(ureq::Error::Status(code, _)) => {
            return Err(format!("Server responded with status {} for {}", code, url));
        }
        Err(e) => return Err(format!("Request to {} failed: {}", url, e)),
    };

    if !(200..300).contains(&resp.status()) {
        return Err(format!("Server responded with status {} for {}", resp.status(), url));
    }

    resp.into_string().map_err(|e| format!("Failed to read response from {}: {}", url, e))
}

/// Read the raw document from its source
pub fn read_source(source: &DataSource) -> Result<String, String> {
    match source {
        DataSource::File(path) => {
            debug!("reading order data from {}", path.display());
            fs::read_to_string(path).map_err(|e| format!("Failed to read {}: {}", path.display(), e))
        }
        DataSource::Url(url) => http_get_text(url),
    }
}

/// Load, parse and validate the dataset
pub fn load_dataset(source: &DataSource) -> Result<Dataset, String> {
    let text = read_source(source)?;
    let dataset = Dataset::from_json(&text)?;
    dataset.validate()?;
    debug!("order data loaded from {}", source);
    Ok(dataset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{BufRead, BufReader, Write};
    use std::net::TcpListener;
    use std::path::PathBuf;
    use std::thread;

    #[test]
    fn test_load_from_file() {
        let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("test-data/orderData.json");
        let dataset = load_dataset(&DataSource::File(path)).unwrap();
        assert_eq!(dataset.factors.len(), 10);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");
        let err = load_dataset(&DataSource::File(path)).unwrap_err();
        assert!(err.starts_with("Failed to read"), "unexpected message: {}", err);
    }

    #[test]
    fn test_inconsistent_file_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "factors": {{ "1": {{ "name": "x", "examinations": ["e9"] }} }} }}"#).unwrap();
        let err = load_dataset(&DataSource::File(file.path().to_path_buf())).unwrap_err();
        assert!(err.contains("e9"));
    }

    #[test]
    fn test_malformed_file_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[1, 2, 3]").unwrap();
        let err = load_dataset(&DataSource::File(file.path().to_path_buf())).unwrap_err();
        assert!(err.starts_with("Failed to parse order data"));
    }

    // Serve a single canned HTTP response on a local port
    fn serve_once(status: &str, body: &str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );

        thread::spawn(move || {
            let (stream, _) = listener.accept().unwrap();
            let mut reader = BufReader::new(stream.try_clone().unwrap());
            let mut line = String::new();
            while reader.read_line(&mut line).unwrap() > 0 {
                if line == "\r\n" {
                    break;
                }
                line.clear();
            }
            let mut stream = stream;
            stream.write_all(response.as_bytes()).unwrap();
        });

        format!("http://{}/orderData.json", addr)
    }

    #[test]
    fn test_load_from_url() {
        let url = serve_once("200 OK", include_str!("../test-data/orderData.json"));
        let dataset = load_dataset(&DataSource::Url(url)).unwrap();
        assert_eq!(dataset.factors.len(), 10);
    }

    #[test]
    fn test_url_error_status_is_fatal() {
        let url = serve_once("404 Not Found", "{}");
        let err = load_dataset(&DataSource::Url(url.clone())).unwrap_err();
        assert_eq!(err, format!("Server responded with status 404 for {}", url));
    }

    #[test]
    fn test_unreachable_url_is_fatal() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}/orderData.json", listener.local_addr().unwrap());
        drop(listener);

        let err = load_dataset(&DataSource::Url(url.clone())).unwrap_err();
        assert!(err.starts_with(&format!("Request to {} failed", url)), "unexpected message: {}", err);
    }

    #[test]
    #[ignore] // Requires network access
    fn test_http_get_not_found() {
        let err = http_get_text("https://httpbin.org/status/404").unwrap_err();
        assert!(err.contains("404"));
    }
}
