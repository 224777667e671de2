//! Loading the hierarchy document from disk or over HTTP.

use url::Url;

use crate::error::HierarchyError;
use crate::hierarchy::parser::parse_document;
use crate::hierarchy::HierarchyNode;

/// Whether `source` names an http(s) URL rather than a file path.
pub fn is_remote(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

/// Read the raw document text behind `source` (blocking).
pub fn read_source(source: &str) -> Result<String, HierarchyError> {
    if is_remote(source) {
        let url = Url::parse(source).map_err(|e| HierarchyError::Fetch {
            message: format!("Invalid URL: {}", e),
        })?;
        fetch_text(&url)
    } else {
        Ok(std::fs::read_to_string(source)?)
    }
}

/// Read and parse the document behind `source`.
pub fn load_document(source: &str) -> Result<HierarchyNode, HierarchyError> {
    log::info!("loading hierarchy from {}", source);
    let text = read_source(source)?;
    parse_document(&text)
}

#[cfg(feature = "remote")]
fn fetch_text(url: &Url) -> Result<String, HierarchyError> {
    let client = reqwest::blocking::Client::builder()
        .user_agent(concat!("sunburst-drill/", env!("CARGO_PKG_VERSION")))
        .timeout(std::time::Duration::from_secs(15))
        .build()
        .map_err(|e| HierarchyError::Fetch {
            message: format!("Client error: {}", e),
        })?;

    let response = client
        .get(url.as_str())
        .header("Accept", "application/json")
        .send()
        .map_err(|e| HierarchyError::Fetch {
            message: format!("Request failed: {}", e),
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(HierarchyError::Fetch {
            message: format!("HTTP {} for {}", status.as_u16(), url),
        });
    }

    response.text().map_err(|e| HierarchyError::Fetch {
        message: format!("Failed to read body: {}", e),
    })
}

#[cfg(not(feature = "remote"))]
fn fetch_text(url: &Url) -> Result<String, HierarchyError> {
    Err(HierarchyError::Fetch {
        message: format!("remote loading is disabled, cannot fetch {}", url),
    })
}
