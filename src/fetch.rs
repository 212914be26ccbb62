use crate::error::PagegrabError;

/// Trims the raw URL bar text. `None` means there is nothing to fetch.
pub fn validate_url(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Issues a single GET and returns the body as text. Non-2xx statuses are
/// errors; decoding is whatever `text()` decides from the response headers.
pub async fn fetch_page(url: &str) -> Result<String, PagegrabError> {
    let response = reqwest::get(url).await?.error_for_status()?;
    let body = response.text().await?;
    tracing::debug!("fetched {} bytes from {}", body.len(), url);
    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_input() {
        assert_eq!(validate_url(""), None);
        assert_eq!(validate_url("   \t\n"), None);
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(
            validate_url("  https://example.com \n").as_deref(),
            Some("https://example.com")
        );
    }
}
