#[cfg(feature = "test-mode")]
use std::env;

/// Read the response body as text.
/// In `test-mode`, if `OXR_RECORD=1`, the body is saved as a fixture via `fixtures`.
pub(crate) fn get_text(
    resp: reqwest::blocking::Response,
    _endpoint: &str,
) -> Result<String, reqwest::Error> {
    let text = resp.text()?;

    #[cfg(feature = "test-mode")]
    {
        if env::var("OXR_RECORD").ok().as_deref() == Some("1")
            && let Err(e) = crate::core::fixtures::record_fixture(_endpoint, "json", &text)
        {
            eprintln!("OXR_RECORD: failed to write fixture for {_endpoint}: {e}");
        }
    }

    Ok(text)
}
