use thiserror::Error;
use url::Url;

pub const APP_TITLE: &str = "Mod 10 Study Buddy";

/// Banner shown above every quiz.
pub const TRAINING_DISCLAIMER: &str = "Disclaimer: This app is for training purposes only. \
All information must be verified with official GCAA publications.";

/// Body of the About page.
pub const ABOUT_NOTICE: &str = "Important Notice: This tool is intended for training and \
self-study purposes only. It is not an official source of GCAA regulations, requirements, or \
policy. All users must refer to the latest official GCAA publications and regulatory documents \
for accurate and current information.";

const REGULATOR_URL: &str = "https://www.gcaa.gov.ae/en/pages/default.aspx";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LinkError {
    #[error("invalid link url {raw:?}: {reason}")]
    InvalidUrl { raw: String, reason: String },

    #[error("only http(s) links can be opened, got {scheme}")]
    UnsupportedScheme { scheme: String },
}

/// An outbound link to an external website.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalLink {
    title: String,
    description: String,
    url: Url,
}

impl ExternalLink {
    /// # Errors
    ///
    /// Returns `LinkError` if `raw_url` does not parse or is not http(s).
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        raw_url: &str,
    ) -> Result<Self, LinkError> {
        let url = Url::parse(raw_url).map_err(|e| LinkError::InvalidUrl {
            raw: raw_url.to_string(),
            reason: e.to_string(),
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(LinkError::UnsupportedScheme {
                scheme: url.scheme().to_string(),
            });
        }
        Ok(Self {
            title: title.into(),
            description: description.into(),
            url,
        })
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn url(&self) -> &Url {
        &self.url
    }
}

/// The General Civil Aviation Authority website.
///
/// # Panics
///
/// Panics if the built-in regulator URL is not a valid https URL.
#[must_use]
pub fn regulator_link() -> ExternalLink {
    ExternalLink::new(
        "General Civil Aviation Authority (UAE)",
        "Visit the official GCAA website for up-to-date regulatory documents, \
         safety publications, and contact information.",
        REGULATOR_URL,
    )
    .expect("built-in regulator url should be valid")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regulator_link_is_https() {
        let link = regulator_link();
        assert_eq!(link.url().scheme(), "https");
        assert_eq!(link.url().host_str(), Some("www.gcaa.gov.ae"));
    }

    #[test]
    fn non_web_links_are_rejected() {
        let err = ExternalLink::new("x", "y", "file:///etc/passwd").unwrap_err();
        assert!(matches!(err, LinkError::UnsupportedScheme { .. }));
        let err = ExternalLink::new("x", "y", "not a url").unwrap_err();
        assert!(matches!(err, LinkError::InvalidUrl { .. }));
    }
}
