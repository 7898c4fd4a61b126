use crate::errors::DiscoverError;

/// Element id of the course index drawer the warm-up targets by default.
pub const DEFAULT_CONTAINER_ID: &str = "universe-drawers-courseindex";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoverConfig {
    /// Page holding the links.
    pub page_url: String,
    /// `id` attribute of the element whose `a[href]` descendants are collected.
    pub container_id: String,
}

impl DiscoverConfig {
    pub fn new(page_url: impl Into<String>) -> Self {
        Self {
            page_url: page_url.into(),
            container_id: DEFAULT_CONTAINER_ID.to_string(),
        }
    }

    pub fn with_container(mut self, id: impl Into<String>) -> Self {
        self.container_id = id.into();
        self
    }

    pub fn validate(&self) -> Result<(), DiscoverError> {
        url::Url::parse(&self.page_url)?;
        validate_container_id(&self.container_id)
    }
}

/// Ids are interpolated into a CSS selector, so only plain identifiers are accepted.
pub(crate) fn validate_container_id(id: &str) -> Result<(), DiscoverError> {
    let mut chars = id.chars();
    let valid = match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        }
        _ => false,
    };
    if !valid {
        return Err(DiscoverError::InvalidContainer(id.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_course_index() {
        let cfg = DiscoverConfig::new("https://lms.example/course/view.php?id=7");
        assert_eq!(cfg.container_id, DEFAULT_CONTAINER_ID);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn rejects_selector_injection() {
        for bad in ["", "1abc", "a b", "x, a", "#id", "a>b"] {
            let cfg = DiscoverConfig::new("https://lms.example/").with_container(bad);
            assert!(
                matches!(cfg.validate(), Err(DiscoverError::InvalidContainer(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_relative_page_url() {
        let cfg = DiscoverConfig::new("/course/view.php");
        assert!(matches!(cfg.validate(), Err(DiscoverError::InvalidBaseUrl(_))));
    }
}
