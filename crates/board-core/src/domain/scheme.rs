//! Color Scheme Preference

/// Light or dark presentation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

impl ColorScheme {
    pub fn from_dark(dark: bool) -> Self {
        if dark { ColorScheme::Dark } else { ColorScheme::Light }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, ColorScheme::Dark)
    }

    pub fn toggled(&self) -> Self {
        match self {
            ColorScheme::Light => ColorScheme::Dark,
            ColorScheme::Dark => ColorScheme::Light,
        }
    }

    /// Startup value: stored preference, then the environment's hint, then light
    pub fn resolve(persisted: Option<bool>, prefers_dark: Option<bool>) -> Self {
        persisted
            .or(prefers_dark)
            .map(Self::from_dark)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_order() {
        assert_eq!(ColorScheme::resolve(Some(false), Some(true)), ColorScheme::Light);
        assert_eq!(ColorScheme::resolve(Some(true), None), ColorScheme::Dark);
        assert_eq!(ColorScheme::resolve(None, Some(true)), ColorScheme::Dark);
        assert_eq!(ColorScheme::resolve(None, None), ColorScheme::Light);
    }

    #[test]
    fn test_toggle() {
        assert_eq!(ColorScheme::Light.toggled(), ColorScheme::Dark);
        assert!(!ColorScheme::Dark.toggled().is_dark());
    }
}
