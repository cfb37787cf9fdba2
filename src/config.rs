//! Render context configuration.

// ---------------------------------------------------------------------------
// ContextConfig
// ---------------------------------------------------------------------------

/// Configuration for a [`RenderContext`](crate::render::RenderContext).
#[derive(Debug, Clone, PartialEq)]
pub struct ContextConfig {
    /// Name used in diagnostics.
    pub name: String,
    /// Device pixels per density-independent pixel.
    pub dp_ratio: f32,
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self {
            name: String::from("main"),
            dp_ratio: 1.0,
        }
    }
}

impl ContextConfig {
    /// Create a new default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the context name (builder).
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the density-independent pixel ratio (builder).
    ///
    /// Non-finite or non-positive ratios fall back to 1.0.
    pub fn with_dp_ratio(mut self, ratio: f32) -> Self {
        self.dp_ratio = if ratio.is_finite() && ratio > 0.0 { ratio } else { 1.0 };
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ContextConfig::new();
        assert_eq!(config.name, "main");
        assert_eq!(config.dp_ratio, 1.0);
    }

    #[test]
    fn builders() {
        let config = ContextConfig::new().with_name("hud").with_dp_ratio(2.0);
        assert_eq!(config.name, "hud");
        assert_eq!(config.dp_ratio, 2.0);
    }

    #[test]
    fn invalid_ratio_falls_back() {
        assert_eq!(ContextConfig::new().with_dp_ratio(0.0).dp_ratio, 1.0);
        assert_eq!(ContextConfig::new().with_dp_ratio(f32::NAN).dp_ratio, 1.0);
    }
}
