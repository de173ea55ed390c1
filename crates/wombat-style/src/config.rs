//! Resolver configuration.
//!
//! Loaded by the CLI from a JSON file; every field is optional there and
//! falls back to [`ResolverConfig::default`].
//!
//! ```json
//! { "default-font-family": "Serif", "default-font-size": 10, "warnings": false }
//! ```

use serde::Deserialize;
use wombat_common::warning::set_warnings_enabled;

use crate::stylesheet::Stylesheet;
use crate::values::CssFontResolver;

/// Settings for building a stylesheet and font resolver.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct ResolverConfig {
    /// Font family used when a node sets none.
    pub default_font_family: String,
    /// Font size in points used when a node sets none.
    pub default_font_size: f64,
    /// Whether stylesheets start from the built-in tag rules.
    pub default_rules: bool,
    /// Whether warnings are echoed to stderr.
    pub warnings: bool,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            default_font_family: "SansSerif".to_string(),
            default_font_size: 12.0,
            default_rules: true,
            warnings: true,
        }
    }
}

impl ResolverConfig {
    /// The font resolver for these settings.
    ///
    /// A non-positive default size is replaced by the built-in 12pt.
    #[must_use]
    pub fn font_resolver(&self) -> CssFontResolver {
        let fallback = CssFontResolver::default();
        CssFontResolver {
            default_family: if self.default_font_family.trim().is_empty() {
                fallback.default_family
            } else {
                self.default_font_family.clone()
            },
            default_size: if self.default_font_size > 0.0 {
                self.default_font_size
            } else {
                fallback.default_size
            },
        }
    }

    /// The stylesheet to resolve against: the built-in rules (unless
    /// disabled) with `user` merged on top.
    #[must_use]
    pub fn stylesheet(&self, user: Option<&Stylesheet>) -> Stylesheet {
        let mut sheet = if self.default_rules {
            Stylesheet::with_defaults()
        } else {
            Stylesheet::new()
        };
        if let Some(user) = user {
            sheet.merge(user);
        }
        sheet
    }

    /// Apply the warning setting to the process-wide warning channel.
    pub fn apply_warnings(&self) {
        set_warnings_enabled(self.warnings);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tag::Tag;

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: ResolverConfig = serde_json::from_str(r#"{ "default-font-size": 10 }"#).unwrap();
        assert_eq!(config.default_font_family, "SansSerif");
        assert!((config.default_font_size - 10.0).abs() < f64::EPSILON);
        assert!(config.default_rules);
        assert!(config.warnings);

        assert!(serde_json::from_str::<ResolverConfig>(r#"{ "font": "x" }"#).is_err());
    }

    #[test]
    fn test_font_resolver_falls_back() {
        let config = ResolverConfig {
            default_font_family: "  ".to_string(),
            default_font_size: -3.0,
            ..ResolverConfig::default()
        };
        assert_eq!(config.font_resolver(), CssFontResolver::default());

        let config = ResolverConfig {
            default_font_family: "Serif".to_string(),
            ..ResolverConfig::default()
        };
        assert_eq!(config.font_resolver().default_family, "Serif");
    }

    #[test]
    fn test_stylesheet_layers_user_rules() {
        let user = Stylesheet::parse("b { color: red }");

        let sheet = ResolverConfig::default().stylesheet(Some(&user));
        assert!(sheet.rule_for(Tag::I).is_some());
        assert!(sheet.rule_for(Tag::B).is_some_and(|rule| rule.len() == 2));

        let bare = ResolverConfig {
            default_rules: false,
            ..ResolverConfig::default()
        };
        assert_eq!(bare.stylesheet(Some(&user)), user);
        assert!(bare.stylesheet(None).is_empty());
    }
}
