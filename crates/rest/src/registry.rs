//! The codec registry: content types and short-name aliases to codecs.
//!
//! The registry is an explicitly constructed configuration object — built
//! once at startup, then shared immutably into the request-handling layer.
//! Codecs are stored behind `Arc` so many keys (a canonical content type,
//! tolerated aliases, a short name) can share one instance.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;
use wireform_codec::{Codec, JsonCodec, TextCodec, XmlCodec, charset};

use crate::error::{Error, Result};
use crate::headers;

/// A resource-specific default format: either a registered name to look up
/// or a codec instance to use directly.
#[derive(Debug, Clone)]
pub enum DefaultFormat {
    /// A short name or content type resolved through the registry.
    Named(String),
    /// A codec used as-is.
    Codec(Arc<dyn Codec>),
}

/// Registry of codecs keyed by content type and short-name alias.
#[derive(Debug)]
pub struct CodecRegistry {
    codecs: HashMap<String, Arc<dyn Codec>>,
    default: Arc<dyn Codec>,
}

impl CodecRegistry {
    /// Creates an empty registry whose default codec is plain text.
    pub fn new() -> Self {
        Self {
            codecs: HashMap::new(),
            default: Arc::new(TextCodec::new()),
        }
    }

    /// Creates a registry preloaded with the built-in codecs:
    /// `text/plain` (`text`), `text/xml` (`xml`), and `application/json`
    /// (`json`) including the commonly seen JSON content-type aliases.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        let text: Arc<dyn Codec> = Arc::new(TextCodec::new());
        let xml: Arc<dyn Codec> = Arc::new(XmlCodec::new());
        let json: Arc<dyn Codec> = Arc::new(JsonCodec::new());

        let builtins: [(Arc<dyn Codec>, &str, &str); 7] = [
            (text, "text/plain", "text"),
            (xml, "text/xml", "xml"),
            (json.clone(), "application/json", "json"),
            // Be tolerant in what we receive: several non-canonical JSON
            // content types circulate among clients.
            (json.clone(), "application/x-javascript", "json"),
            (json.clone(), "text/javascript", "json"),
            (json.clone(), "text/x-javascript", "json"),
            (json, "text/x-json", "json"),
        ];
        for (codec, content_type, short_name) in builtins {
            registry
                .register(codec, content_type, Some(short_name))
                .expect("built-in codec registration is valid");
        }

        registry
    }

    /// Registers a codec under `content_type` and, when given, `short_name`.
    ///
    /// Registering under an existing key overwrites it, so tests and
    /// customizations can re-register freely.
    pub fn register(
        &mut self,
        codec: Arc<dyn Codec>,
        content_type: &str,
        short_name: Option<&str>,
    ) -> Result<()> {
        validate(codec.as_ref())?;
        if content_type.trim().is_empty() {
            return Err(Error::Configuration {
                message: "content type registration key must not be empty".to_string(),
            });
        }

        debug!(
            content_type,
            short_name,
            codec_content_type = codec.content_type(),
            "registering codec"
        );
        self.codecs.insert(content_type.to_string(), codec.clone());
        if let Some(short_name) = short_name {
            self.codecs.insert(short_name.to_string(), codec);
        }
        Ok(())
    }

    /// Installs the fallback codec used when no format signal is present.
    ///
    /// Passing `None` resets to the built-in plain-text default.
    pub fn set_default(&mut self, codec: Option<Arc<dyn Codec>>) -> Result<()> {
        match codec {
            Some(codec) => {
                validate(codec.as_ref())?;
                self.default = codec;
            }
            None => self.default = Arc::new(TextCodec::new()),
        }
        Ok(())
    }

    /// True if `name` is a registered content type or short name.
    pub fn contains(&self, name: &str) -> bool {
        self.codecs.contains_key(name)
    }

    /// Resolves a format name to a codec.
    ///
    /// An absent or empty name falls back to the resource-specific default
    /// first, then the registry default. A non-empty unknown name fails
    /// with [`Error::NotAcceptable`].
    pub fn resolve(
        &self,
        name: Option<&str>,
        fallback: Option<&DefaultFormat>,
    ) -> Result<Arc<dyn Codec>> {
        match name {
            None | Some("") => self.default_for(fallback),
            Some(name) => self.codecs.get(name).cloned().ok_or_else(|| {
                debug!(name, "unknown data format requested");
                Error::NotAcceptable {
                    message: format!("unknown data format: {}", name),
                }
            }),
        }
    }

    /// Resolves a content-type value, ignoring any charset parameter.
    pub fn resolve_by_content_type(
        &self,
        content_type: &str,
        fallback: Option<&DefaultFormat>,
    ) -> Result<Arc<dyn Codec>> {
        let essence = headers::strip_charset(content_type);
        let name = if essence.is_empty() {
            None
        } else {
            Some(essence.as_str())
        };
        self.resolve(name, fallback)
    }

    fn default_for(&self, fallback: Option<&DefaultFormat>) -> Result<Arc<dyn Codec>> {
        match fallback {
            None => Ok(self.default.clone()),
            Some(DefaultFormat::Codec(codec)) => Ok(codec.clone()),
            Some(DefaultFormat::Named(name)) => self.resolve(Some(name), None),
        }
    }
}

impl Default for CodecRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Registration-time conformance checks.
///
/// The trait already guarantees parse and format exist; what remains is
/// configuration that would otherwise fail on every request: empty declared
/// content type or charset, or a charset the charset primitives cannot
/// encode.
fn validate(codec: &dyn Codec) -> Result<()> {
    if codec.content_type().trim().is_empty() {
        return Err(Error::Configuration {
            message: "codec must declare a content type".to_string(),
        });
    }
    if codec.charset().trim().is_empty() {
        return Err(Error::Configuration {
            message: "codec must declare a charset".to_string(),
        });
    }
    if !charset::is_supported(codec.charset()) {
        return Err(Error::Configuration {
            message: format!("codec declares unsupported charset: {}", codec.charset()),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use wireform_codec::DecimalJsonCodec;

    #[test]
    fn test_resolve_by_short_name_and_content_type() {
        let registry = CodecRegistry::with_defaults();
        let by_name = registry.resolve(Some("json"), None).unwrap();
        let by_type = registry.resolve(Some("application/json"), None).unwrap();
        assert_eq!(by_name.content_type(), "application/json");
        assert!(Arc::ptr_eq(&by_name, &by_type));
    }

    #[test]
    fn test_json_aliases_share_one_codec() {
        let registry = CodecRegistry::with_defaults();
        let canonical = registry.resolve(Some("application/json"), None).unwrap();
        for alias in [
            "application/x-javascript",
            "text/javascript",
            "text/x-javascript",
            "text/x-json",
        ] {
            let resolved = registry.resolve(Some(alias), None).unwrap();
            assert!(Arc::ptr_eq(&canonical, &resolved), "alias {}", alias);
        }
    }

    #[test]
    fn test_unknown_name_is_not_acceptable() {
        let registry = CodecRegistry::with_defaults();
        let err = registry.resolve(Some("vnd.nonexistent"), None).unwrap_err();
        assert!(matches!(err, Error::NotAcceptable { .. }));
        assert!(err.to_string().contains("vnd.nonexistent"));
    }

    #[test]
    fn test_absent_name_falls_back_to_default() {
        let registry = CodecRegistry::with_defaults();
        let codec = registry.resolve(None, None).unwrap();
        assert_eq!(codec.content_type(), "text/plain");
        let codec = registry.resolve(Some(""), None).unwrap();
        assert_eq!(codec.content_type(), "text/plain");
    }

    #[test]
    fn test_resource_default_beats_registry_default() {
        let registry = CodecRegistry::with_defaults();
        let named = DefaultFormat::Named("json".to_string());
        let codec = registry.resolve(None, Some(&named)).unwrap();
        assert_eq!(codec.content_type(), "application/json");

        let instance = DefaultFormat::Codec(Arc::new(DecimalJsonCodec::new()));
        let codec = registry.resolve(None, Some(&instance)).unwrap();
        assert_eq!(codec.content_type(), "application/json");
    }

    #[test]
    fn test_set_default_and_reset() {
        let mut registry = CodecRegistry::new();
        registry
            .set_default(Some(Arc::new(JsonCodec::new())))
            .unwrap();
        assert_eq!(registry.resolve(None, None).unwrap().content_type(), "application/json");

        registry.set_default(None).unwrap();
        assert_eq!(registry.resolve(None, None).unwrap().content_type(), "text/plain");
    }

    #[test]
    fn test_reregistration_overwrites() {
        let mut registry = CodecRegistry::with_defaults();
        let before = registry.resolve(Some("json"), None).unwrap();
        registry
            .register(Arc::new(DecimalJsonCodec::new()), "application/json", Some("json"))
            .unwrap();
        let after = registry.resolve(Some("json"), None).unwrap();
        assert!(!Arc::ptr_eq(&before, &after));
        assert_eq!(after.content_type(), "application/json");
    }

    #[test]
    fn test_empty_registration_key_is_configuration_error() {
        let mut registry = CodecRegistry::new();
        let err = registry
            .register(Arc::new(JsonCodec::new()), "  ", None)
            .unwrap_err();
        assert!(matches!(err, Error::Configuration { .. }));
    }

    #[test]
    fn test_unsupported_codec_charset_is_configuration_error() {
        let mut registry = CodecRegistry::new();
        let err = registry
            .register(
                Arc::new(JsonCodec::with_charset("koi8-r")),
                "application/json",
                None,
            )
            .unwrap_err();
        assert!(matches!(err, Error::Configuration { .. }));
    }

    #[test]
    fn test_resolve_by_content_type_strips_charset() {
        let registry = CodecRegistry::with_defaults();
        let codec = registry
            .resolve_by_content_type("application/json; charset=utf-8", None)
            .unwrap();
        assert_eq!(codec.content_type(), "application/json");
    }
}
