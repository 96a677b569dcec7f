//! Option resolution: caller options in, complete stage options out.
//!
//! Resolution has exactly two paths. With no options at all the fixed default
//! set is used. With options, each field is taken as supplied and anything
//! left out stays unset; there is no per-field merge with the defaults. Unset
//! vectorizer parameters fall back to the vectorizer's own defaults, and an
//! unset artifact kind publishes an empty `.txt` payload.

use serde::Serialize;

use super::placeholder::{ArtifactKind, PlaceholderConfig, ShapeMode};
use crate::vectorize::VectorizeParams;

/// Options shared read-only by every file the stage processes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PipelineOptions {
    /// Number of primitive shapes
    pub primitive_count: Option<i64>,
    /// Blur standard deviation
    pub blur: Option<i64>,
    /// Primitive shape strategy
    pub shape_mode: Option<ShapeMode>,
    /// Published artifact
    pub artifact_kind: Option<ArtifactKind>,
    /// Pass the original file through after the artifact
    pub include_source: bool,
    /// Output name prefix
    pub prepend_name: String,
    /// Output name suffix
    pub append_name: String,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            primitive_count: Some(20),
            blur: Some(10),
            shape_mode: Some(ShapeMode::RotatedRect),
            artifact_kind: Some(ArtifactKind::FinalSvg),
            include_source: true,
            prepend_name: String::new(),
            append_name: String::new(),
        }
    }
}

impl PipelineOptions {
    /// Resolve caller options.
    pub fn resolve(config: Option<PlaceholderConfig>) -> Self {
        match config {
            None => Self::default(),
            Some(config) => Self::from_supplied(config),
        }
    }

    fn from_supplied(config: PlaceholderConfig) -> Self {
        let options = Self {
            primitive_count: config.primitives.as_ref().and_then(|p| p.to_count()),
            blur: config.blur,
            shape_mode: config.mode,
            artifact_kind: config.artifact_kind,
            include_source: config.include_source.resolve(),
            prepend_name: config.prepend_name.map(|a| a.0).unwrap_or_default(),
            append_name: config.append_name.map(|a| a.0).unwrap_or_default(),
        };

        let unset = options.unset_fields();
        if !unset.is_empty() {
            tracing::warn!(
                "Placeholder options leave {} unset; defaults only apply when no options are given",
                unset.join(", ")
            );
        }
        options
    }

    /// Names of fields a partial configuration left without a value.
    pub fn unset_fields(&self) -> Vec<&'static str> {
        let mut unset = Vec::new();
        if self.primitive_count.is_none() {
            unset.push("primitives");
        }
        if self.blur.is_none() {
            unset.push("blur");
        }
        if self.shape_mode.is_none() {
            unset.push("mode");
        }
        if self.artifact_kind.is_none() {
            unset.push("type");
        }
        unset
    }

    /// Whether the published artifact is raw SVG markup.
    pub fn is_final_svg(&self) -> bool {
        self.artifact_kind == Some(ArtifactKind::FinalSvg)
    }

    /// Parameters handed to the vectorizer.
    pub fn vectorize_params(&self) -> VectorizeParams {
        VectorizeParams {
            primitive_count: self.primitive_count,
            blur: self.blur,
            mode: self.shape_mode,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::placeholder::{Affix, IncludeSource, PrimitiveCount};

    #[test]
    fn test_no_config_uses_defaults() {
        let options = PipelineOptions::resolve(None);
        assert_eq!(options.blur, Some(10));
        assert_eq!(options.shape_mode, Some(ShapeMode::RotatedRect));
        assert_eq!(options.shape_mode.map(ShapeMode::code), Some(5));
        assert_eq!(options.primitive_count, Some(20));
        assert_eq!(options.artifact_kind, Some(ArtifactKind::FinalSvg));
        assert!(options.include_source);
        assert!(options.prepend_name.is_empty());
        assert!(options.append_name.is_empty());
        assert!(options.unset_fields().is_empty());
    }

    #[test]
    fn test_partial_config_is_not_merged_with_defaults() {
        let config = PlaceholderConfig {
            artifact_kind: Some(ArtifactKind::Base64Svg),
            ..Default::default()
        };
        let options = PipelineOptions::resolve(Some(config));
        assert_eq!(options.artifact_kind, Some(ArtifactKind::Base64Svg));
        assert_eq!(options.primitive_count, None);
        assert_eq!(options.blur, None);
        assert_eq!(options.shape_mode, None);
        assert_eq!(options.unset_fields(), vec!["primitives", "blur", "mode"]);
    }

    #[test]
    fn test_include_source_resolution() {
        let resolve = |flag| {
            PipelineOptions::resolve(Some(PlaceholderConfig {
                include_source: flag,
                ..Default::default()
            }))
            .include_source
        };
        assert!(resolve(IncludeSource::Unset));
        assert!(resolve(IncludeSource::Enabled));
        assert!(!resolve(IncludeSource::Disabled));
    }

    #[test]
    fn test_supplied_values_pass_through_unvalidated() {
        let config = PlaceholderConfig {
            primitives: Some(PrimitiveCount::Int(0)),
            blur: Some(-4),
            mode: Some(ShapeMode::Polygon),
            artifact_kind: Some(ArtifactKind::FinalSvg),
            include_source: IncludeSource::Disabled,
            prepend_name: Some(Affix::from("pre_")),
            append_name: Some(Affix::from("_post")),
        };
        let options = PipelineOptions::resolve(Some(config));
        let params = options.vectorize_params();
        assert_eq!(params.primitive_count, Some(0));
        assert_eq!(params.blur, Some(-4));
        assert_eq!(params.mode, Some(ShapeMode::Polygon));
        assert_eq!(options.prepend_name, "pre_");
        assert_eq!(options.append_name, "_post");
        assert!(options.is_final_svg());
    }
}
