//! Artifact publishing: naming, content prefixing and source passthrough.

use std::path::{Path, PathBuf};

use crate::config::{ArtifactKind, PipelineOptions};
use crate::error::PipelineError;
use crate::types::{PlaceholderBundle, VirtualFile};

/// Prefix put in front of every artifact that is not raw SVG.
pub const DATA_URI_PREFIX: &str = "data:image/svg+xml;base64,";

/// Builds the output files for one processed source.
///
/// Returns the artifact followed, when `include_source` is set, by the
/// untouched source.
pub fn publish(
    source: VirtualFile,
    bundle: &PlaceholderBundle,
    options: &PipelineOptions,
) -> Result<Vec<VirtualFile>, PipelineError> {
    let payload = select_artifact(bundle, options.artifact_kind).map_err(|e| {
        PipelineError::Artifact {
            path: source.path.clone(),
            message: e.to_string(),
        }
    })?;

    let prefix = if options.is_final_svg() {
        ""
    } else {
        DATA_URI_PREFIX
    };
    let contents = format!("{prefix}{payload}").into_bytes();
    let path = artifact_path(&source.path, options);
    tracing::debug!("Artifact for {:?} -> {:?}", source.path, path);

    let artifact = source.with_output(path, contents);
    if options.include_source {
        Ok(vec![artifact, source])
    } else {
        Ok(vec![artifact])
    }
}

/// Pick the raw payload for `kind` from the bundle.
///
/// Dimensions are serialized as JSON. With no kind the payload is empty.
pub fn select_artifact(
    bundle: &PlaceholderBundle,
    kind: Option<ArtifactKind>,
) -> Result<String, serde_json::Error> {
    Ok(match kind {
        Some(ArtifactKind::FinalSvg) => bundle.final_svg.clone(),
        Some(ArtifactKind::ImageDimensions) => serde_json::to_string(&bundle.img_dimensions)?,
        Some(ArtifactKind::Base64Svg) => bundle.svg_base64.clone(),
        None => String::new(),
    })
}

/// `<dir>/<prepend><stem><append>.svg|.txt`
pub fn artifact_path(source: &Path, options: &PipelineOptions) -> PathBuf {
    let stem = source
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let extension = if options.is_final_svg() { "svg" } else { "txt" };
    let name = format!(
        "{}{}{}.{}",
        options.prepend_name, stem, options.append_name, extension
    );
    match source.parent() {
        Some(dir) => dir.join(name),
        None => PathBuf::from(name),
    }
}
