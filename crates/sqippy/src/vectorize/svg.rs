//! Post-processing of raw `primitive` SVG output.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use regex::Regex;
use std::sync::LazyLock;

use crate::types::ImageDimensions;

/// Id of the inserted blur filter.
pub const BLUR_FILTER_ID: &str = "b";

static SVG_OPEN_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<svg\b[^>]*>").expect("valid svg tag regex"));

static SIZE_ATTR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\s(width|height|viewBox)\s*=\s*("[^"]*"|'[^']*')"#).expect("valid attr regex")
});

static FIRST_GROUP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<g\b").expect("valid group regex"));

/// Apply source dimensions and blur to raw SVG markup.
pub fn prepare(svg: &str, dimensions: ImageDimensions, blur: i64) -> String {
    let sized = apply_dimensions(svg, dimensions);
    apply_blur(&sized, blur)
}

/// Rewrite the root `<svg>` tag so it carries the source image size.
///
/// Existing `width`, `height` and `viewBox` attributes are replaced. Markup
/// without a root tag is returned unchanged.
pub fn apply_dimensions(svg: &str, dimensions: ImageDimensions) -> String {
    let Some(tag) = SVG_OPEN_TAG.find(svg) else {
        return svg.to_string();
    };

    let stripped = SIZE_ATTR.replace_all(tag.as_str(), "");
    let (head, close) = match stripped.strip_suffix("/>") {
        Some(head) => (head, "/>"),
        None => (stripped.trim_end_matches('>'), ">"),
    };
    let ImageDimensions { width, height } = dimensions;
    let new_tag = format!(
        "{} width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\"{close}",
        head.trim_end()
    );

    let mut out = String::with_capacity(svg.len() + 48);
    out.push_str(&svg[..tag.start()]);
    out.push_str(&new_tag);
    out.push_str(&svg[tag.end()..]);
    out
}

/// Insert a gaussian blur filter and attach it to the first group.
///
/// A blur of zero (or less) leaves the markup untouched, as does markup with
/// no `<g>` element.
pub fn apply_blur(svg: &str, blur: i64) -> String {
    if blur <= 0 {
        return svg.to_string();
    }
    let Some(group) = FIRST_GROUP.find(svg) else {
        return svg.to_string();
    };

    let filter = format!(
        "<filter id=\"{BLUR_FILTER_ID}\"><feGaussianBlur stdDeviation=\"{blur}\"/></filter>"
    );
    let mut out = String::with_capacity(svg.len() + filter.len() + 24);
    out.push_str(&svg[..group.start()]);
    out.push_str(&filter);
    out.push_str(&format!("<g filter=\"url(#{BLUR_FILTER_ID})\""));
    out.push_str(&svg[group.end()..]);
    out
}

/// Base64-encode SVG markup.
pub fn encode_base64(svg: &str) -> String {
    BASE64.encode(svg.as_bytes())
}
