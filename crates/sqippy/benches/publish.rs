//! Benchmarks for artifact publishing and SVG post-processing.
//!
//! Run with: cargo bench -p sqippy

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sqippy::config::ArtifactKind;
use sqippy::pipeline::publish;
use sqippy::vectorize::svg;
use sqippy::{ImageDimensions, PipelineOptions, PlaceholderBundle, VirtualFile};

fn sample_svg() -> String {
    let mut svg = String::from(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="256" height="171"><rect width="100%" height="100%" fill="#7a8b5c"/><g fill-opacity=".5">"##,
    );
    for i in 0..20 {
        svg.push_str(&format!(
            r##"<path fill="#2e3a1f" d="M{i} 0L{} 40 {} 80z"/>"##,
            i * 3,
            i * 5
        ));
    }
    svg.push_str("</g></svg>");
    svg
}

fn benchmark_prepare_svg(c: &mut Criterion) {
    let raw = sample_svg();
    let dims = ImageDimensions {
        width: 1920,
        height: 1280,
    };

    c.bench_function("svg_prepare", |b| {
        b.iter(|| svg::prepare(black_box(&raw), dims, 10))
    });
}

fn benchmark_publish(c: &mut Criterion) {
    let final_svg = svg::prepare(
        &sample_svg(),
        ImageDimensions {
            width: 1920,
            height: 1280,
        },
        10,
    );
    let bundle = PlaceholderBundle {
        svg_base64: svg::encode_base64(&final_svg),
        final_svg,
        img_dimensions: ImageDimensions {
            width: 1920,
            height: 1280,
        },
    };
    let source = VirtualFile::buffered("assets/photo.jpg", vec![0u8; 512 * 1024]);

    for kind in [ArtifactKind::FinalSvg, ArtifactKind::Base64Svg] {
        let options = PipelineOptions {
            artifact_kind: Some(kind),
            ..PipelineOptions::default()
        };
        c.bench_function(&format!("publish_{kind}"), |b| {
            b.iter(|| publish(black_box(source.clone()), &bundle, &options))
        });
    }
}

criterion_group!(benches, benchmark_prepare_svg, benchmark_publish);
criterion_main!(benches);
