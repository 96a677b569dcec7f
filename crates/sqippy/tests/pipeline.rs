//! End-to-end behaviour of the placeholder stage with a fixed-bundle
//! vectorizer standing in for `primitive`.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use sqippy::config::{IncludeSource, PipelineConfig, SourceConfig};
use sqippy::pipeline::channel::{collect, spawn_stage};
use sqippy::pipeline::DATA_URI_PREFIX;
use sqippy::{
    ArtifactKind, ImageDimensions, PipelineError, PlaceholderBundle, PlaceholderConfig,
    PlaceholderStage, SourceDiscovery, StageEvent, VectorizeParams, Vectorizer, VirtualFile,
};

/// Records every call and answers with the same bundle.
#[derive(Default)]
struct FixedVectorizer {
    calls: Mutex<Vec<(PathBuf, VectorizeParams)>>,
}

impl Vectorizer for FixedVectorizer {
    fn name(&self) -> &str {
        "fixed"
    }

    fn generate(
        &self,
        path: &Path,
        params: &VectorizeParams,
    ) -> Result<PlaceholderBundle, PipelineError> {
        self.calls
            .lock()
            .unwrap()
            .push((path.to_path_buf(), *params));
        Ok(PlaceholderBundle {
            final_svg: r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 8 6"/>"#.into(),
            img_dimensions: ImageDimensions {
                width: 8,
                height: 6,
            },
            svg_base64: "PHN2Zy8+".into(),
        })
    }
}

fn paths(events: &[StageEvent]) -> Vec<PathBuf> {
    events.iter().map(|e| e.path().to_path_buf()).collect()
}

fn contents(event: &StageEvent) -> String {
    match event {
        StageEvent::File(file) => String::from_utf8(file.bytes().unwrap().to_vec()).unwrap(),
        StageEvent::Error(e) => panic!("unexpected error event: {e}"),
    }
}

async fn run(
    config: Option<PlaceholderConfig>,
    files: Vec<VirtualFile>,
) -> (Vec<StageEvent>, Arc<FixedVectorizer>) {
    let vectorizer = Arc::new(FixedVectorizer::default());
    let stage = PlaceholderStage::from_config(config, vectorizer.clone());
    let (handle, rx) = spawn_stage(stage, files, &PipelineConfig::default());
    let events = collect(rx).await;
    handle.await.unwrap().unwrap();
    (events, vectorizer)
}

#[tokio::test]
async fn default_options_emit_artifact_then_source_in_order() {
    let files = vec![
        VirtualFile::buffered("a.png", b"a".to_vec()),
        VirtualFile::buffered("b.png", b"b".to_vec()),
    ];
    let (events, vectorizer) = run(None, files).await;

    assert_eq!(
        paths(&events),
        vec![
            PathBuf::from("a.svg"),
            PathBuf::from("a.png"),
            PathBuf::from("b.svg"),
            PathBuf::from("b.png"),
        ]
    );
    assert!(contents(&events[0]).starts_with("<svg"));
    assert_eq!(contents(&events[1]), "a");

    let calls = vectorizer.calls.lock().unwrap();
    assert_eq!(calls.len(), 2);
    let params = calls[0].1;
    assert_eq!(params.primitive_count, Some(20));
    assert_eq!(params.blur, Some(10));
    assert_eq!(params.mode.map(|m| m.code()), Some(5));
}

#[tokio::test]
async fn base64_artifact_is_prefixed_txt() {
    let config = PlaceholderConfig::from_json(
        r#"{"type": "svg_base64encoded", "includeSource": false}"#,
    )
    .unwrap();
    let files = vec![VirtualFile::buffered("hero.jpg", b"x".to_vec())];
    let (events, _) = run(Some(config), files).await;

    assert_eq!(paths(&events), vec![PathBuf::from("hero.txt")]);
    assert_eq!(contents(&events[0]), format!("{DATA_URI_PREFIX}PHN2Zy8+"));
}

#[tokio::test]
async fn dimensions_artifact_is_prefixed_txt() {
    let config = PlaceholderConfig {
        artifact_kind: Some(ArtifactKind::ImageDimensions),
        include_source: IncludeSource::Disabled,
        ..Default::default()
    };
    let files = vec![VirtualFile::buffered("hero.jpg", b"x".to_vec())];
    let (events, _) = run(Some(config), files).await;

    assert_eq!(paths(&events), vec![PathBuf::from("hero.txt")]);
    assert!(contents(&events[0]).starts_with(DATA_URI_PREFIX));
    assert!(contents(&events[0]).ends_with(r#"{"width":8,"height":6}"#));
}

#[tokio::test]
async fn affixes_rename_the_artifact() {
    let config = PlaceholderConfig::from_json(
        r#"{"type": "final_svg", "prependName": "pre_", "appendName": "_post"}"#,
    )
    .unwrap();
    let (events, _) = run(
        Some(config),
        vec![VirtualFile::buffered("assets/photo.jpg", b"x".to_vec())],
    )
    .await;

    assert_eq!(
        paths(&events),
        vec![
            PathBuf::from("assets/pre_photo_post.svg"),
            PathBuf::from("assets/photo.jpg"),
        ]
    );
}

#[tokio::test]
async fn partial_options_leave_vectorizer_params_unset() {
    let config = PlaceholderConfig::from_json(r#"{"type": "final_svg"}"#).unwrap();
    let (events, vectorizer) =
        run(Some(config), vec![VirtualFile::buffered("a.png", b"a".to_vec())]).await;

    // includeSource unset still passes the source through
    assert_eq!(events.len(), 2);
    let calls = vectorizer.calls.lock().unwrap();
    assert_eq!(calls[0].1.primitive_count, None);
    assert_eq!(calls[0].1.blur, None);
    assert_eq!(calls[0].1.mode, None);
}

#[tokio::test]
async fn streaming_source_is_reported_and_skipped() {
    let files = vec![
        VirtualFile::streaming("big.png"),
        VirtualFile::buffered("small.png", b"s".to_vec()),
    ];
    let (events, vectorizer) = run(None, files).await;

    assert_eq!(events.len(), 3);
    match &events[0] {
        StageEvent::Error(err) => {
            assert_eq!(err, &PipelineError::input_shape("big.png"));
            assert!(err.to_string().contains("big.png"));
        }
        other => panic!("expected an error event, got {other:?}"),
    }
    assert_eq!(events[1].path(), Path::new("small.svg"));
    assert_eq!(vectorizer.calls.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn files_from_disk_flow_through() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("one.png"), b"1").unwrap();
    std::fs::write(dir.path().join("two.jpg"), b"2").unwrap();
    std::fs::write(dir.path().join("readme.md"), b"-").unwrap();

    let files = SourceDiscovery::new(SourceConfig::default()).load_all(dir.path());
    let (events, _) = run(None, files).await;

    assert_eq!(
        paths(&events),
        vec![
            dir.path().join("one.svg"),
            dir.path().join("one.png"),
            dir.path().join("two.svg"),
            dir.path().join("two.jpg"),
        ]
    );
}
