use std::fs;
use std::io::Cursor;
use std::time::Duration;

use image::{ImageFormat, Rgb, RgbImage};
use montage_core::MontageConfig;
use montage_engine::run;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let img = RgbImage::from_pixel(width, height, Rgb([90, 120, 150]));
    let mut buffer = Vec::new();
    img.write_to(&mut Cursor::new(&mut buffer), ImageFormat::Png)
        .expect("png encode");
    buffer
}

fn test_config(server: &MockServer, output_dir: &std::path::Path) -> MontageConfig {
    MontageConfig {
        imprint: "TestMag".to_string(),
        api_base: server.uri(),
        series_workers: 4,
        cover_workers: 4,
        request_timeout: Duration::from_secs(2),
        connect_timeout: Duration::from_secs(2),
        output_dir: output_dir.to_path_buf(),
        ..MontageConfig::default()
    }
}

#[tokio::test]
async fn end_to_end_run_writes_a_montage_png() {
    montage_logging::initialize_for_tests();
    let server = MockServer::start().await;
    let output_dir = tempfile::tempdir().unwrap();

    Mock::given(method("GET"))
        .and(path("/publishers/publication"))
        .and(query_param("pubname", "TestMag"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "series_list": [
                { "series_id": 1 },
                { "series_id": 2 },
                { "series_id": 3 }
            ]
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/series/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "title": "With Cover",
            "url": "https://example.com/1",
            "image": { "url": { "original": format!("{}/covers/1.png", server.uri()) } },
            "completed": true,
            "status": "Complete"
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/series/2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "title": "Broken Cover",
            "url": "https://example.com/2",
            "image": { "url": { "original": format!("{}/covers/404.png", server.uri()) } },
            "completed": true,
            "status": "Complete"
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/series/3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "title": "Oneshot Special",
            "url": "https://example.com/3",
            "image": { "url": { "original": format!("{}/covers/3.png", server.uri()) } },
            "completed": true,
            "status": "Complete (Oneshot)"
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/covers/1.png"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(png_bytes(100, 150), "image/png"))
        .mount(&server)
        .await;
    // /covers/404.png is unmocked and returns 404, forcing a placeholder.

    let config = test_config(&server, output_dir.path());
    let summary = run(&config).await.expect("pipeline run");

    assert_eq!(summary.total_ids, 3);
    assert_eq!(summary.eligible, 2);
    assert_eq!(summary.placeholders, 1);

    let output_path = summary.output_path.expect("output written");
    assert_eq!(output_path, output_dir.path().join("TestMag.png"));

    // Covers: one fetched 100x150, one 150x218 placeholder. Cell width and
    // image band come from the largest of the two.
    let montage = image::open(&output_path).expect("decodable png").to_rgb8();
    assert_eq!(montage.width(), 150 * 2);
    assert_eq!(montage.height(), (218 + 30) + 50);
}

#[tokio::test]
async fn empty_catalog_short_circuits_without_output() {
    let server = MockServer::start().await;
    let output_dir = tempfile::tempdir().unwrap();

    Mock::given(method("GET"))
        .and(path("/publishers/publication"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "series_list": [] })))
        .mount(&server)
        .await;

    let config = test_config(&server, output_dir.path());
    let summary = run(&config).await.expect("pipeline run");

    assert_eq!(summary.total_ids, 0);
    assert_eq!(summary.output_path, None);
    let leftovers: Vec<_> = fs::read_dir(output_dir.path()).unwrap().collect();
    assert!(leftovers.is_empty(), "no file should be written");
}

#[tokio::test]
async fn unreachable_catalog_ends_quietly() {
    let server = MockServer::start().await;
    let output_dir = tempfile::tempdir().unwrap();

    Mock::given(method("GET"))
        .and(path("/publishers/publication"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let config = test_config(&server, output_dir.path());
    let summary = run(&config).await.expect("pipeline run");
    assert_eq!(summary.output_path, None);
}

#[tokio::test]
async fn all_ineligible_series_produce_no_output() {
    let server = MockServer::start().await;
    let output_dir = tempfile::tempdir().unwrap();

    Mock::given(method("GET"))
        .and(path("/publishers/publication"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "series_list": [{ "series_id": 9 }]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/series/9"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "title": "Still Running",
            "url": "https://example.com/9",
            "completed": false,
            "status": "Ongoing"
        })))
        .mount(&server)
        .await;

    let config = test_config(&server, output_dir.path());
    let summary = run(&config).await.expect("pipeline run");

    assert_eq!(summary.total_ids, 1);
    assert_eq!(summary.eligible, 0);
    assert_eq!(summary.output_path, None);
    let leftovers: Vec<_> = fs::read_dir(output_dir.path()).unwrap().collect();
    assert!(leftovers.is_empty());
}
