use searche_probe::{
    compare_connection_modes, run_reuse_probe, run_reuse_probe_with, ProbeClient, ProbeError,
};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

mod common;

async fn mount_ok(server: &MockServer, route: &str) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
        .mount(server)
        .await;
}

#[tokio::test]
async fn alternates_targets_after_warmup() {
    let server = MockServer::start().await;
    mount_ok(&server, "/a").await;
    mount_ok(&server, "/b").await;

    let config = common::config_for(&server);
    let targets = common::targets(&server, "/a", "/b", 4);
    let report = run_reuse_probe(&config, &targets).await.unwrap();

    assert_eq!(report.warmup.url, targets.url1);
    assert_eq!(report.samples.len(), 4);
    let sampled: Vec<&str> = report.samples.iter().map(|s| s.url.as_str()).collect();
    assert_eq!(
        sampled,
        vec![
            targets.url1.as_str(),
            targets.url2.as_str(),
            targets.url1.as_str(),
            targets.url2.as_str()
        ]
    );

    // warmup + a, b, a, b
    assert_eq!(
        common::received_paths(&server).await,
        vec!["/a", "/a", "/b", "/a", "/b"]
    );
}

#[tokio::test]
async fn issues_exactly_n_timed_requests() {
    let server = MockServer::start().await;
    mount_ok(&server, "/collections").await;

    let config = common::config_for(&server);
    for n in [1, 2, 7] {
        let targets = common::targets(&server, "/collections", "/collections", n);
        let report = run_reuse_probe(&config, &targets).await.unwrap();
        assert_eq!(report.samples.len(), n, "n={}", n);
    }

    // Each run is one warmup plus n timed requests
    assert_eq!(common::received_paths(&server).await.len(), (1 + 1) + (1 + 2) + (1 + 7));
}

#[tokio::test]
async fn average_is_mean_of_timed_samples() {
    let server = MockServer::start().await;
    mount_ok(&server, "/a").await;
    mount_ok(&server, "/b").await;

    let config = common::config_for(&server);
    let targets = common::targets(&server, "/a", "/b", 5);
    let report = run_reuse_probe(&config, &targets).await.unwrap();

    let mean = report.samples.iter().map(|s| s.secs()).sum::<f64>() / 5.0;
    assert!((report.average_secs() - mean).abs() < 1e-12);
}

#[tokio::test]
async fn server_error_fails_with_request_error() {
    let server = common::spawn_failing_service().await;

    let config = common::config_for(&server);
    let targets = common::targets(&server, "/collections", "/collections", 10);
    let err = run_reuse_probe(&config, &targets).await.unwrap_err();

    assert!(err.is_request_error(), "got {:?}", err);
    assert_eq!(err.status_code(), Some(500));
    // Warmup failed, nothing else was sent
    assert_eq!(common::received_paths(&server).await.len(), 1);
}

#[tokio::test]
async fn mid_loop_failure_aborts_and_releases_client() {
    let server = MockServer::start().await;
    mount_ok(&server, "/a").await;
    Mock::given(method("GET"))
        .and(path("/b"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let config = common::config_for(&server);
    let client = ProbeClient::new(&config).unwrap();
    let releases = client.release_tracker();

    let targets = common::targets(&server, "/a", "/b", 6);
    let err = run_reuse_probe_with(client, &targets).await.unwrap_err();

    assert!(matches!(
        err,
        ProbeError::Request {
            status: Some(503),
            ..
        }
    ));
    // warmup, a, then b fails and the loop stops
    assert_eq!(common::received_paths(&server).await, vec!["/a", "/a", "/b"]);
    assert_eq!(releases.count(), 1);
}

#[tokio::test]
async fn successful_run_releases_client_once() {
    let server = MockServer::start().await;
    mount_ok(&server, "/collections").await;

    let config = common::config_for(&server);
    let client = ProbeClient::new(&config).unwrap();
    let releases = client.release_tracker();

    let targets = common::targets(&server, "/collections", "/collections", 3);
    run_reuse_probe_with(client, &targets).await.unwrap();

    assert_eq!(releases.count(), 1);
}

#[tokio::test]
async fn unreachable_service_is_request_error() {
    // Nothing listens on port 1
    let config = searche_probe::ProbeConfig::new("http://127.0.0.1:1");
    let targets = searche_probe::ReuseTargets {
        url1: "http://127.0.0.1:1/a".to_string(),
        url2: "http://127.0.0.1:1/b".to_string(),
        repetitions: 2,
    };

    let err = run_reuse_probe(&config, &targets).await.unwrap_err();
    assert!(err.is_request_error());
    assert_eq!(err.status_code(), None);
}

#[tokio::test]
async fn compares_pooled_and_fresh_connections() {
    let server = MockServer::start().await;
    mount_ok(&server, "/collections").await;

    let config = common::config_for(&server);
    let targets = common::targets(&server, "/collections", "/collections", 3);
    let comparison = compare_connection_modes(&config, &targets).await.unwrap();

    assert_eq!(comparison.pooled.samples.len(), 3);
    assert_eq!(comparison.fresh.samples.len(), 3);
    assert_eq!(common::received_paths(&server).await.len(), 8);
}
