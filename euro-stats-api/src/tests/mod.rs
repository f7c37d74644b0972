use std::time::Duration;

use scraper::Html;
use wiremock::matchers::{header_regex, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::models::players::PlayerRecord;
use crate::view::{self, GroupSelection};
use crate::{document, export, load, load_cached, stats, Error, Snapshot, SnapshotCache, SourceConfig};

const STANDINGS_HTML: &'static str = include_str!("../../test-data/standings.html");
const PAGE_PATH: &'static str = "/football/euro-2024";

fn fixture_snapshot() -> Snapshot {
    let html = document::parse(STANDINGS_HTML.as_bytes()).unwrap();
    Snapshot::from_html("fixture", &html)
}

fn local_config(base: &str) -> SourceConfig {
    SourceConfig::default()
        .with_url(format!("{}{}", base, PAGE_PATH))
        .with_timeout(Duration::from_secs(5))
}

/// Mounts the standings page, answered only for a browser user agent.
async fn standings_server(status: u16, body: &str) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(PAGE_PATH))
        .and(header_regex("user-agent", "^Mozilla/5\\.0 .*Chrome/"))
        .respond_with(
            ResponseTemplate::new(status)
                .insert_header("content-type", "text/html; charset=utf-8")
                .set_body_string(body),
        )
        .mount(&server)
        .await;
    server
}

/// The fetcher is blocking, so it runs off the async test runtime.
async fn load_blocking(config: SourceConfig) -> crate::Result<Snapshot> {
    tokio::task::spawn_blocking(move || load(&config)).await.unwrap()
}

#[test]
fn test_fixture_players() {
    let snapshot = fixture_snapshot();

    assert_eq!(snapshot.players.len(), 8);
    assert_eq!(snapshot.players.dropped, 1);
    assert_eq!(
        snapshot.players.records[1],
        PlayerRecord {
            name: "Georges Mikautadze".to_string(),
            country: "Georgia".to_string(),
            goals: Some(3),
        }
    );

    let havertz = snapshot.players.records.iter().find(|p| p.name == "Kai Havertz").unwrap();
    assert_eq!(havertz.goals, Some(2));
    let wirtz = snapshot.players.records.iter().find(|p| p.name == "Florian Wirtz").unwrap();
    assert_eq!(wirtz.goals, None);
}

#[test]
fn test_fixture_country_goals() {
    let snapshot = fixture_snapshot();
    let players = &snapshot.players.records;
    let countries = view::unique_countries(players);

    assert_eq!(
        countries,
        vec!["England", "Georgia", "Germany", "Netherlands", "Slovakia", "Spain"]
    );

    let goals = stats::sum_goals_by_country(players, &countries);
    assert_eq!(goals.by_country["Germany"], 5);
    assert_eq!(goals.by_country["Spain"], 3);
    assert_eq!(goals.overall_total, 20);

    let selected = vec!["Germany".to_string()];
    assert_eq!(view::filter_players(players, &selected).len(), 3);
    assert_eq!(stats::sum_goals_by_country(players, &selected).overall_total, 5);
}

#[test]
fn test_fixture_group_summaries() {
    let snapshot = fixture_snapshot();
    let summaries = &snapshot.group_summaries;

    assert_eq!(summaries.len(), 7);
    assert_eq!(summaries.dropped, 1);
    assert_eq!(summaries.records[0].group, "Group A");
    assert_eq!(summaries.records[4].group, "Group B");
    assert_eq!(summaries.records[4].team, "Spain");
    assert_eq!(summaries.records[4].points, "9");
}

#[test]
fn test_fixture_group_details_and_stats() {
    let snapshot = fixture_snapshot();

    assert_eq!(snapshot.group_details.len(), 8);
    assert_eq!(snapshot.group_details.dropped, 1);
    assert_eq!(snapshot.dropped(), 3);
    assert_eq!(
        view::unique_groups(&snapshot.group_details.records),
        vec!["Group A", "Group B"]
    );

    let group_stats = snapshot.group_stats();
    let a = &group_stats["Group A"];
    assert_eq!(a.total_matches, 6.0);
    assert_eq!(a.total_goals, 17.0);
    assert!((a.avg_goals_per_match.unwrap() - 17.0 / 6.0).abs() < 1e-9);

    let b = &group_stats["Group B"];
    assert_eq!(b.total_matches, 6.0);
    assert_eq!(b.total_goals, 14.0);

    let all = view::group_view(&snapshot.group_details.records, GroupSelection::All).unwrap();
    assert_eq!(all.stats.total_matches, 12.0);
    assert_eq!(all.stats.total_goals, 31.0);
    assert!((all.stats.avg_goals_per_match.unwrap() - (17.0 / 6.0 + 14.0 / 6.0) / 2.0).abs() < 1e-9);
}

#[test]
fn test_fixture_details_csv() {
    let snapshot = fixture_snapshot();
    let rows = view::filter_details(
        &snapshot.group_details.records,
        &GroupSelection::Group("Group B".to_string()),
    );
    let csv = export::to_csv_string(rows).unwrap();
    let lines: Vec<&str> = csv.lines().collect();

    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0], "group,rank,team,matches,wins,draws,losses,goalsRaw,goalDifference,points");
    assert_eq!(lines[1], "Group B,1,Spain,3,3,0,0,5-0,5,9");
}

#[test]
fn test_extraction_is_repeatable() {
    let html = Html::parse_document(STANDINGS_HTML);
    let first = crate::models::group_detail::parse(&html);
    let second = crate::models::group_detail::parse(&html);

    assert_eq!(first, second);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_load_sends_browser_user_agent() {
    let server = standings_server(200, STANDINGS_HTML).await;
    let snapshot = load_blocking(local_config(&server.uri())).await.unwrap();

    assert_eq!(snapshot.players.len(), 8);
    assert_eq!(snapshot.group_details.len(), 8);

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].url.path(), PAGE_PATH);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_unmatched_user_agent_is_rejected() {
    let server = standings_server(200, STANDINGS_HTML).await;
    let config = local_config(&server.uri()).with_user_agent("curl/8.0");

    // wiremock answers unmatched requests with 404
    match load_blocking(config).await {
        Err(Error::Status { status, .. }) => assert_eq!(status.as_u16(), 404),
        other => panic!("expected status error, got {:?}", other.map(|s| s.url)),
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn test_non_success_status_is_fatal() {
    let server = standings_server(503, "busy").await;

    match load_blocking(local_config(&server.uri())).await {
        Err(Error::Status { status, .. }) => assert_eq!(status.as_u16(), 503),
        other => panic!("expected status error, got {:?}", other.map(|s| s.url)),
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn test_connection_failure_is_fatal() {
    // wiremock keeps dropped servers listening in a pool, so use a port nobody owns
    let addr = std::net::TcpListener::bind("127.0.0.1:0").unwrap().local_addr().unwrap();
    let uri = format!("http://{}", addr);

    assert!(matches!(load_blocking(local_config(&uri)).await, Err(Error::Transport { .. })));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_load_cached_fetches_once() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(PAGE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string(STANDINGS_HTML))
        .expect(2)
        .mount(&server)
        .await;
    let config = local_config(&server.uri());

    let worker_config = config.clone();
    let (cache, first, second) = tokio::task::spawn_blocking(move || {
        let mut cache = SnapshotCache::new();
        let first = load_cached(&mut cache, &worker_config).unwrap().fetched_at;
        let second = load_cached(&mut cache, &worker_config).unwrap().fetched_at;
        (cache, first, second)
    })
    .await
    .unwrap();

    assert_eq!(first, second);
    assert_eq!(server.received_requests().await.unwrap().len(), 1);

    let reloaded = tokio::task::spawn_blocking(move || {
        let mut cache = cache;
        cache.invalidate();
        load_cached(&mut cache, &config).unwrap().fetched_at
    })
    .await
    .unwrap();

    assert!(reloaded >= first);
    assert_eq!(server.received_requests().await.unwrap().len(), 2);
}
