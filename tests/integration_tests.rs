//! Integration tests using mock HTTP server
//!
//! Tests the full end-to-end flow: AmcClient → HTTP request → typed model

use amc_api::auth::VENDOR_KEY_HEADER;
use amc_api::models::{Genre, MpaaRating, TicketType};
use amc_api::{
    AmcClient, CancellationToken, ClientConfig, Error, Method, MovieId, QueryParams,
    RequestTarget, ShowtimeId, TheatreId,
};
use chrono::NaiveDate;
use serde_json::{json, Value};
use std::time::Duration;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn fixture(name: &str) -> Value {
    let raw = match name {
        "movie" => include_str!("fixtures/movie.json"),
        "theatre" => include_str!("fixtures/theatre.json"),
        "showtime" => include_str!("fixtures/showtime.json"),
        other => panic!("unknown fixture {other}"),
    };
    serde_json::from_str(raw).unwrap()
}

fn client_for(server: &MockServer) -> AmcClient {
    let config = ClientConfig::builder()
        .base_url(server.uri())
        .vendor_key("test-vendor-key")
        .timeout(Duration::from_secs(5))
        .build();
    AmcClient::new(config).unwrap()
}

fn page(server: &MockServer, self_path: &str, next: Option<&str>, key: &str, items: Vec<Value>) -> Value {
    let mut links = json!({"self": {"href": format!("{}{}", server.uri(), self_path)}});
    if let Some(next) = next {
        links["next"] = json!({"href": format!("{}{}", server.uri(), next), "templated": false});
    }
    json!({
        "pageSize": items.len(),
        "pageNumber": 1,
        "count": 2,
        "_links": links,
        "_embedded": {key: items}
    })
}

// ============================================================================
// Movies
// ============================================================================

#[tokio::test]
async fn test_fetch_movie_sends_vendor_key() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/movies/66180"))
        .and(header(VENDOR_KEY_HEADER, "test-vendor-key"))
        .and(header("Accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(fixture("movie")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let movie = client.fetch_movie(MovieId(66180)).await.unwrap();

    assert_eq!(movie.name, "Shang-Chi and the Legend of the Ten Rings");
    assert_eq!(movie.genre, Genre::Action);
    assert_eq!(movie.rating, MpaaRating::Pg13);
    assert_eq!(
        movie.thumbnail_url().unwrap().as_str(),
        "https://amc-theatres-res.cloudinary.com/shang-chi/dynamic.jpg"
    );
}

#[tokio::test]
async fn test_fetch_all_movies_query() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/movies"))
        .and(query_param("page-number", "1"))
        .and(query_param("page-size", "10"))
        .and(query_param("start-date", "2021-09-06"))
        .and(query_param("end-date", "2021-09-06"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(
            &mock_server,
            "/v2/movies",
            None,
            "movies",
            vec![fixture("movie")],
        )))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let today = NaiveDate::from_ymd_opt(2021, 9, 6).unwrap();
    let movies = client.fetch_all_movies_on(1, 10, today).await.unwrap();
    assert_eq!(movies.items().len(), 1);
    assert!(!movies.has_next());
}

#[tokio::test]
async fn test_follow_next_links_to_the_end() {
    let mock_server = MockServer::start().await;
    let listing = "/v2/movies/views/now-playing";

    let mut second_movie = fixture("movie");
    second_movie["id"] = json!(70001);

    Mock::given(method("GET"))
        .and(path(listing))
        .and(query_param("page-number", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(
            &mock_server,
            "/v2/movies/views/now-playing?page-number=1&page-size=1",
            Some("/v2/movies/views/now-playing?page-number=2&page-size=1"),
            "movies",
            vec![fixture("movie")],
        )))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path(listing))
        .and(query_param("page-number", "2"))
        .and(header(VENDOR_KEY_HEADER, "test-vendor-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(
            &mock_server,
            "/v2/movies/views/now-playing?page-number=2&page-size=1",
            None,
            "movies",
            vec![second_movie],
        )))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let first = client.fetch_now_playing_movies(1, 1).await.unwrap();
    assert_eq!(first.items()[0].id, MovieId(66180));

    let second = client.fetch_next(&first).await.unwrap().unwrap();
    assert_eq!(second.items()[0].id, MovieId(70001));
    assert!(client.fetch_next(&second).await.is_none());
}

#[tokio::test]
async fn test_service_error_envelope() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/movies/does-not-exist"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "errors": [{"code": 5001, "message": "Not found"}]
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.fetch_movie_by_slug("does-not-exist").await.unwrap_err();

    assert_eq!(err.to_string(), "Not found");
    assert_eq!(err.status(), Some(404));
    assert_eq!(err.api_errors().unwrap().first().unwrap().code, 5001);
}

#[tokio::test]
async fn test_bad_server_response() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/movies/views/active"))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream unavailable"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.fetch_active_movies().await.unwrap_err();
    assert!(matches!(err, Error::BadServerResponse { status: 503 }));
}

#[tokio::test]
async fn test_unknown_genre_is_decode_error() {
    let mock_server = MockServer::start().await;

    let mut movie = fixture("movie");
    movie["genre"] = json!("Telenovela");

    Mock::given(method("GET"))
        .and(path("/v2/movies/66180"))
        .respond_with(ResponseTemplate::new(200).set_body_json(movie))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.fetch_movie(MovieId(66180)).await.unwrap_err();
    match err {
        Error::Decode { message, fragment } => {
            assert!(message.contains("'Telenovela' is not a valid Genre"));
            assert!(fragment.contains("Telenovela"));
        }
        other => panic!("expected decode error, got {other:?}"),
    }
}

// ============================================================================
// Theatres and showtimes
// ============================================================================

#[tokio::test]
async fn test_fetch_theatre_by_slug() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/theatres/amc-34th-street-14"))
        .respond_with(ResponseTemplate::new(200).set_body_json(fixture("theatre")))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let theatre = client.fetch_theatre_by_slug("amc-34th-street-14").await.unwrap();
    assert_eq!(theatre.id, TheatreId(610));
    assert_eq!(theatre.concessions_delivery_options.len(), 2);
    assert_eq!(theatre.west_world_media_number, Some(1310));
}

#[tokio::test]
async fn test_unusable_slug_never_reaches_server() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(fixture("movie")))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    for slug in ["", ".."] {
        let err = client.fetch_movie_by_slug(slug).await.unwrap_err();
        assert!(matches!(err, Error::InvalidPathSegment { .. }), "{slug:?}: {err}");
    }
    let err = client.fetch_theatre_by_slug("").await.unwrap_err();
    assert!(err.is_construction());
}

#[tokio::test]
async fn test_fetch_showtimes_for_theatre_on_date() {
    let mock_server = MockServer::start().await;

    let mut body = page(
        &mock_server,
        "/v2/theatres/610/showtimes/2021-09-04",
        None,
        "showtimes",
        vec![fixture("showtime")],
    );
    body["lastUpdatedDateUtc"] = json!("2021-09-01T10:15:00");

    Mock::given(method("GET"))
        .and(path("/v2/theatres/610/showtimes/2021-09-04"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let date = NaiveDate::from_ymd_opt(2021, 9, 4);
    let showtimes = client.fetch_all_showtimes(TheatreId(610), date).await.unwrap();

    assert!(showtimes.last_updated_date_utc.is_some());
    let showtime = &showtimes.items()[0];
    assert_eq!(showtime.rating, MpaaRating::Pg13);
    assert!(!showtime.is_embargoed);
    assert!(showtime.price_for(TicketType::Senior).is_some());
}

#[tokio::test]
async fn test_fetch_showtimes_near_location() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(
            "/v2/showtimes/views/current-location/2021-09-04/40.752/-73.995",
        ))
        .and(query_param("state", "NY"))
        .and(query_param("movie", "Shang Chi"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(
            &mock_server,
            "/v2/showtimes/views/current-location/2021-09-04/40.752/-73.995",
            None,
            "showtimes",
            vec![fixture("showtime")],
        )))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let params = QueryParams::new().with("state", "NY").with("movie", "Shang Chi");
    let date = NaiveDate::from_ymd_opt(2021, 9, 4).unwrap();
    let showtimes = client
        .fetch_showtimes(date, 40.752, -73.995, Some(params))
        .await
        .unwrap();
    assert_eq!(showtimes.items()[0].id, ShowtimeId(90125));
}

// ============================================================================
// Credentials, cancellation and raw targets
// ============================================================================

#[tokio::test]
async fn test_vendor_key_replacement_applies_to_clones() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/showtimes/90125"))
        .and(header(VENDOR_KEY_HEADER, "rotated-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(fixture("showtime")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let clone = client.clone();
    client.set_vendor_key("rotated-key");

    let showtime = clone.fetch_showtime(ShowtimeId(90125)).await.unwrap();
    assert_eq!(showtime.movie_id, MovieId(66180));
}

#[tokio::test]
async fn test_cancelled_request_yields_nothing() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/theatres/610"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(fixture("theatre"))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let cancel = CancellationToken::new();
    let trigger = cancel.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(50)).await;
        trigger.cancel();
    });

    let target = amc_api::resources::TheatresTarget::ById(TheatreId(610));
    let outcome = client
        .request_cancellable::<_, amc_api::Theatre>(&target, &cancel)
        .await;
    assert!(outcome.is_none());
}

#[tokio::test]
async fn test_raw_target_with_json_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v2/echo"))
        .and(header("content-type", "application/json"))
        .and(wiremock::matchers::body_json(json!({"seats": 2})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"ok": true})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let target = RequestTarget::get("/v2/echo")
        .with_method(Method::POST)
        .with_task(amc_api::Task::json(&json!({"seats": 2})).unwrap());

    let reply: Value = client.request(&target).await.unwrap();
    assert_eq!(reply["ok"], true);
}
