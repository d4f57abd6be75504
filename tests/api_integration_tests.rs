use std::time::Duration;

use atlas::api::{ApiError, CountrySource, RestCountriesClient};
use atlas::core::action::{Action, Effect, update};
use atlas::core::country::CountryCode;
use atlas::core::route::Route;
use atlas::core::state::App;
use std::sync::Arc;
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

// ============================================================================
// Helper Functions
// ============================================================================

fn client_for(server: &MockServer) -> RestCountriesClient {
    RestCountriesClient::new(server.uri(), Duration::from_secs(5)).unwrap()
}

fn code(raw: &str) -> CountryCode {
    raw.parse().unwrap()
}

const ALL_BODY: &str = r#"[
    { "name": "Germany", "alpha3Code": "DEU", "flag": "https://flagcdn.com/de.svg", "region": "Europe" },
    { "name": "Ghana", "alpha3Code": "GHA", "flag": "https://flagcdn.com/gh.svg", "region": "Africa" },
    { "name": "France", "alpha3Code": "FRA", "flag": "https://flagcdn.com/fr.svg", "region": "Europe" }
]"#;

const DEU_BODY: &str = r#"{
    "name": "Germany",
    "alpha3Code": "DEU",
    "capital": "Berlin",
    "region": "Europe",
    "population": 83000000,
    "flag": "https://flagcdn.com/de.svg",
    "flags": { "svg": "https://flagcdn.com/de.svg", "png": "https://flagcdn.com/w320/de.png" }
}"#;

async fn mount_all(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/all"))
        .respond_with(ResponseTemplate::new(200).set_body_string(ALL_BODY))
        .mount(server)
        .await;
}

// ============================================================================
// Client Tests
// ============================================================================

#[tokio::test]
async fn test_fetch_all_preserves_order() {
    let server = MockServer::start().await;
    mount_all(&server).await;

    let countries = client_for(&server).fetch_all().await.unwrap();

    let names: Vec<_> = countries.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Germany", "Ghana", "France"]);
    assert_eq!(countries[1].code, code("GHA"));
    assert_eq!(countries[2].flag_url, "https://flagcdn.com/fr.svg");
}

#[tokio::test]
async fn test_fetch_detail_hits_alpha_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/alpha/DEU"))
        .respond_with(ResponseTemplate::new(200).set_body_string(DEU_BODY))
        .expect(1)
        .mount(&server)
        .await;

    let detail = client_for(&server).fetch_detail(&code("deu")).await.unwrap();

    assert_eq!(detail.name, "Germany");
    assert_eq!(detail.capital, "Berlin");
    assert_eq!(detail.region, "Europe");
    assert_eq!(detail.population, 83_000_000);
    assert_eq!(detail.flag_url, "https://flagcdn.com/de.svg");
}

#[tokio::test]
async fn test_non_success_status_is_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/alpha/XYZ"))
        .respond_with(
            ResponseTemplate::new(404).set_body_string(r#"{"status":404,"message":"Not Found"}"#),
        )
        .mount(&server)
        .await;

    let result = client_for(&server).fetch_detail(&code("XYZ")).await;

    match result {
        Err(ApiError::Api { status, message }) => {
            assert_eq!(status, 404);
            assert!(message.contains("Not Found"));
        }
        other => panic!("expected Api error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_malformed_body_is_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/all"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let result = client_for(&server).fetch_all().await;
    assert!(matches!(result, Err(ApiError::Parse(_))));
}

#[tokio::test]
async fn test_invalid_code_in_list_is_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/all"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(r#"[{ "name": "Nowhere", "alpha3Code": "N0", "flag": "" }]"#),
        )
        .mount(&server)
        .await;

    let result = client_for(&server).fetch_all().await;
    assert!(matches!(result, Err(ApiError::Parse(_))));
}

#[tokio::test]
async fn test_unreachable_server_is_network_error() {
    // Nothing listens on port 1
    let client = RestCountriesClient::new("http://127.0.0.1:1", Duration::from_secs(2)).unwrap();
    let result = client.fetch_all().await;
    assert!(matches!(result, Err(ApiError::Network(_))));
}

#[tokio::test]
async fn test_slow_response_times_out_as_network_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/all"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(ALL_BODY)
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let client = RestCountriesClient::new(server.uri(), Duration::from_millis(200)).unwrap();
    let result = client.fetch_all().await;
    assert!(matches!(result, Err(ApiError::Network(_))));
}

// ============================================================================
// Client + Reducer
// ============================================================================

#[tokio::test]
async fn test_directory_flow_against_mock_server() {
    let server = MockServer::start().await;
    mount_all(&server).await;
    Mock::given(method("GET"))
        .and(path("/alpha/DEU"))
        .respond_with(ResponseTemplate::new(200).set_body_string(DEU_BODY))
        .mount(&server)
        .await;

    let source = Arc::new(client_for(&server));
    let mut app = App::new(source.clone());

    let effects = update(&mut app, Action::Navigate(Route::Directory));
    let [Effect::FetchCountries { seq }] = effects.as_slice() else {
        panic!("expected one list fetch, got {:?}", effects);
    };
    let result = source.fetch_all().await;
    update(
        &mut app,
        Action::CountriesLoaded {
            seq: *seq,
            result,
            fetched_at: chrono::Local::now(),
        },
    );

    update(&mut app, Action::SearchChanged("g".to_string()));
    let names: Vec<_> = app.directory.filtered().iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Germany", "Ghana"]);

    let effects = update(&mut app, Action::Navigate(Route::Country(code("DEU"))));
    let [Effect::FetchDetail { code, seq }] = effects.as_slice() else {
        panic!("expected one detail fetch, got {:?}", effects);
    };
    let result = source.fetch_detail(code).await;
    update(&mut app, Action::DetailLoaded { seq: *seq, result });

    let detail = app.detail.state().loaded().unwrap();
    assert_eq!(detail.population, 83_000_000);

    // Back to the list: nothing is re-fetched and the term survives
    assert!(update(&mut app, Action::Back).is_empty());
    assert_eq!(app.directory.search_term(), "g");
    assert_eq!(app.directory.countries().len(), 3);
}
