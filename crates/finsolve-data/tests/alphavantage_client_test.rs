//! Integration tests for the Alpha Vantage client against a mock server.

use finsolve_data::{
    AlphaVantageClient, DirectoryError, ErrorKind, IndexTable, InstrumentDirectory,
    InstrumentTable, OverviewSource, ProviderConfig, RecordSource,
};
use httpmock::prelude::*;

const IBM_OVERVIEW: &str = r#"{
    "Symbol": "IBM",
    "Name": "International Business Machines",
    "Description": "IBM is an American multinational technology company.",
    "MarketCapitalization": "200000000000",
    "EBITDA": "14000000000",
    "PERatio": "20",
    "EPS": "9.5",
    "BookValue": "25.3",
    "DividendPerShare": "6.66",
    "ReturnOnEquityTTM": "0.35"
}"#;

fn client(server: &MockServer) -> AlphaVantageClient {
    let config = ProviderConfig::new("test-key").with_base_url(server.base_url());
    AlphaVantageClient::new(&config).unwrap()
}

#[test]
fn test_overview_request_shape() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/query")
            .query_param("function", "OVERVIEW")
            .query_param("symbol", "IBM")
            .query_param("apikey", "test-key");
        then.status(200)
            .header("content-type", "application/json")
            .body(IBM_OVERVIEW);
    });

    let overview = client(&server).overview("IBM").unwrap().unwrap();
    mock.assert();

    assert_eq!(overview.symbol.as_deref(), Some("IBM"));
    assert_eq!(overview.current_price(), Some(190.0));
}

#[test]
fn test_empty_object_means_unknown() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/query");
        then.status(200).body("{}");
    });

    assert_eq!(client(&server).overview("NOPE").unwrap(), None);
}

#[test]
fn test_http_error_status() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/query");
        then.status(503).body("Service Unavailable");
    });

    let err = client(&server).overview("IBM").unwrap_err();
    assert!(matches!(err, DirectoryError::ExternalService(ref m) if m.contains("503")));
}

#[test]
fn test_rate_limit_message() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/query");
        then.status(200).body(
            r#"{"Information": "Thank you for using Alpha Vantage! Please consider a premium plan."}"#,
        );
    });

    let err = client(&server).overview("IBM").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ExternalServiceFailure);
}

#[test]
fn test_malformed_body() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/query");
        then.status(200).body("<html>oops</html>");
    });

    let err = client(&server).overview("IBM").unwrap_err();
    assert!(matches!(err, DirectoryError::Serialization(_)));
}

#[test]
fn test_directory_end_to_end() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/query").query_param("symbol", "IBM");
        then.status(200).body(IBM_OVERVIEW);
    });
    server.mock(|when, then| {
        when.method(GET).path("/query").query_param("symbol", "UNKNOWNSYMBOL");
        then.status(200).body("{}");
    });

    let directory = InstrumentDirectory::from_parts(
        InstrumentTable::bundled().unwrap(),
        IndexTable::bundled().unwrap(),
        client(&server),
    );

    let record = directory.lookup_instrument("IBM").unwrap();
    assert_eq!(record.source, RecordSource::Remote);
    assert_eq!(record.dividend, Some(6.66));

    assert!(directory.is_valid_symbol("IBM").unwrap());
    assert!(!directory.is_valid_symbol("UNKNOWNSYMBOL").unwrap());
    assert_eq!(
        directory.lookup_instrument("UNKNOWNSYMBOL").unwrap_err().kind(),
        ErrorKind::NotFound
    );
}
