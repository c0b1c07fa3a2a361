use chrono::NaiveDate;
use seaborne_api::filter::{PortFilter, VesselTypeFilter};
use seaborne_api::types::freight_pricing::Port as PricingPort;
use seaborne_api::types::VesselType;
use seaborne_api::{
    Connection, Error, FreightPricingApi, FreightPricingQuery, FreightRatesApi, FreightRatesQuery,
    GeoApi, LatestValuationsQuery, MarketRatesApi, MarketRatesQuery, RoutesQuery,
    VesselValuationsApi,
};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

fn connection(server: &MockServer) -> Connection {
    Connection::with_host(&server.uri(), "test-key").unwrap()
}

#[tokio::test]
async fn get_freight_pricing_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/freight/api/Freight/v1/pricing"))
        .and(header("Ocp-Apim-Subscription-Key", "test-key"))
        .and(query_param("VesselTypes", "1"))
        .and(query_param("LoadPorts", "3153&LoadPorts=3689"))
        .and(query_param("DischargePorts", "3467"))
        .and(query_param("Date", "2021-03-09"))
        .and(query_param("IsClean", "True"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("freight_pricing.json")))
        .mount(&mock_server)
        .await;

    let api = FreightPricingApi::new(connection(&mock_server));
    let port = |id| PricingPort {
        id: Some(id),
        name: None,
    };
    let query = FreightPricingQuery::new(
        VesselType::from_id(1).unwrap(),
        NaiveDate::from_ymd_opt(2021, 3, 9).unwrap(),
    )
    .with_load_ports(&[port(3153), port(3689)])
    .with_discharge_port(&port(3467))
    .with_is_clean(true);

    let pricing = api.get_freight_pricing(&query).await.unwrap();
    assert_eq!(pricing.len(), 2);
    assert_eq!(pricing[0].vessel_class.as_deref(), Some("Suezmax"));
}

#[tokio::test]
async fn get_freight_pricing_ports_filtered() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/freight/api/Freight/v1/ports"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"id": 3689, "name": "Jebel Ali"},
            {"id": 3153, "name": "Fujairah"}
        ])))
        .mount(&mock_server)
        .await;

    let api = FreightPricingApi::new(connection(&mock_server));
    let ports = api.get_ports(&PortFilter::new(Some("jeb"))).await.unwrap();
    assert_eq!(ports.len(), 1);
    assert_eq!(ports[0].name.as_deref(), Some("Jebel Ali"));
}

#[tokio::test]
async fn vessel_types_need_no_request() {
    let mock_server = MockServer::start().await;
    let api = FreightPricingApi::new(connection(&mock_server));

    let all = api.get_vessel_types(&VesselTypeFilter::default());
    assert_eq!(all.len(), 5);
    let tankers = api.get_vessel_types(&VesselTypeFilter::new(Some("TANK")));
    assert_eq!(tankers, vec![VesselType::from_id(1).unwrap()]);
    assert!(mock_server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn get_freight_rates_pricing_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/freight-rates/api/v1/pricing"))
        .and(query_param("LoadPort", "3153"))
        .and(query_param("VesselSubclass", "All"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(load_fixture("freight_rates_pricing.json")),
        )
        .mount(&mock_server)
        .await;

    let api = FreightRatesApi::new(connection(&mock_server));
    let load_port = seaborne_api::types::freight_rates::Port {
        id: Some(3153),
        name: Some("Fujairah".to_string()),
    };
    let query = FreightRatesQuery::default().with_load_port(&load_port);

    let pricing = api.get_freight_pricing(&query).await.unwrap();
    assert_eq!(pricing.len(), 2);
    assert_eq!(pricing[1].vessel_class.as_deref(), Some("LR2"));
    assert_eq!(api.get_vessel_subclasses().len(), 3);
}

#[tokio::test]
async fn get_port_not_found_is_none() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/geo/v2/ports/999999"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
        .mount(&mock_server)
        .await;

    let api = GeoApi::new(connection(&mock_server));
    let port = api.get_port(999999).await.unwrap();
    assert!(port.is_none());
}

#[tokio::test]
async fn get_port_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/geo/v2/ports/3153"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": 3153,
            "name": "Fujairah",
            "countryId": 230
        })))
        .mount(&mock_server)
        .await;

    let api = GeoApi::new(connection(&mock_server));
    let port = api.get_port(3153).await.unwrap().unwrap();
    assert_eq!(port.name.as_deref(), Some("Fujairah"));
    assert_eq!(port.country_id, Some(230));
}

#[tokio::test]
async fn get_geo_ports_filtered_keeps_order() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/geo/v2/ports"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("geo_ports.json")))
        .mount(&mock_server)
        .await;

    let api = GeoApi::new(connection(&mock_server));
    let ports = api.get_ports(&PortFilter::new(Some("JEB"))).await.unwrap();
    let ids: Vec<_> = ports.iter().map(|p| p.id).collect();
    assert_eq!(ids, [Some(3689), Some(2928)]);
}

#[tokio::test]
async fn get_countries_tolerates_incomplete_entries() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/geo/v2/countries"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"id": 230, "name": "United Arab Emirates", "countryCodeNumeric": 784},
            {"id": 231},
            {"name": "Oman", "countryCode": "OM"}
        ])))
        .mount(&mock_server)
        .await;

    let api = GeoApi::new(connection(&mock_server));
    let countries = api.get_countries(&Default::default()).await.unwrap();
    assert_eq!(countries.len(), 3);
    assert_eq!(countries[0].country_code_numeric.as_deref(), Some("784"));
    assert_eq!(countries[1].name, None);
    assert_eq!(countries[2].id, None);

    let named = api
        .get_countries(&seaborne_api::filter::CountryFilter::new(Some("man")))
        .await
        .unwrap();
    assert_eq!(named.len(), 1);
    assert_eq!(named[0].name.as_deref(), Some("Oman"));
}

#[tokio::test]
async fn get_ports_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/geo/v2/ports"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&mock_server)
        .await;

    let api = GeoApi::new(connection(&mock_server));
    match api.get_ports(&PortFilter::default()).await {
        Err(Error::RequestFailed { status, body }) => {
            assert_eq!(status, 500);
            assert_eq!(body, "Internal Server Error");
        }
        other => panic!("expected RequestFailed, got {other:?}"),
    }
}

#[tokio::test]
async fn get_market_rates_excludes_sentinel() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/market-rates/api/v1/market_rates"))
        .and(query_param("start_date", "2021-05-04"))
        .and(query_param("is_clean", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("market_rates.json")))
        .mount(&mock_server)
        .await;

    let api = MarketRatesApi::new(connection(&mock_server));
    let query = MarketRatesQuery::new(NaiveDate::from_ymd_opt(2021, 5, 4).unwrap()).with_is_clean(true);
    let rates = api.get_market_rates(&query).await.unwrap();
    assert_eq!(rates.len(), 2);
    assert!(rates.iter().all(|r| r.route_id.as_deref() != Some("TC1")));
}

#[tokio::test]
async fn get_routes_by_vessel_class() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/market-rates/api/v1/routes"))
        .and(query_param("vessel_class_id", "84"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("routes.json")))
        .mount(&mock_server)
        .await;

    let api = MarketRatesApi::new(connection(&mock_server));
    let routes = api
        .get_routes(&RoutesQuery::default().with_vessel_class_id(84))
        .await
        .unwrap();
    assert_eq!(routes.len(), 2);
}

#[tokio::test]
async fn get_latest_valuation_not_found_is_none() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/vessel-valuations/api/v1/valuations/1234567/latest"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let api = VesselValuationsApi::new(connection(&mock_server));
    assert_eq!(api.get_latest_valuation(1234567).await.unwrap(), None);
}

#[tokio::test]
async fn get_latest_valuation_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/vessel-valuations/api/v1/valuations/9867293/latest"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("valuation.json")))
        .mount(&mock_server)
        .await;

    let api = VesselValuationsApi::new(connection(&mock_server));
    let valuation = api.get_latest_valuation(9867293).await.unwrap().unwrap();
    assert_eq!(valuation.imo, Some(9867293));
    assert_eq!(valuation.valuation_price.unwrap().to_string(), "84.25");
}

#[tokio::test]
async fn get_valuation_for_date_sends_date() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/vessel-valuations/api/v1/valuations/9867293"))
        .and(query_param("date", "2021-06-30"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("valuation.json")))
        .mount(&mock_server)
        .await;

    let api = VesselValuationsApi::new(connection(&mock_server));
    let valuation = api
        .get_valuation_for_date(9867293, NaiveDate::from_ymd_opt(2021, 6, 30).unwrap())
        .await
        .unwrap();
    assert!(valuation.is_some());
}

#[tokio::test]
async fn get_latest_valuations_joins_imos() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/vessel-valuations/api/v1/valuations/latest"))
        .and(query_param("imos", "9867293,9301457"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"imo": 9867293, "valuationPrice": 84.25},
            {"imo": 9301457, "valuationPrice": "21.50"}
        ])))
        .mount(&mock_server)
        .await;

    let api = VesselValuationsApi::new(connection(&mock_server));
    let query = LatestValuationsQuery::default().with_imos(&[9867293, 9301457]);
    let valuations = api.get_latest_valuations(&query).await.unwrap();
    assert_eq!(valuations.len(), 2);
    assert_eq!(valuations[1].valuation_price.unwrap().to_string(), "21.50");
}

#[tokio::test]
async fn get_valuation_history_not_found_is_an_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/vessel-valuations/api/v1/valuations/1234567/history"))
        .respond_with(ResponseTemplate::new(404).set_body_string("unknown vessel"))
        .mount(&mock_server)
        .await;

    let api = VesselValuationsApi::new(connection(&mock_server));
    assert!(matches!(
        api.get_valuation_history(1234567).await,
        Err(Error::RequestFailed { status: 404, .. })
    ));
}

#[tokio::test]
async fn malformed_json_is_an_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/geo/v2/areas"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{not valid json}"))
        .mount(&mock_server)
        .await;

    let api = GeoApi::new(connection(&mock_server));
    let result = api.get_areas(&Default::default()).await;
    assert!(matches!(result, Err(Error::InvalidJson(_))));
}

#[tokio::test]
async fn malformed_value_is_a_parse_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/vessel-valuations/api/v1/valuations/9867293/latest"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "imo": 9867293,
            "valuationPrice": "eighty"
        })))
        .mount(&mock_server)
        .await;

    let api = VesselValuationsApi::new(connection(&mock_server));
    assert!(matches!(
        api.get_latest_valuation(9867293).await,
        Err(Error::Parse(_))
    ));
}
