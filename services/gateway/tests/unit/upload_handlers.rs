//! Upload handler tests

use axum::http::{Request, StatusCode, header};
use axum::body::Body;
use pretty_assertions::assert_eq;
use rstest::*;
use serde_json::json;

use super::helpers::*;
use crate::create_test_gateway_config;

const BROKER_EXPORT: &str = "\
Date,Symbol,Type,Volume,Open Price,Close Price,Profit
2024-01-02,EURUSD,Buy,1,100,110,250
2024-01-03,GBPUSD,Sell,2,200,210,-50
2024-01-04,USDJPY,Buy,1,150,160,
";

#[tokio::test]
async fn test_upload_returns_stats_and_rows() {
    let response = send(test_router(), csv_upload(BROKER_EXPORT)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    let stats = &body["stats"];
    assert_eq!(stats["totalTrades"], json!(3));
    assert_eq!(stats["winningTrades"], json!(2));
    assert_eq!(stats["losingTrades"], json!(1));
    assert_eq!(stats["totalPnL"], json!(210.0));
    assert_eq!(stats["avgProfit"], json!(130.0));
    assert_eq!(stats["avgLoss"], json!(-50.0));
    let win_rate = stats["winRate"].as_f64().unwrap();
    assert!((win_rate - 200.0 / 3.0).abs() < 1e-9);

    let rows = body["rows"].as_array().unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(
        rows[0],
        json!({
            "date": "2024-01-02",
            "instrument": "EURUSD",
            "type": "BUY",
            "volume": 1.0,
            "entryPrice": 100.0,
            "exitPrice": 110.0,
            "profit": 250.0
        })
    );
    assert_eq!(rows[1]["type"], json!("SELL"));
    // Derived from the prices
    assert_eq!(rows[2]["profit"], json!(10.0));
}

#[tokio::test]
async fn test_upload_polish_semicolon_export() {
    let csv = "Data;Rynek;Typ;Wolumen;Cena wejścia;Cena wyjścia\n\
               2024-02-01;WIG20;Sprzedaż;1;2400,5;2390,5\n";
    let response = send(test_router(), csv_upload(csv)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["rows"][0]["type"], json!("SELL"));
    assert_eq!(body["rows"][0]["profit"], json!(10.0));
    assert_eq!(body["stats"]["winningTrades"], json!(1));
}

#[tokio::test]
async fn test_upload_ignores_other_fields() {
    let request = upload_request(&[
        FormPart::text("note", b"weekly export"),
        FormPart::file("file", "trades.csv", BROKER_EXPORT.as_bytes()),
    ]);
    let response = send(test_router(), request).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await["stats"]["totalTrades"], json!(3));
}

#[rstest]
#[case::no_parts(vec![])]
#[case::wrong_field(vec![FormPart::file("attachment", "trades.csv", BROKER_EXPORT.as_bytes())])]
#[case::nothing_chosen(vec![FormPart::file("file", "", b"")])]
#[tokio::test]
async fn test_upload_without_file(#[case] parts: Vec<FormPart<'static>>) {
    let response = send(test_router(), upload_request(&parts)).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(response).await["error"], json!("MISSING_FILE"));
}

#[tokio::test]
async fn test_upload_requires_multipart_body() {
    let request = Request::post("/api/upload")
        .header(header::CONTENT_TYPE, "text/csv")
        .body(Body::from(BROKER_EXPORT))
        .unwrap();
    let response = send(test_router(), request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(response).await["error"], json!("MISSING_FILE"));
}

#[rstest]
#[case::empty("")]
#[case::header_only("date,symbol,type,profit\n")]
#[case::blank_lines("date,symbol,type,profit\n\n   \n")]
#[tokio::test]
async fn test_upload_without_data_rows(#[case] csv: &str) {
    let response = send(test_router(), csv_upload(csv)).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(response).await["error"], json!("EMPTY_FILE"));
}

#[tokio::test]
async fn test_upload_missing_columns_reports_headers() {
    let response = send(test_router(), csv_upload("foo,bar\n1,2\n")).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = json_body(response).await;
    assert_eq!(body["error"], json!("MISSING_COLUMNS"));
    assert_eq!(body["details"]["headers"], json!(["foo", "bar"]));
    assert_eq!(body["details"]["resolved"]["type"], json!(null));
    assert_eq!(body["details"]["resolved"]["profit"], json!(null));
}

#[tokio::test]
async fn test_upload_invalid_utf8() {
    let request = upload_request(&[FormPart::file(
        "file",
        "trades.csv",
        b"type,profit\n\xff\xfe,1\n",
    )]);
    let response = send(test_router(), request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(response).await["error"], json!("MALFORMED_FILE"));
}

#[tokio::test]
async fn test_upload_over_body_limit_is_rejected() {
    let mut config = create_test_gateway_config();
    config.server.max_body_size = 256;

    let mut csv = String::from("date,instrument,type,profit\n");
    for i in 0..100 {
        csv.push_str(&format!("2024-03-01,DAX,buy,{i}\n"));
    }

    let response = send(router_with(config), csv_upload(&csv)).await;
    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn test_upload_uses_configured_aliases() {
    let mut config = create_test_gateway_config();
    config.columns.profit = vec!["gain".to_string()];

    let csv = "date,instrument,type,gain\n2024-03-01,DAX,buy,12\n2024-03-02,DAX,sell,-2\n";
    let response = send(router_with(config), csv_upload(csv)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["stats"]["totalPnL"], json!(10.0));
}
