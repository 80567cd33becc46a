use mockito::{Matcher, Server};
use pretty_assertions::assert_eq;
use surveillance_station::dto::UpdateDeviceLocationRequest;
use surveillance_station::{SurveillanceApiClient, SurveillanceError};

const MAP_CHANGE_LOCATION_PATH: &str = "/webapi/SurveillanceStation/ThirdParty/Emap/ChangeLocation/v1";

#[tokio::test]
async fn test_update_device_location() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", MAP_CHANGE_LOCATION_PATH)
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("deviceId".into(), "1".into()),
            Matcher::UrlEncoded("latitude".into(), "40.7128".into()),
            Matcher::UrlEncoded("longitude".into(), "-74.006".into()),
            Matcher::UrlEncoded("radius".into(), "100".into()),
            Matcher::UrlEncoded("viewAngle".into(), "120".into()),
            Matcher::UrlEncoded("direction".into(), "90".into()),
        ]))
        .with_body(
            r#"{"success":true,"data":{"geoMapItem":[{"deviceId":"1","latitude":40.7128,"longitude":-74.0060,"direction":90,"viewAngle":120,"radius":100}]}}"#,
        )
        .create_async()
        .await;

    let client = SurveillanceApiClient::new(server.url());
    let request = UpdateDeviceLocationRequest {
        device_id: "1",
        longitude: Some(-74.006),
        latitude: Some(40.7128),
        radius: Some(100),
        view_angle: Some(120),
        direction: Some(90),
    };
    let item = client.update_device_location(&request).await.unwrap();

    mock.assert_async().await;
    assert_eq!(item.device_id, "1");
    assert_eq!(item.latitude, 40.7128);
    assert_eq!(item.longitude, -74.006);
    assert_eq!(item.direction, 90);
    assert_eq!(item.view_angle, 120);
    assert_eq!(item.radius, 100);
}

#[tokio::test]
async fn test_update_device_location_empty_list_is_protocol_error() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", MAP_CHANGE_LOCATION_PATH)
        .match_query(Matcher::UrlEncoded("deviceId".into(), "9".into()))
        .with_body(r#"{"success":true,"data":{"geoMapItem":[]}}"#)
        .create_async()
        .await;

    let client = SurveillanceApiClient::new(server.url());
    let request = UpdateDeviceLocationRequest {
        device_id: "9",
        ..Default::default()
    };
    let err = client.update_device_location(&request).await.unwrap_err();

    assert!(matches!(err, SurveillanceError::Protocol(_)));
}

#[tokio::test]
async fn test_update_device_location_missing_data_is_protocol_error() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", MAP_CHANGE_LOCATION_PATH)
        .match_query(Matcher::Any)
        .with_body(r#"{"success":true}"#)
        .create_async()
        .await;

    let client = SurveillanceApiClient::new(server.url());
    let request = UpdateDeviceLocationRequest {
        device_id: "9",
        radius: Some(5),
        ..Default::default()
    };
    let err = client.update_device_location(&request).await.unwrap_err();

    assert!(matches!(err, SurveillanceError::Protocol(_)));
}
