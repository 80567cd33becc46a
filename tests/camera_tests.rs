use mockito::{Matcher, Server};
use pretty_assertions::assert_eq;
use surveillance_station::dto::EditCameraRequest;
use surveillance_station::{SurveillanceApiClient, SurveillanceError};

const CAMERA_LIST_PATH: &str = "/webapi/SurveillanceStation/ThirdParty/Camera/List/v1";
const CAMERA_EDIT_PATH: &str = "/webapi/SurveillanceStation/ThirdParty/Camera/Edit/v1";
const CAMERA_GET_PATH: &str = "/webapi/SurveillanceStation/ThirdParty/Camera/Get/v1";
const CAMERA_DO_PATH: &str = "/webapi/SurveillanceStation/ThirdParty/Camera/DOControl/v1";
const PTZ_PATH: &str = "/webapi/SurveillanceStation/ThirdParty/PTZ/Operate/v1";

#[tokio::test]
async fn test_list_cameras() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", CAMERA_LIST_PATH)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"success":true,"data":{"total":1,"cameras":[{"camId":1,"name":"Test Camera","ip":"192.168.1.100"}]}}"#,
        )
        .create_async()
        .await;

    let client = SurveillanceApiClient::new(server.url());
    let result = client.list_cameras(None).await.unwrap();

    mock.assert_async().await;
    assert_eq!(result.total, 1);
    assert_eq!(result.cameras.len(), 1);
    assert_eq!(result.cameras[0].cam_id, 1);
    assert_eq!(result.cameras[0].name, "Test Camera");
    assert_eq!(result.cameras[0].ip.as_deref(), Some("192.168.1.100"));
}

#[tokio::test]
async fn test_list_cameras_with_keyword_and_pascal_case_keys() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", CAMERA_LIST_PATH)
        .match_query(Matcher::UrlEncoded("keyword".into(), "gate".into()))
        .with_body(
            r#"{"Success":true,"Data":{"Total":1,"Cameras":[{"CamId":4,"Name":"Gate","Enabled":true}]}}"#,
        )
        .create_async()
        .await;

    let client = SurveillanceApiClient::new(server.url());
    let result = client.list_cameras(Some("gate")).await.unwrap();

    mock.assert_async().await;
    assert_eq!(result.total, 1);
    assert_eq!(result.cameras[0].cam_id, 4);
    assert_eq!(result.cameras[0].name, "Gate");
    assert_eq!(result.cameras[0].enabled, Some(true));
    assert!(result.cameras[0].ip.is_none());
}

#[tokio::test]
async fn test_edit_camera_returns_updated_camera() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", CAMERA_EDIT_PATH)
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("camId".into(), "1".into()),
            Matcher::UrlEncoded("newName".into(), "Updated Camera".into()),
        ]))
        .with_body(
            r#"{"success":true,"data":{"camera":{"camId":1,"name":"Updated Camera","ip":"192.168.1.100"}}}"#,
        )
        .create_async()
        .await;

    let client = SurveillanceApiClient::new(server.url());
    let request = EditCameraRequest {
        cam_id: "1",
        new_name: Some("Updated Camera"),
        ..Default::default()
    };
    let camera = client.edit_camera(&request).await.unwrap();

    mock.assert_async().await;
    assert_eq!(camera.cam_id, 1);
    assert_eq!(camera.name, "Updated Camera");
    assert_eq!(camera.ip.as_deref(), Some("192.168.1.100"));
}

#[tokio::test]
async fn test_edit_camera_requires_cam_id() {
    let client = SurveillanceApiClient::new("http://127.0.0.1:9");
    let err = client
        .edit_camera(&EditCameraRequest::default())
        .await
        .unwrap_err();
    assert!(matches!(err, SurveillanceError::InvalidArgument("camId")));
}

#[tokio::test]
async fn test_get_camera_info() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", CAMERA_GET_PATH)
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("camIds".into(), "1".into()),
            Matcher::UrlEncoded("DIDOs".into(), "false".into()),
        ]))
        .with_body(
            r#"{"success":true,"data":{"cameras":[{"camId":1,"name":"Test Camera","ip":"192.168.1.100"}]}}"#,
        )
        .create_async()
        .await;

    let client = SurveillanceApiClient::new(server.url());
    let cameras = client.get_camera_info("1", false).await.unwrap();

    mock.assert_async().await;
    assert_eq!(cameras.len(), 1);
    assert_eq!(cameras[0].cam_id, 1);
    assert_eq!(cameras[0].name, "Test Camera");
}

#[tokio::test]
async fn test_get_camera_info_with_didos() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", CAMERA_GET_PATH)
        .match_query(Matcher::UrlEncoded("DIDOs".into(), "true".into()))
        .with_body(
            r#"{"success":true,"data":{"cameras":[{"camId":2,"name":"Lobby","DIDOs":[{"DOIndex":0,"name":"Siren","triggerState":false}]}]}}"#,
        )
        .create_async()
        .await;

    let client = SurveillanceApiClient::new(server.url());
    let cameras = client.get_camera_info("2", true).await.unwrap();

    let outputs = cameras[0].digital_outputs.as_ref().unwrap();
    assert_eq!(outputs.len(), 1);
    assert_eq!(outputs[0].index, 0);
    assert_eq!(outputs[0].name.as_deref(), Some("Siren"));
    assert!(!outputs[0].trigger_state);
}

#[tokio::test]
async fn test_perform_ptz() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", PTZ_PATH)
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("camId".into(), "3".into()),
            Matcher::UrlEncoded("action".into(), "left".into()),
        ]))
        .with_body(r#"{"success":true}"#)
        .create_async()
        .await;

    let client = SurveillanceApiClient::new(server.url());
    client.perform_ptz("3", "left").await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_perform_ptz_api_error() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", PTZ_PATH)
        .match_query(Matcher::Any)
        .with_body(r#"{"success":false,"error":{"code":5,"message":"bad"}}"#)
        .create_async()
        .await;

    let client = SurveillanceApiClient::new(server.url());
    let err = client.perform_ptz("3", "spin").await.unwrap_err();

    match err {
        SurveillanceError::Api { code, message } => {
            assert_eq!(code, 5);
            assert_eq!(message, "bad");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_control_digital_output() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", CAMERA_DO_PATH)
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("camId".into(), "1".into()),
            Matcher::UrlEncoded("DOIndex".into(), "1".into()),
            Matcher::UrlEncoded("triggerState".into(), "true".into()),
        ]))
        .with_body(r#"{"success":true,"data":{"camId":1,"DOIndex":1,"triggerState":true}}"#)
        .create_async()
        .await;

    let client = SurveillanceApiClient::new(server.url());
    let output = client.control_digital_output("1", 1, true).await.unwrap();

    mock.assert_async().await;
    assert_eq!(output.cam_id, Some(1));
    assert_eq!(output.index, 1);
    assert!(output.trigger_state);
}
