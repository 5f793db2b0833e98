// crates.io
use httpmock::prelude::*;
// self
use session_guard::{_preludet::*, error::ConfigError, http::RequestDescriptor};

fn media_url(server: &MockServer) -> Url {
	Url::parse(&server.url("/api/media")).expect("Mock media URL should parse successfully.")
}

#[tokio::test]
async fn decorated_requests_carry_the_bearer_header() {
	let server = MockServer::start_async().await;
	let (client, credentials, notifier, _) = build_test_client(&server.url("/api/auth/"));

	credentials.set("abc123");

	let mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/api/media").header("authorization", "Bearer abc123");
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"items\":[\"a\",\"b\"]}");
		})
		.await;
	let response = client
		.get(media_url(&server))
		.await
		.expect("Decorated request should succeed against the mock server.");

	mock.assert_async().await;
	assert!(response.is_success());

	#[derive(serde::Deserialize)]
	struct Listing {
		items: Vec<String>,
	}

	let listing: Listing = response.json().expect("Response body should deserialize.");

	assert_eq!(listing.items, ["a", "b"]);
	assert_eq!(notifier.visible_count(), 0);
}

#[tokio::test]
async fn anonymous_requests_stay_undecorated() {
	let server = MockServer::start_async().await;
	let (client, _, notifier, _) = build_test_client(&server.url("/api/auth/"));
	let decorated = server
		.mock_async(|when, then| {
			when.method(GET).path("/api/media").header_exists("authorization");
			then.status(500);
		})
		.await;
	let plain = server
		.mock_async(|when, then| {
			when.method(GET).path("/api/media");
			then.status(200).body("ok");
		})
		.await;
	let response =
		client.get(media_url(&server)).await.expect("Anonymous request should succeed.");

	assert_eq!(decorated.hits_async().await, 0, "No authorization header must reach the wire.");

	plain.assert_async().await;

	assert_eq!(response.body, b"ok");
	assert_eq!(notifier.visible_count(), 0);
}

#[tokio::test]
async fn non_success_statuses_surface_as_status_failures() {
	let server = MockServer::start_async().await;
	let (client, _, notifier, _) = build_test_client(&server.url("/api/auth/"));
	let _mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/api/media");
			then.status(503)
				.header("content-type", "application/json")
				.body("{\"message\":\"maintenance window\"}");
		})
		.await;
	let error = client
		.get(media_url(&server))
		.await
		.expect_err("A 503 response must surface as a failure.");

	assert_eq!(error.status(), Some(503));
	assert!(!error.is_unauthorized());
	assert_eq!(error.url().map(Url::as_str), Some(media_url(&server).as_str()));

	match error {
		Error::Status(status_error) => {
			assert_eq!(status_error.message.as_deref(), Some("maintenance window"));
		},
		other => panic!("Unexpected error variant: {other:?}."),
	}

	assert_eq!(notifier.visible_count(), 0, "Non-401 failures must never notify.");
}

#[tokio::test]
async fn success_bodies_pass_through_untouched() {
	let server = MockServer::start_async().await;
	let (client, credentials, _, _) = build_test_client(&server.url("/api/auth/"));

	credentials.set("abc123");

	let payload = "binary\x00payload";
	let _mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/api/media");
			then.status(201).body(payload);
		})
		.await;
	let request = RequestDescriptor::post(media_url(&server)).with_body("upload");
	let response = client.execute(request).await.expect("Upload should succeed.");

	assert_eq!(response.status.as_u16(), 201);
	assert_eq!(response.body, payload.as_bytes());
}

#[tokio::test]
async fn a_token_with_illegal_header_bytes_aborts_before_dispatch() {
	let server = MockServer::start_async().await;
	let (client, credentials, notifier, _) = build_test_client(&server.url("/api/auth/"));

	credentials.set("bad\ntoken");

	let mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/api/media");
			then.status(200);
		})
		.await;
	let error = client
		.get(media_url(&server))
		.await
		.expect_err("An unstampable token must fail the request.");

	assert!(matches!(error, Error::Config(ConfigError::InvalidHeaderValue(_))));
	assert_eq!(mock.hits_async().await, 0, "Nothing must reach the wire.");
	assert_eq!(notifier.visible_count(), 0, "Config failures carry no status and never notify.");
}
