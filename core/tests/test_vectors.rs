//! Verify the request builders against JSON test vectors stored in `test-vectors/`.
//!
//! Each case names an operation, a path, an optional body and the request the
//! builder must produce. Bodies that are valid JSON are compared parsed (not
//! as raw strings) to avoid false negatives from field ordering; anything else
//! (the admin DELETE's `undefined`) is compared verbatim.

use admin_api_core::{HttpMethod, HttpRequest, JsonObject, Payload, RequestBuilder};
use serde_json::Value;

/// Parse the method string from test vectors into `HttpMethod`.
fn parse_method(s: &str) -> HttpMethod {
    match s {
        "GET" => HttpMethod::Get,
        "POST" => HttpMethod::Post,
        "PUT" => HttpMethod::Put,
        "PATCH" => HttpMethod::Patch,
        "DELETE" => HttpMethod::Delete,
        other => panic!("unknown method: {other}"),
    }
}

fn object_body(case: &Value) -> Option<JsonObject> {
    case.get("body").map(|b| b.as_object().expect("body must be an object").clone())
}

fn payload_body(case: &Value) -> Option<Payload> {
    case.get("body").map(|b| Payload::from_value(b).unwrap())
}

fn build(case: &Value) -> HttpRequest {
    let b = RequestBuilder::new();
    let path = case["path"].as_str().unwrap();
    match case["operation"].as_str().unwrap() {
        "get_resource" => b.build_get_resource(path),
        "post" => b.build_post(path, object_body(case)).unwrap(),
        "put" => b.build_put(path, object_body(case)).unwrap(),
        "patch" => b.build_patch(path, object_body(case)).unwrap(),
        "delete" => b.build_delete(path, object_body(case)).unwrap(),
        "get_auth_resource" => b.build_get_auth_resource(path),
        "post_auth" => b
            .build_post_auth(path, payload_body(case).expect("post_auth needs a body"))
            .unwrap(),
        "patch_auth" => b.build_patch_auth(path, payload_body(case)).unwrap(),
        "put_auth" => b.build_put_auth(path, object_body(case)).unwrap(),
        "delete_resource" => b.build_delete_resource(path, object_body(case)).unwrap(),
        other => panic!("unknown operation: {other}"),
    }
}

fn check_vectors(raw: &str) {
    let vectors: Value = serde_json::from_str(raw).unwrap();
    let prefix = vectors["prefix"].as_str().unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let expected = &case["expected_request"];
        let req = build(case);

        assert_eq!(req.method, parse_method(expected["method"].as_str().unwrap()), "{name}: method");
        assert_eq!(req.path, expected["path"].as_str().unwrap(), "{name}: path");
        assert!(req.path.starts_with(prefix), "{name}: prefix");

        let expected_headers: Vec<(String, String)> = expected["headers"]
            .as_array()
            .unwrap()
            .iter()
            .map(|h| {
                let arr = h.as_array().unwrap();
                (arr[0].as_str().unwrap().to_string(), arr[1].as_str().unwrap().to_string())
            })
            .collect();
        assert_eq!(req.headers, expected_headers, "{name}: headers");

        match expected["body"].as_str() {
            None => assert!(req.body.is_none(), "{name}: body should be None"),
            Some(expected_body) => {
                let body = req.body.as_deref().unwrap_or_else(|| panic!("{name}: missing body"));
                match serde_json::from_str::<Value>(expected_body) {
                    Ok(expected_json) => {
                        let sent: Value = serde_json::from_str(body).unwrap();
                        assert_eq!(sent, expected_json, "{name}: body");
                    }
                    Err(_) => assert_eq!(body, expected_body, "{name}: body"),
                }
            }
        }
    }
}

#[test]
fn admin_test_vectors() {
    check_vectors(include_str!("../../test-vectors/admin.json"));
}

#[test]
fn auth_test_vectors() {
    check_vectors(include_str!("../../test-vectors/auth.json"));
}
