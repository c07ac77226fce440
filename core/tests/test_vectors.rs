//! Verify build/parse methods against JSON test vectors stored in `test-vectors/`.
//!
//! Each vector file describes inputs, expected requests, simulated responses,
//! and either an expected parse result or an expected error. Comparing parsed
//! JSON (not raw strings) avoids false negatives from field-ordering
//! differences.

use serde_json::Value;
use todo_core::{ApiError, HttpMethod, HttpRequest, HttpResponse, Todo, TodoClient, UpdateTodo};

const BASE_URL: &str = "http://localhost:9090";

fn client() -> TodoClient {
    TodoClient::new(BASE_URL)
}

/// Parse the method string from test vectors into `HttpMethod`.
fn parse_method(s: &str) -> HttpMethod {
    match s {
        "GET" => HttpMethod::Get,
        "POST" => HttpMethod::Post,
        "PUT" => HttpMethod::Put,
        "PATCH" => HttpMethod::Patch,
        other => panic!("unknown method: {other}"),
    }
}

fn cases(raw: &str) -> Vec<Value> {
    let vectors: Value = serde_json::from_str(raw).unwrap();
    vectors["cases"].as_array().unwrap().clone()
}

/// Compare method, path and (if present) JSON body of a built request.
fn assert_request(name: &str, req: &HttpRequest, expected: &Value) {
    assert_eq!(req.method, parse_method(expected["method"].as_str().unwrap()), "{name}: method");
    assert_eq!(req.path, format!("{BASE_URL}{}", expected["path"].as_str().unwrap()), "{name}: path");
    match expected.get("body") {
        Some(body) => {
            let req_body: Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
            assert_eq!(&req_body, body, "{name}: body");
            assert_eq!(
                req.headers,
                vec![("content-type".to_string(), "application/json".to_string())],
                "{name}: headers"
            );
        }
        None => assert!(req.body.is_none(), "{name}: body should be None"),
    }
}

fn simulated_response(case: &Value) -> HttpResponse {
    let sim = &case["simulated_response"];
    HttpResponse {
        status: sim["status"].as_u64().unwrap() as u16,
        headers: Vec::new(),
        body: sim["body"].as_str().unwrap().to_string(),
    }
}

/// Check a parse result against `expected_error` or `expected_result`.
fn assert_outcome<T>(name: &str, case: &Value, result: Result<T, ApiError>)
where
    T: serde::de::DeserializeOwned + PartialEq + std::fmt::Debug,
{
    if let Some(expected_error) = case.get("expected_error") {
        let err = result.unwrap_err();
        match expected_error.as_str().unwrap() {
            "NotFound" => assert!(matches!(err, ApiError::NotFound), "{name}: expected NotFound"),
            "Conflict" => assert!(matches!(err, ApiError::Conflict(_)), "{name}: expected Conflict"),
            "BadRequest" => assert!(matches!(err, ApiError::BadRequest(_)), "{name}: expected BadRequest"),
            other => panic!("{name}: unknown expected_error: {other}"),
        }
    } else {
        let expected: T = serde_json::from_value(case["expected_result"].clone()).unwrap();
        assert_eq!(result.unwrap(), expected, "{name}: parsed result");
    }
}

#[test]
fn list_test_vectors() {
    let c = client();
    for case in cases(include_str!("../../test-vectors/list.json")) {
        let name = case["name"].as_str().unwrap();
        assert_request(name, &c.build_list_todos(), &case["expected_request"]);
        let result: Result<Vec<Todo>, _> = c.parse_list_todos(simulated_response(&case));
        assert_outcome(name, &case, result);
    }
}

#[test]
fn get_test_vectors() {
    let c = client();
    for case in cases(include_str!("../../test-vectors/get.json")) {
        let name = case["name"].as_str().unwrap();
        let id = case["input_id"].as_str().unwrap();
        assert_request(name, &c.build_get_todo(id), &case["expected_request"]);
        assert_outcome(name, &case, c.parse_get_todo(simulated_response(&case)));
    }
}

#[test]
fn create_test_vectors() {
    let c = client();
    for case in cases(include_str!("../../test-vectors/create.json")) {
        let name = case["name"].as_str().unwrap();
        let input: Todo = serde_json::from_value(case["input"].clone()).unwrap();
        let req = c.build_create_todo(&input).unwrap();
        assert_request(name, &req, &case["expected_request"]);
        assert_outcome(name, &case, c.parse_create_todo(simulated_response(&case)));
    }
}

#[test]
fn toggle_test_vectors() {
    let c = client();
    for case in cases(include_str!("../../test-vectors/toggle.json")) {
        let name = case["name"].as_str().unwrap();
        let id = case["input_id"].as_str().unwrap();
        assert_request(name, &c.build_toggle_todo(id), &case["expected_request"]);
        assert_outcome(name, &case, c.parse_toggle_todo(simulated_response(&case)));
    }
}

#[test]
fn update_test_vectors() {
    let c = client();
    for case in cases(include_str!("../../test-vectors/update.json")) {
        let name = case["name"].as_str().unwrap();
        let id = case["input_id"].as_str().unwrap();
        let input: UpdateTodo = serde_json::from_value(case["input"].clone()).unwrap();
        let req = c.build_update_todo(id, &input).unwrap();
        assert_request(name, &req, &case["expected_request"]);
        assert_outcome(name, &case, c.parse_update_todo(simulated_response(&case)));
    }
}
