use actix_web::body::to_bytes;
use actix_web::http::header::ContentType;
use actix_web::http::StatusCode;
use actix_web::test::{self, TestRequest};
use actix_web::{web, App, HttpRequest, HttpResponse};
use apigen_web::{serve_my_api, MyApi, OtherApi};
use serde_json::{json, Value};

const AUTH: (&str, &str) = ("X-Auth", "100500");

async fn read(resp: HttpResponse) -> (StatusCode, Value) {
    let status = resp.status();
    let bytes = to_bytes(resp.into_body()).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn get(uri: &str) -> HttpRequest {
    TestRequest::get().uri(uri).to_http_request()
}

fn post_form(uri: &str, auth: bool) -> HttpRequest {
    let req = TestRequest::post()
        .uri(uri)
        .insert_header(ContentType::form_url_encoded());
    if auth {
        req.insert_header(AUTH).to_http_request()
    } else {
        req.to_http_request()
    }
}

async fn my(api: &MyApi, req: HttpRequest, body: &str) -> (StatusCode, Value) {
    read(api.serve_http(&req, body.as_bytes()).await).await
}

async fn other(api: &OtherApi, req: HttpRequest, body: &str) -> (StatusCode, Value) {
    read(api.serve_http(&req, body.as_bytes()).await).await
}

fn error(message: &str) -> Value {
    json!({ "error": message })
}

#[actix_web::test]
async fn test_profile() {
    let api = MyApi::default();

    assert_eq!(
        my(&api, get("/user/profile?login=alice"), "").await,
        (
            StatusCode::OK,
            json!({
                "error": "",
                "response": {"id": 42, "login": "alice", "full_name": "Alice Liddell", "status": "user"}
            })
        )
    );

    // No verb restriction, body values are read too.
    let (status, _) = my(&api, post_form("/user/profile", false), "login=alice").await;
    assert_eq!(status, StatusCode::OK);
}

#[actix_web::test]
async fn test_profile_errors() {
    let api = MyApi::default();

    assert_eq!(
        my(&api, get("/user/profile"), "").await,
        (StatusCode::BAD_REQUEST, error("login must me not empty"))
    );
    assert_eq!(
        my(&api, get("/user/profile?login=bob"), "").await,
        (StatusCode::NOT_FOUND, error("user not exist"))
    );
    assert_eq!(
        my(&api, get("/user/profile?login=bad_user"), "").await,
        (StatusCode::INTERNAL_SERVER_ERROR, error("bad user"))
    );
}

#[actix_web::test]
async fn test_method_is_checked_before_auth() {
    let api = MyApi::default();
    assert_eq!(
        my(&api, get("/user/create?login=neo_anderson&age=30"), "").await,
        (StatusCode::NOT_ACCEPTABLE, error("bad method"))
    );
}

#[actix_web::test]
async fn test_auth_is_checked_before_validation() {
    let api = MyApi::default();
    assert_eq!(
        my(&api, post_form("/user/create", false), "login=x").await,
        (StatusCode::FORBIDDEN, error("unauthorized"))
    );

    let req = TestRequest::post()
        .uri("/user/create")
        .insert_header(("X-Auth", "wrong"))
        .to_http_request();
    assert_eq!(
        my(&api, req, "").await,
        (StatusCode::FORBIDDEN, error("unauthorized"))
    );
}

#[actix_web::test]
async fn test_login_rules_end_to_end() {
    let api = MyApi::default();

    assert_eq!(
        my(&api, post_form("/user/create", true), "login=&age=30").await,
        (StatusCode::BAD_REQUEST, error("login must me not empty"))
    );
    assert_eq!(
        my(&api, post_form("/user/create", true), "login=short&age=30").await,
        (StatusCode::BAD_REQUEST, error("login len must be >= 10"))
    );
    let (status, body) = my(&api, post_form("/user/create", true), "login=neo_anderson&age=30").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"error": "", "response": {"id": 43}}));
}

#[actix_web::test]
async fn test_create_applies_defaults_and_param_names() {
    let api = MyApi::default();

    let (status, _) = my(
        &api,
        post_form("/user/create", true),
        "login=neo_anderson&full_name=Thomas+Anderson&age=30",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(api.len(), 2);

    let (_, body) = my(&api, get("/user/profile?login=neo_anderson"), "").await;
    assert_eq!(body["response"]["full_name"], "Thomas Anderson");
    assert_eq!(body["response"]["status"], "user");

    assert_eq!(
        my(&api, post_form("/user/create", true), "login=neo_anderson&age=30").await,
        (StatusCode::CONFLICT, error("user exists"))
    );
}

#[actix_web::test]
async fn test_enum_lists_alternatives_in_order() {
    let api = MyApi::default();
    assert_eq!(
        my(&api, post_form("/user/create", true), "login=neo_anderson&status=guest&age=30").await,
        (
            StatusCode::BAD_REQUEST,
            error("status must be one of [user, moderator, admin]")
        )
    );
    let (status, _) = my(
        &api,
        post_form("/user/create", true),
        "login=neo_anderson&status=moderator&age=30",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

#[actix_web::test]
async fn test_int_bounds() {
    let api = MyApi::default();
    let create = |age: &str| format!("login=neo_anderson&age={}", age);

    assert_eq!(
        my(&api, post_form("/user/create", true), &create("129")).await,
        (StatusCode::BAD_REQUEST, error("age must be <= 128"))
    );
    assert_eq!(
        my(&api, post_form("/user/create", true), &create("-1")).await,
        (StatusCode::BAD_REQUEST, error("age must be >= 0"))
    );
    assert_eq!(
        my(&api, post_form("/user/create", true), &create("old")).await,
        (StatusCode::BAD_REQUEST, error("age must be int"))
    );
    // Int fields without a default are parsed even when absent.
    assert_eq!(
        my(&api, post_form("/user/create", true), "login=neo_anderson").await,
        (StatusCode::BAD_REQUEST, error("age must be int"))
    );
    let (status, _) = my(&api, post_form("/user/create", true), &create("128")).await;
    assert_eq!(status, StatusCode::OK);
}

#[actix_web::test]
async fn test_first_failing_field_wins() {
    let api = MyApi::default();
    assert_eq!(
        my(&api, post_form("/user/create", true), "login=short&status=guest&age=500").await,
        (StatusCode::BAD_REQUEST, error("login len must be >= 10"))
    );
}

#[actix_web::test]
async fn test_string_max_compares_text_not_length() {
    let api = MyApi::default();

    // "6" sorts after "50" although it is one character long.
    assert_eq!(
        my(&api, get("/user/search?query=6"), "").await,
        (StatusCode::BAD_REQUEST, error("query must be <= 50"))
    );
    assert_eq!(
        my(&api, get("/user/search?query=ali"), "").await,
        (StatusCode::BAD_REQUEST, error("query must be <= 50"))
    );
    // "100000" sorts before "50" although it is six characters long.
    assert_eq!(
        my(&api, get("/user/search?query=100000"), "").await,
        (StatusCode::OK, json!({"error": "", "response": []}))
    );
}

#[actix_web::test]
async fn test_search_limit() {
    let api = MyApi::default();

    let (status, body) = my(&api, get("/user/search"), "").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["response"][0]["login"], "alice");

    assert_eq!(
        my(&api, get("/user/search?limit=0"), "").await,
        (StatusCode::BAD_REQUEST, error("limit must be >= 1"))
    );
    assert_eq!(
        my(&api, get("/user/search?limit=101"), "").await,
        (StatusCode::BAD_REQUEST, error("limit must be <= 100"))
    );
    assert_eq!(
        my(&api, get("/user/search?limit=ten"), "").await,
        (StatusCode::BAD_REQUEST, error("limit must be int"))
    );
    assert_eq!(
        my(&api, post_form("/user/search", false), "").await,
        (StatusCode::NOT_ACCEPTABLE, error("bad method"))
    );
}

#[actix_web::test]
async fn test_unknown_path() {
    let api = MyApi::default();
    assert_eq!(
        my(&api, get("/user/delete"), "").await,
        (StatusCode::NOT_FOUND, error("unknown method"))
    );
    // Matching is exact.
    assert_eq!(
        my(&api, get("/user/profile/"), "").await,
        (StatusCode::NOT_FOUND, error("unknown method"))
    );
}

#[actix_web::test]
async fn test_routes_do_not_cross_receivers() {
    let api = OtherApi;
    assert_eq!(
        other(&api, get("/user/profile?login=alice"), "").await,
        (StatusCode::NOT_FOUND, error("unknown method"))
    );
}

#[actix_web::test]
async fn test_other_api_create() {
    let api = OtherApi;

    assert_eq!(
        other(
            &api,
            post_form("/user/create", true),
            "username=neo&account_name=Neo&level=50"
        )
        .await,
        (
            StatusCode::OK,
            json!({
                "error": "",
                "response": {"id": 12, "login": "neo", "full_name": "Neo", "level": 50}
            })
        )
    );
    assert_eq!(
        other(&api, post_form("/user/create", true), "username=neo&level=51").await,
        (StatusCode::BAD_REQUEST, error("level must be <= 50"))
    );
    assert_eq!(
        other(&api, post_form("/user/create", true), "username=ne&level=5").await,
        (StatusCode::BAD_REQUEST, error("username len must be >= 3"))
    );
    assert_eq!(
        other(&api, post_form("/user/create", true), "username=neo&class=bard&level=5").await,
        (
            StatusCode::BAD_REQUEST,
            error("class must be one of [warrior, sorcerer, rouge]")
        )
    );
    assert_eq!(
        other(&api, post_form("/user/create", true), "username=taken&level=5").await,
        (StatusCode::CONFLICT, error("user exists"))
    );
}

#[actix_web::test]
async fn test_served_through_actix_app() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(MyApi::default()))
            .default_service(web::to(serve_my_api)),
    )
    .await;

    let req = TestRequest::post()
        .uri("/user/create")
        .insert_header(ContentType::form_url_encoded())
        .insert_header(AUTH)
        .set_payload("login=neo_anderson&age=30")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({"error": "", "response": {"id": 43}}));

    let req = TestRequest::get().uri("/nowhere").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
