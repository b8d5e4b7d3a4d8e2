//! Employee API integration tests

mod common;

use cafe_server::{OneshotRouter, build_router};
use common::{body_json, delete, get, json_request, seeded_state};
use http::{Method, StatusCode};
use serde_json::json;

fn first_cafe_id(state: &cafe_server::ServerState) -> String {
    state.store().cafes.list()[0].id.to_string()
}

#[tokio::test]
async fn test_list_joins_cafe_names_and_orders_by_days_worked() {
    let state = seeded_state();
    let mut router = build_router();

    let response = router.oneshot(&state, get("/api/employees")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let employees = body.as_array().unwrap();
    assert_eq!(employees.len(), 3);

    // daysWorked 降序：入职最早的 Ava Lee 排最前
    assert_eq!(employees[0]["name"], "Ava Lee");
    assert_eq!(employees[1]["name"], "Roy Tan");
    assert_eq!(employees[2]["name"], "Teck Wu");

    assert_eq!(employees[0]["cafeName"], "Cafe Mocha");
    assert_eq!(employees[1]["cafeName"], "The Populus Coffee & Food Co.");
    assert_eq!(employees[2]["cafeName"], "Cafe Mocha");

    for employee in employees {
        let id = employee["id"].as_str().unwrap();
        assert_eq!(id.len(), 9);
        assert!(id.starts_with("UI"));
        assert!(employee["daysWorked"].as_i64().unwrap() > 0);
    }
}

#[tokio::test]
async fn test_create_employee_assigns_generated_id() {
    let state = seeded_state();
    let mut router = build_router();

    let payload = json!({
        "name": "Mei Lin",
        "emailAddress": "mei.lin@example.com",
        "phoneNumber": "91234567",
        "gender": "Female",
        "cafeId": first_cafe_id(&state),
        "employmentDate": "2025-02-01"
    });
    let response = router
        .oneshot(
            &state,
            json_request(Method::POST, "/api/employees", &payload),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = body_json(response).await;
    assert_eq!(body["status"], "success");

    let id = body["data"]["id"].as_str().unwrap();
    assert!(id.starts_with("UI"));
    assert_eq!(id.len(), 9);
    assert!(id[2..].bytes().any(|b| b.is_ascii_digit()));

    let response = router
        .oneshot(&state, get(&format!("/api/employees/{id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let fetched = body_json(response).await;
    assert_eq!(fetched["emailAddress"], "mei.lin@example.com");
    assert_eq!(fetched["employmentDate"], "2025-02-01");

    assert_eq!(state.store().employees.len(), 4);
}

#[tokio::test]
async fn test_duplicate_email_returns_conflict_without_insert() {
    let state = seeded_state();
    let mut router = build_router();

    // 种子员工 Teck Wu 的邮箱
    let payload = json!({
        "name": "Impostor",
        "emailAddress": "teck.wu@cafemocha.com",
        "phoneNumber": "91234567",
        "gender": "Male"
    });
    let response = router
        .oneshot(
            &state,
            json_request(Method::POST, "/api/employees", &payload),
        )
        .await
        .unwrap();
    // 冲突不是 HTTP 错误
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["status"], "conflict");
    assert_eq!(
        body["message"],
        "Employee with the same email already exists."
    );
    assert_eq!(body["data"]["name"], "Impostor");

    assert_eq!(state.store().employees.len(), 3); // store size unchanged
}

#[tokio::test]
async fn test_create_rejects_bad_phone_and_dangling_cafe() {
    let state = seeded_state();
    let mut router = build_router();

    let bad_phone = json!({
        "name": "Bad Phone",
        "emailAddress": "bad.phone@example.com",
        "phoneNumber": "12345678",
        "gender": "Male"
    });
    let response = router
        .oneshot(
            &state,
            json_request(Method::POST, "/api/employees", &bad_phone),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let dangling = json!({
        "name": "Dangling Ref",
        "emailAddress": "dangling@example.com",
        "phoneNumber": "82345678",
        "gender": "Male",
        "cafeId": uuid::Uuid::new_v4().to_string()
    });
    let response = router
        .oneshot(
            &state,
            json_request(Method::POST, "/api/employees", &dangling),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    assert_eq!(state.store().employees.len(), 3);
}

#[tokio::test]
async fn test_create_rejects_unknown_gender() {
    let state = seeded_state();
    let mut router = build_router();

    let payload = json!({
        "name": "Unknown Gender",
        "emailAddress": "unknown@example.com",
        "phoneNumber": "82345678",
        "gender": "Other"
    });
    let response = router
        .oneshot(
            &state,
            json_request(Method::POST, "/api/employees", &payload),
        )
        .await
        .unwrap();
    // 枚举在反序列化阶段被拒绝
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(state.store().employees.len(), 3);
}

#[tokio::test]
async fn test_create_rejects_future_employment_date() {
    let state = seeded_state();
    let mut router = build_router();

    let next_year = chrono::Utc::now().date_naive() + chrono::Duration::days(400);
    let payload = json!({
        "name": "Time Traveler",
        "emailAddress": "future@example.com",
        "phoneNumber": "82345678",
        "gender": "Female",
        "employmentDate": next_year.format("%Y-%m-%d").to_string()
    });
    let response = router
        .oneshot(
            &state,
            json_request(Method::POST, "/api/employees", &payload),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_employee_id_mismatch() {
    let state = seeded_state();
    let mut router = build_router();

    let employees = state.store().employees.list();
    let employee = &employees[0];
    let payload = serde_json::to_value(employee).unwrap();

    let other_id = &employees[1].id;
    let response = router
        .oneshot(
            &state,
            json_request(
                Method::PUT,
                &format!("/api/employees/{other_id}"),
                &payload,
            ),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_employee_success() {
    let state = seeded_state();
    let mut router = build_router();

    let mut employee = state.store().employees.list().remove(0);
    employee.phone_number = "98765432".into();
    let payload = serde_json::to_value(&employee).unwrap();

    let response = router
        .oneshot(
            &state,
            json_request(
                Method::PUT,
                &format!("/api/employees/{}", employee.id),
                &payload,
            ),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = body_json(response).await;
    assert_eq!(body["status"], "success");

    let stored = state.store().employees.get(&employee.id).unwrap();
    assert_eq!(stored.phone_number, "98765432");
}

#[tokio::test]
async fn test_update_missing_employee_yields_error_envelope() {
    let state = seeded_state();
    let mut router = build_router();

    let ghost = json!({
        "id": "UIGHOST12",
        "name": "Ghost",
        "emailAddress": "ghost@example.com",
        "phoneNumber": "82345678",
        "gender": "Male"
    });
    let response = router
        .oneshot(
            &state,
            json_request(Method::PUT, "/api/employees/UIGHOST12", &ghost),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = body_json(response).await;
    assert_eq!(body["status"], "error");
    assert!(body["details"].is_string());
    assert_eq!(body["data"]["id"], "UIGHOST12");
}

#[tokio::test]
async fn test_delete_employee_then_404() {
    let state = seeded_state();
    let mut router = build_router();

    let id = state.store().employees.list()[0].id.clone();
    let response = router
        .oneshot(&state, delete(&format!("/api/employees/{id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = router
        .oneshot(&state, get(&format!("/api/employees/{id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = router
        .oneshot(&state, delete("/api/employees/UIMISSING"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_deleting_cafe_leaves_dangling_reference_projected_empty() {
    let state = seeded_state();
    let mut router = build_router();

    // 删除第一家咖啡馆后，挂在它下面的员工 cafeName 投影为空串
    let first_id = first_cafe_id(&state);
    let response = router
        .oneshot(&state, delete(&format!("/api/cafes/{first_id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = router.oneshot(&state, get("/api/employees")).await.unwrap();
    let body = body_json(response).await;
    let ava = body
        .as_array()
        .unwrap()
        .iter()
        .find(|e| e["name"] == "Ava Lee")
        .unwrap()
        .clone();
    assert_eq!(ava["cafeName"], "");
}
