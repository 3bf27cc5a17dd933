use crate::helpers::{spawn_app, valid_contact};

#[actix_web::test]
async fn contact_valid_request_ret201() {
    let app = spawn_app().await;

    let response = app.post_contact(&valid_contact()).await;

    assert_eq!(response.status().as_u16(), 201);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Contact form submitted successfully");
    assert_eq!(body["submission"]["id"], 1);
    assert_eq!(body["submission"]["name"], "Jo");
    assert!(body["submission"]["createdAt"].is_string());
    // Only a summary goes back to the sender.
    assert!(body["submission"].get("message").is_none());
}

#[actix_web::test]
async fn contact_persists_the_submission() {
    let app = spawn_app().await;

    app.post_contact(&valid_contact()).await;

    let stored = app.store.list_contact_submissions();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].email, "jo@x.com");
    assert_eq!(stored[0].subject, "question");
    assert_eq!(stored[0].message, "Hello there, testing.");

    let response = app.get_contact().await;
    assert_eq!(response.status().as_u16(), 200);
    let listed: serde_json::Value = response.json().await.unwrap();
    assert_eq!(listed.as_array().unwrap().len(), 1);
    assert_eq!(listed[0]["id"], 1);
    assert_eq!(listed[0]["name"], "Jo");
    assert_eq!(listed[0]["email"], "jo@x.com");
    assert_eq!(listed[0]["subject"], "question");
    assert_eq!(listed[0]["message"], "Hello there, testing.");
    assert!(listed[0]["createdAt"].is_string());
}

#[actix_web::test]
async fn contact_ids_increase_with_every_submission() {
    let app = spawn_app().await;

    let mut ids = Vec::new();
    for _ in 0..5 {
        let response = app.post_contact(&valid_contact()).await;
        let body: serde_json::Value = response.json().await.unwrap();
        ids.push(body["submission"]["id"].as_u64().unwrap());
    }

    assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    let listed: serde_json::Value = app.get_contact().await.json().await.unwrap();
    assert_eq!(listed.as_array().unwrap().len(), 5);
}

#[actix_web::test]
async fn contact_invalid_request_ret400() {
    let contact_with = |field: &str, value: serde_json::Value| {
        let mut body = valid_contact();
        body[field] = value;
        body
    };
    let test_cases = [
        (contact_with("name", "J".into()), "name too short", "name"),
        (contact_with("name", "   ".into()), "blank name", "name"),
        (contact_with("email", "this-aint-it".into()), "invalid email", "email"),
        (contact_with("subject", "".into()), "empty subject", "subject"),
        (contact_with("message", "Hi".into()), "message too short", "message"),
        (
            serde_json::json!({
                "email": "jo@x.com",
                "subject": "question",
                "message": "Hello there, testing."
            }),
            "missing name field",
            "name",
        ),
        (serde_json::json!({}), "missing all fields", ""),
    ];

    let app = spawn_app().await;
    for (body, case, field) in test_cases {
        let response = app.post_contact(&body).await;
        assert_eq!(
            response.status().as_u16(),
            400,
            "The api did not fail with code 400 when payload was {}",
            case
        );
        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(body["message"], "Validation error", "case: {}", case);
        let errors = body["errors"].as_str().unwrap();
        assert!(errors.contains(field), "case {}: {}", case, errors);
    }

    assert!(app.store.list_contact_submissions().is_empty());
}

#[actix_web::test]
async fn contact_malformed_json_ret400() {
    let app = spawn_app().await;

    let response = app.post_raw_contact("{\"name\": \"Jo\",").await;

    assert_eq!(response.status().as_u16(), 400);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Validation error");
}

#[actix_web::test]
async fn long_names_and_padded_messages_are_stored_as_sent() {
    let app = spawn_app().await;
    let name = "A".repeat(300);
    let message = format!("{}x", " ".repeat(10));
    let mut body = valid_contact();
    body["name"] = name.clone().into();
    body["message"] = message.clone().into();

    let response = app.post_contact(&body).await;

    assert_eq!(response.status().as_u16(), 201);
    let stored = app.store.list_contact_submissions();
    assert_eq!(stored[0].name, name);
    assert_eq!(stored[0].message, message);
}
