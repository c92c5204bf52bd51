mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::{json, Value};

#[tokio::test]
async fn accounts_are_listable_and_fetchable() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();
    let session = common::open_session(&client, &server.base_url).await?;

    let listing = client.get(format!("{}/user", server.base_url)).send().await?;
    assert_eq!(listing.status(), StatusCode::OK);
    let users: Vec<Value> = listing.json().await?;
    let mine = users
        .iter()
        .find(|u| u["id"].as_i64() == Some(session.user_id))
        .expect("registered account shows up in the listing");
    assert_eq!(mine["email"], session.email.as_str());
    assert!(mine.get("password").is_none());

    let by_path = client
        .get(format!("{}/user/{}", server.base_url, session.user_id))
        .send()
        .await?;
    assert_eq!(by_path.status(), StatusCode::OK);
    let user: Value = by_path.json().await?;
    assert_eq!(user["email"], session.email.as_str());

    let by_body = client
        .post(format!("{}/user", server.base_url))
        .json(&json!({"id": session.user_id}))
        .send()
        .await?;
    assert_eq!(by_body.status(), StatusCode::OK);
    let user: Value = by_body.json().await?;
    assert_eq!(user["id"].as_i64(), Some(session.user_id));
    Ok(())
}

#[tokio::test]
async fn account_lookups_report_misses() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let by_path = client
        .get(format!("{}/user/99999999", server.base_url))
        .send()
        .await?;
    assert_eq!(by_path.status(), StatusCode::NOT_FOUND);
    let body: Value = by_path.json().await?;
    assert_eq!(body["message"], "user not found");

    let no_id = client
        .post(format!("{}/user", server.base_url))
        .json(&json!({}))
        .send()
        .await?;
    assert_eq!(no_id.status(), StatusCode::BAD_REQUEST);
    let body: Value = no_id.json().await?;
    assert_eq!(body["message"], "id is required");
    Ok(())
}

#[tokio::test]
async fn update_rewrites_profile_and_rehashes_password() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();
    let session = common::open_session(&client, &server.base_url).await?;
    let new_email = common::unique_email();

    let res = client
        .put(format!("{}/user/update", server.base_url))
        .json(&json!({
            "id": session.user_id,
            "email": new_email,
            "first_name": "Wedge",
            "password": "rogue-leader",
            "country": "Corellia",
        }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);

    let user: Value = res.json().await?;
    assert_eq!(user["email"], new_email);
    assert_eq!(user["first_name"], "Wedge");
    assert_eq!(user["country"], "Corellia");
    assert!(user.get("password").is_none());

    // The old credentials no longer work, the new ones do.
    let stale = client
        .post(format!("{}/login", server.base_url))
        .json(&json!({"email": session.email, "password": session.password}))
        .send()
        .await?;
    assert_eq!(stale.status(), StatusCode::OK);
    let stale_body: Value = stale.json().await?;
    assert!(stale_body.get("token").is_none());

    let fresh = common::login(&client, &server.base_url, &new_email, "rogue-leader").await?;
    assert!(!fresh.is_empty());
    Ok(())
}

#[tokio::test]
async fn update_missing_account_is_404() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .put(format!("{}/user/update", server.base_url))
        .json(&json!({
            "id": 99999999,
            "email": common::unique_email(),
            "first_name": "Ghost",
            "password": "nobody-home",
        }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn deleting_an_account_removes_it_and_its_favorites() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();
    let session = common::open_session(&client, &server.base_url).await?;

    // Give the account a favorite first.
    let created: Value = client
        .post(format!("{}/add/planet", server.base_url))
        .bearer_auth(&session.token)
        .json(&json!({
            "name": "Scarif",
            "url": "https://swapi.dev/api/planets/62/",
            "diameter": 9112.0,
            "rotation_period": 27.0,
            "orbital_period": 423,
            "gravity": 1.0,
            "population": 150000.0,
            "climate": "tropical",
        }))
        .send()
        .await?
        .json()
        .await?;
    let uid = created["planet"]["uid"].as_i64().expect("uid");

    let favorited = client
        .post(format!("{}/favorite/planet/{}", server.base_url, uid))
        .json(&json!({"user_id": session.user_id}))
        .send()
        .await?;
    assert_eq!(favorited.status(), StatusCode::OK);

    let deleted = client
        .delete(format!("{}/user/delete", server.base_url))
        .json(&json!({"id": session.user_id}))
        .send()
        .await?;
    assert_eq!(deleted.status(), StatusCode::OK);
    let body: Value = deleted.json().await?;
    assert_eq!(body["message"], "user deleted");

    let gone = client
        .get(format!("{}/user/{}", server.base_url, session.user_id))
        .send()
        .await?;
    assert_eq!(gone.status(), StatusCode::NOT_FOUND);

    let favorites = client
        .post(format!("{}/favorites", server.base_url))
        .json(&json!({"user_id": session.user_id}))
        .send()
        .await?;
    assert_eq!(favorites.status(), StatusCode::NOT_FOUND);

    // The token still carries a valid signature, but its account is gone.
    let probe = client
        .get(format!("{}/protected", server.base_url))
        .bearer_auth(&session.token)
        .send()
        .await?;
    assert_eq!(probe.status(), StatusCode::NOT_FOUND);

    let second_delete = client
        .delete(format!("{}/user/delete", server.base_url))
        .json(&json!({"id": session.user_id}))
        .send()
        .await?;
    assert_eq!(second_delete.status(), StatusCode::NOT_FOUND);
    Ok(())
}
