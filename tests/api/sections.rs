use serde_json::json;

use crate::helpers::body_text;

#[wire_macros::test]
async fn messages_section_renders_only_its_list() {
    // Arrange
    app.mock_backend(
        "/message/alice",
        json!([{"message_text": "hi", "created": "2018-03-01T14:05:00Z", "user": 1}]),
    )
    .await;

    // Act
    let response = app.get_profile_section("alice", "messages").await;

    // Assert
    assert_eq!(200, response.status().as_u16());
    let body = body_text(response).await;
    assert!(body.starts_with("<ul id='messages-list'"));
    assert!(body.ends_with("</ul>"));
    assert_eq!(1, body.matches("Posted on ").count());
    assert!(!body.contains("followers-header"));
}

#[wire_macros::test]
async fn recommended_users_section_renders_placeholder_for_empty_list() {
    // Arrange
    app.mock_backend("/get-recommended-users/alice", json!([]))
        .await;

    // Act
    let body = body_text(app.get_profile_section("alice", "recommended-users").await).await;

    // Assert
    assert_eq!(
        1,
        body.matches("There are no users to recommend at this time")
            .count()
    );
}

#[wire_macros::test]
async fn followers_section_resolves_every_follower() {
    // Arrange
    app.mock_backend(
        "/followers/alice",
        json!([{"follower_id": 2}, {"follower_id": 3}]),
    )
    .await;
    app.mock_backend(
        "/users/2/3/",
        json!([{"username": "bob"}, {"username": "carol"}]),
    )
    .await;

    // Act
    let body = body_text(app.get_profile_section("alice", "followers").await).await;

    // Assert
    assert!(body.contains("href='/profile/bob'>visit</a>"));
    assert!(body.contains("href='/profile/carol'>visit</a>"));
    assert_eq!(2, body.matches("btn-default").count());
}

#[wire_macros::test]
async fn unmocked_backend_endpoint_leaves_section_loading() {
    // Act
    let response = app.get_profile_section("alice", "following").await;

    // Assert
    assert_eq!(200, response.status().as_u16());
    let body = body_text(response).await;
    assert!(body.contains("loader-container"));
}

#[wire_macros::test]
async fn unknown_section_returns_404() {
    // Act
    let response = app.get_profile_section("alice", "wires").await;

    // Assert
    assert_eq!(404, response.status().as_u16());
}

#[wire_macros::test]
async fn section_returns_400_for_invalid_username() {
    // Act
    let response = app.get_profile_section("a%20b", "messages").await;

    // Assert
    assert_eq!(400, response.status().as_u16());
}
