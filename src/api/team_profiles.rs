//! Team profile resource endpoints

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use tracing::debug;

use crate::api::middleware::CurrentCaller;
use crate::api::state::AppState;
use crate::api::types::{alerts, ApiError, Json};
use crate::domain::auth::may_modify_profile;
use crate::domain::team_profile::{ProfileId, TeamProfileRepresentation};

const ENTITY_NAME: &str = "teamProfile";

/// Create the team profile resource router
pub fn create_team_profiles_router() -> Router<AppState> {
    Router::new()
        .route(
            "/team-profiles",
            get(get_all_team_profiles).post(create_team_profile),
        )
        .route(
            "/team-profiles/{id}",
            get(get_team_profile)
                .put(update_team_profile)
                .patch(partial_update_team_profile)
                .delete(delete_team_profile),
        )
}

/// POST /api/team-profiles
pub async fn create_team_profile(
    State(state): State<AppState>,
    CurrentCaller(caller): CurrentCaller,
    Json(representation): Json<TeamProfileRepresentation>,
) -> Result<Response, ApiError> {
    debug!(name = ?representation.name, "REST request to save team profile");

    if representation.id.is_some() {
        return Err(
            ApiError::bad_request("A new team profile cannot already have an id")
                .with_param("id")
                .with_code("idexists"),
        );
    }

    if !may_modify_profile(&caller, None) {
        return Err(
            ApiError::authorization("Only admins can create team profiles")
                .with_code("accessdenied"),
        );
    }

    let saved = state.team_profile_service.save(representation).await?;
    let id = saved.id();

    let mut headers =
        alerts::entity_creation_alert(&state.application_name, ENTITY_NAME, &id.to_string());
    headers.insert(
        header::LOCATION,
        alerts::header_value(&format!("/api/team-profiles/{}", id)),
    );

    let body = Json(TeamProfileRepresentation::from(&saved));
    Ok((StatusCode::CREATED, headers, body).into_response())
}

/// PUT /api/team-profiles/{id}
pub async fn update_team_profile(
    State(state): State<AppState>,
    CurrentCaller(caller): CurrentCaller,
    Path(id): Path<i64>,
    Json(representation): Json<TeamProfileRepresentation>,
) -> Result<Response, ApiError> {
    debug!(id = %id, "REST request to update team profile");

    let Some(representation_id) = representation.id else {
        return Err(ApiError::bad_request("Invalid id")
            .with_param("id")
            .with_code("idnull"));
    };

    if representation_id != id {
        return Err(ApiError::bad_request("Invalid id")
            .with_param("id")
            .with_code("idinvalid"));
    }

    let stored = fetch_for_modification(&state, id).await?;

    // Membership comes from the stored entity, never the incoming body
    if !may_modify_profile(&caller, Some(&stored)) {
        return Err(ApiError::authorization(
            "Only admins or team members can edit the team profile",
        )
        .with_code("accessdenied"));
    }

    let updated = state.team_profile_service.update(representation).await?;

    let headers =
        alerts::entity_update_alert(&state.application_name, ENTITY_NAME, &id.to_string());
    let body = Json(TeamProfileRepresentation::from(&updated));
    Ok((StatusCode::OK, headers, body).into_response())
}

/// PATCH /api/team-profiles/{id}
///
/// Merge-patch semantics: only fields present in the body overwrite stored
/// values. Accepts `application/json` and `application/merge-patch+json`.
pub async fn partial_update_team_profile(
    State(state): State<AppState>,
    CurrentCaller(caller): CurrentCaller,
    Path(id): Path<i64>,
    Json(representation): Json<TeamProfileRepresentation>,
) -> Result<Response, ApiError> {
    debug!(id = %id, "REST request to partially update team profile");

    if representation.id != Some(id) {
        return Err(ApiError::bad_request("Invalid id")
            .with_param("id")
            .with_code("idinvalid"));
    }

    let stored = fetch_for_modification(&state, id).await?;

    if !may_modify_profile(&caller, Some(&stored)) {
        return Err(ApiError::authorization(
            "Only admins or team members can edit the team profile",
        )
        .with_code("accessdenied"));
    }

    // The merge itself may still report absence (entity deleted in between)
    let updated = state
        .team_profile_service
        .partial_update(representation)
        .await?
        .ok_or_else(|| {
            ApiError::not_found(format!("Team profile {} not found", id)).with_code("idnotfound")
        })?;

    let headers =
        alerts::entity_update_alert(&state.application_name, ENTITY_NAME, &id.to_string());
    let body = Json(TeamProfileRepresentation::from(&updated));
    Ok((StatusCode::OK, headers, body).into_response())
}

/// GET /api/team-profiles
pub async fn get_all_team_profiles(
    State(state): State<AppState>,
) -> Result<Json<Vec<TeamProfileRepresentation>>, ApiError> {
    debug!("REST request to get all team profiles");

    let profiles = state.team_profile_service.find_all().await?;

    Ok(Json(
        profiles.iter().map(TeamProfileRepresentation::from).collect(),
    ))
}

/// GET /api/team-profiles/{id}
pub async fn get_team_profile(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<TeamProfileRepresentation>, ApiError> {
    debug!(id = %id, "REST request to get team profile");

    let profile = state
        .team_profile_service
        .find_one(ProfileId::new(id))
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Team profile {} not found", id)))?;

    Ok(Json(TeamProfileRepresentation::from(&profile)))
}

/// DELETE /api/team-profiles/{id}
pub async fn delete_team_profile(
    State(state): State<AppState>,
    CurrentCaller(caller): CurrentCaller,
    Path(id): Path<i64>,
) -> Result<Response, ApiError> {
    debug!(id = %id, "REST request to delete team profile");

    if !may_modify_profile(&caller, None) {
        return Err(
            ApiError::authorization("Only admins can delete team profiles")
                .with_code("accessdenied"),
        );
    }

    // Deleting an absent id is indistinguishable from success
    state
        .team_profile_service
        .delete(ProfileId::new(id))
        .await?;

    let headers =
        alerts::entity_deletion_alert(&state.application_name, ENTITY_NAME, &id.to_string());
    Ok((StatusCode::NO_CONTENT, headers).into_response())
}

/// Single fetch serving both the existence check and the membership lookup;
/// not-found is reported before any authorization failure.
async fn fetch_for_modification(
    state: &AppState,
    id: i64,
) -> Result<crate::domain::team_profile::TeamProfile, ApiError> {
    state
        .team_profile_service
        .find_one(ProfileId::new(id))
        .await?
        .ok_or_else(|| {
            ApiError::not_found(format!("Team profile {} not found", id)).with_code("idnotfound")
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::Request;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::api::state::TeamProfileServiceTrait;
    use crate::domain::auth::Role;
    use crate::domain::team_profile::TeamMemberRepresentation;
    use crate::infrastructure::auth::jwt::issue_token;
    use crate::infrastructure::auth::{JwtConfig, JwtValidator};
    use crate::infrastructure::team_profile::{
        InMemoryTeamProfileRepository, TeamProfileService,
    };

    const SECRET: &str = "test-secret";
    const APP_NAME: &str = "teamManager";

    fn test_state() -> AppState {
        let repository = Arc::new(InMemoryTeamProfileRepository::new());
        let service: Arc<dyn TeamProfileServiceTrait> =
            Arc::new(TeamProfileService::new(repository));

        AppState::new(
            service,
            Arc::new(JwtValidator::new(&JwtConfig::new(SECRET))),
            APP_NAME,
        )
    }

    fn test_app(state: AppState) -> Router {
        Router::new()
            .nest("/api", create_team_profiles_router())
            .with_state(state)
    }

    fn admin_token() -> String {
        issue_token("root", &[Role::Admin], SECRET)
    }

    fn user_token(login: &str) -> String {
        issue_token(login, &[Role::User], SECRET)
    }

    fn request(method: &str, uri: &str, token: Option<&str>, body: Option<Value>) -> Request<Body> {
        let mut builder = Request::builder().method(method).uri(uri);

        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }

        match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        }
    }

    async fn response_json(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    async fn seed_profile(state: &AppState, name: &str, member_logins: &[&str]) -> i64 {
        let rep = TeamProfileRepresentation {
            name: Some(name.to_string()),
            motto: Some("Original motto".to_string()),
            team_members: Some(
                member_logins
                    .iter()
                    .map(|login| TeamMemberRepresentation {
                        login: login.to_string(),
                        display_name: None,
                    })
                    .collect(),
            ),
            ..Default::default()
        };

        state
            .team_profile_service
            .save(rep)
            .await
            .unwrap()
            .id()
            .value()
    }

    #[tokio::test]
    async fn test_create_as_admin() {
        let app = test_app(test_state());

        let response = app
            .oneshot(request(
                "POST",
                "/api/team-profiles",
                Some(&admin_token()),
                Some(json!({"name": "The A-Team"})),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(
            response.headers().get(header::LOCATION).unwrap(),
            "/api/team-profiles/1"
        );
        assert_eq!(
            response.headers().get(&alerts::ALERT_HEADER).unwrap(),
            "teamManager.teamProfile.created"
        );
        assert_eq!(response.headers().get(&alerts::PARAMS_HEADER).unwrap(), "1");

        let body = response_json(response).await;
        assert_eq!(body["id"], 1);
        assert_eq!(body["name"], "The A-Team");
    }

    #[tokio::test]
    async fn test_create_with_id_rejected_even_for_admin() {
        let app = test_app(test_state());

        let response = app
            .oneshot(request(
                "POST",
                "/api/team-profiles",
                Some(&admin_token()),
                Some(json!({"id": 7, "name": "The A-Team"})),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = response_json(response).await;
        assert_eq!(body["error"]["code"], "idexists");
    }

    #[tokio::test]
    async fn test_create_as_non_admin_rejected() {
        let app = test_app(test_state());

        let response = app
            .oneshot(request(
                "POST",
                "/api/team-profiles",
                Some(&user_token("jdoe")),
                Some(json!({"name": "The A-Team"})),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = response_json(response).await;
        assert_eq!(body["error"]["type"], "authorization_error");
    }

    #[tokio::test]
    async fn test_create_as_anonymous_rejected() {
        let app = test_app(test_state());

        let response = app
            .oneshot(request(
                "POST",
                "/api/team-profiles",
                None,
                Some(json!({"name": "The A-Team"})),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_invalid_token_rejected() {
        let app = test_app(test_state());

        let response = app
            .oneshot(request(
                "POST",
                "/api/team-profiles",
                Some("not-a-token"),
                Some(json!({"name": "The A-Team"})),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_update_by_member() {
        let state = test_state();
        let id = seed_profile(&state, "Old Name", &["jdoe"]).await;
        let app = test_app(state);

        let response = app
            .oneshot(request(
                "PUT",
                &format!("/api/team-profiles/{}", id),
                Some(&user_token("jdoe")),
                Some(json!({"id": id, "name": "New Name"})),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(&alerts::ALERT_HEADER).unwrap(),
            "teamManager.teamProfile.updated"
        );

        let body = response_json(response).await;
        assert_eq!(body["name"], "New Name");
    }

    #[tokio::test]
    async fn test_update_by_outsider_rejected_and_store_unchanged() {
        let state = test_state();
        let id = seed_profile(&state, "Old Name", &["jdoe"]).await;
        let app = test_app(state);

        let response = app
            .clone()
            .oneshot(request(
                "PUT",
                &format!("/api/team-profiles/{}", id),
                Some(&user_token("intruder")),
                Some(json!({"id": id, "name": "Hijacked"})),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = response_json(response).await;
        assert_eq!(body["error"]["type"], "authorization_error");

        let response = app
            .oneshot(request(
                "GET",
                &format!("/api/team-profiles/{}", id),
                None,
                None,
            ))
            .await
            .unwrap();
        let body = response_json(response).await;
        assert_eq!(body["name"], "Old Name");
    }

    #[tokio::test]
    async fn test_update_membership_from_stored_entity_not_body() {
        let state = test_state();
        let id = seed_profile(&state, "Old Name", &["jdoe"]).await;
        let app = test_app(state);

        // The intruder lists themselves in the submitted members; the stored
        // entity decides, so this must still fail.
        let response = app
            .oneshot(request(
                "PUT",
                &format!("/api/team-profiles/{}", id),
                Some(&user_token("intruder")),
                Some(json!({
                    "id": id,
                    "name": "Hijacked",
                    "teamMembers": [{"login": "intruder"}]
                })),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_update_missing_id() {
        let state = test_state();
        let id = seed_profile(&state, "Team", &[]).await;
        let app = test_app(state);

        let response = app
            .oneshot(request(
                "PUT",
                &format!("/api/team-profiles/{}", id),
                Some(&admin_token()),
                Some(json!({"name": "New Name"})),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = response_json(response).await;
        assert_eq!(body["error"]["code"], "idnull");
    }

    #[tokio::test]
    async fn test_update_id_mismatch() {
        let state = test_state();
        let id = seed_profile(&state, "Team", &[]).await;
        let app = test_app(state);

        let response = app
            .oneshot(request(
                "PUT",
                &format!("/api/team-profiles/{}", id),
                Some(&admin_token()),
                Some(json!({"id": id + 1, "name": "New Name"})),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = response_json(response).await;
        assert_eq!(body["error"]["code"], "idinvalid");
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_not_found() {
        let app = test_app(test_state());

        // Not-found must win over the authorization check, so use a caller
        // that would fail authorization too.
        let response = app
            .oneshot(request(
                "PUT",
                "/api/team-profiles/404",
                Some(&user_token("nobody")),
                Some(json!({"id": 404, "name": "Ghost"})),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_patch_merges_only_present_fields() {
        let state = test_state();
        let id = seed_profile(&state, "Old Name", &["jdoe"]).await;
        let app = test_app(state);

        let response = app
            .clone()
            .oneshot(request(
                "PATCH",
                &format!("/api/team-profiles/{}", id),
                Some(&user_token("jdoe")),
                Some(json!({"id": id, "name": "Patched Name"})),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = response_json(response).await;
        assert_eq!(body["name"], "Patched Name");
        // Omitted fields keep their stored values
        assert_eq!(body["motto"], "Original motto");
        assert_eq!(body["teamMembers"][0]["login"], "jdoe");
    }

    #[tokio::test]
    async fn test_patch_accepts_merge_patch_content_type() {
        let state = test_state();
        let id = seed_profile(&state, "Old Name", &["jdoe"]).await;
        let app = test_app(state);

        let request = Request::builder()
            .method("PATCH")
            .uri(format!("/api/team-profiles/{}", id))
            .header(header::AUTHORIZATION, format!("Bearer {}", admin_token()))
            .header(header::CONTENT_TYPE, "application/merge-patch+json")
            .body(Body::from(
                json!({"id": id, "motto": "Patched motto"}).to_string(),
            ))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = response_json(response).await;
        assert_eq!(body["motto"], "Patched motto");
        assert_eq!(body["name"], "Old Name");
    }

    #[tokio::test]
    async fn test_patch_id_mismatch() {
        let state = test_state();
        let id = seed_profile(&state, "Team", &[]).await;
        let app = test_app(state);

        let response = app
            .oneshot(request(
                "PATCH",
                &format!("/api/team-profiles/{}", id),
                Some(&admin_token()),
                Some(json!({"name": "No id"})),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = response_json(response).await;
        assert_eq!(body["error"]["code"], "idinvalid");
    }

    #[tokio::test]
    async fn test_patch_unknown_id_is_not_found() {
        let app = test_app(test_state());

        let response = app
            .oneshot(request(
                "PATCH",
                "/api/team-profiles/404",
                Some(&admin_token()),
                Some(json!({"id": 404, "name": "Ghost"})),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_get_and_list_ignore_caller_identity() {
        let state = test_state();
        seed_profile(&state, "Team A", &["jdoe"]).await;
        seed_profile(&state, "Team B", &[]).await;
        let app = test_app(state);

        let anonymous = app
            .clone()
            .oneshot(request("GET", "/api/team-profiles", None, None))
            .await
            .unwrap();
        assert_eq!(anonymous.status(), StatusCode::OK);
        let anonymous_body = response_json(anonymous).await;

        let authenticated = app
            .clone()
            .oneshot(request(
                "GET",
                "/api/team-profiles",
                Some(&user_token("outsider")),
                None,
            ))
            .await
            .unwrap();
        let authenticated_body = response_json(authenticated).await;

        assert_eq!(anonymous_body, authenticated_body);
        assert_eq!(anonymous_body.as_array().unwrap().len(), 2);

        let single = app
            .oneshot(request("GET", "/api/team-profiles/1", None, None))
            .await
            .unwrap();
        assert_eq!(single.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_get_unknown_id_is_not_found() {
        let app = test_app(test_state());

        let response = app
            .oneshot(request("GET", "/api/team-profiles/404", None, None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_as_non_admin_rejected() {
        let state = test_state();
        // A member may edit but never delete
        let id = seed_profile(&state, "Team", &["jdoe"]).await;
        let app = test_app(state);

        let response = app
            .clone()
            .oneshot(request(
                "DELETE",
                &format!("/api/team-profiles/{}", id),
                Some(&user_token("jdoe")),
                None,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let still_there = app
            .oneshot(request(
                "GET",
                &format!("/api/team-profiles/{}", id),
                None,
                None,
            ))
            .await
            .unwrap();
        assert_eq!(still_there.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_delete_as_admin() {
        let state = test_state();
        let id = seed_profile(&state, "Team", &[]).await;
        let app = test_app(state);

        let response = app
            .clone()
            .oneshot(request(
                "DELETE",
                &format!("/api/team-profiles/{}", id),
                Some(&admin_token()),
                None,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        assert_eq!(
            response.headers().get(&alerts::ALERT_HEADER).unwrap(),
            "teamManager.teamProfile.deleted"
        );

        let gone = app
            .oneshot(request(
                "GET",
                &format!("/api/team-profiles/{}", id),
                None,
                None,
            ))
            .await
            .unwrap();
        assert_eq!(gone.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let app = test_app(test_state());

        let response = app
            .oneshot(request(
                "DELETE",
                "/api/team-profiles/404",
                Some(&admin_token()),
                None,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn test_malformed_body_is_json_error() {
        let app = test_app(test_state());

        let request = Request::builder()
            .method("POST")
            .uri("/api/team-profiles")
            .header(header::AUTHORIZATION, format!("Bearer {}", admin_token()))
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert!(response.status().is_client_error());

        let body = response_json(response).await;
        assert_eq!(body["error"]["code"], "json_parse_error");
    }
}
