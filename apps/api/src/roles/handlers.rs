//! Axum route handlers for role knowledge-base lookups.

use axum::{
    extract::{Path, Query},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::roles::{
    canonical_role_name, get_role_keywords, match_role_from_title, supported_roles, RoleProfile,
};

#[derive(Debug, Serialize)]
pub struct RolesResponse {
    pub roles: Vec<&'static str>,
}

#[derive(Debug, Serialize)]
pub struct RoleProfileResponse {
    pub role: &'static str,
    pub profile: &'static RoleProfile,
}

#[derive(Debug, Deserialize)]
pub struct MatchTitleQuery {
    pub title: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MatchTitleResponse {
    pub title: String,
    pub role: &'static str,
    pub profile: &'static RoleProfile,
}

/// GET /api/v1/roles
pub async fn handle_list_roles() -> Json<RolesResponse> {
    Json(RolesResponse {
        roles: supported_roles(),
    })
}

/// GET /api/v1/roles/:role
///
/// Unknown roles resolve to the generic professional profile rather than 404.
pub async fn handle_get_role(Path(role): Path<String>) -> Json<RoleProfileResponse> {
    Json(RoleProfileResponse {
        role: canonical_role_name(&role),
        profile: get_role_keywords(&role),
    })
}

/// GET /api/v1/roles/match?title=...
pub async fn handle_match_title(
    Query(query): Query<MatchTitleQuery>,
) -> Result<Json<MatchTitleResponse>, AppError> {
    let title = query
        .title
        .filter(|t| !t.trim().is_empty())
        .ok_or_else(|| AppError::Validation("title query parameter is required".to_string()))?;

    let role = match_role_from_title(&title);

    Ok(Json(MatchTitleResponse {
        title,
        role,
        profile: get_role_keywords(role),
    }))
}
