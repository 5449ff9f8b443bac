use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use serde::Serialize;
use tracing::debug;

use crate::catalog::models::{Contact, GalleryItem, MenuItem, Project, Review};
use crate::errors::AppError;
use crate::state::AppState;

/// `{items: [...]}` envelope shared by every listing route.
#[derive(Serialize)]
pub struct ItemsResponse<T> {
    pub items: Vec<T>,
}

impl<T: Clone> ItemsResponse<T> {
    fn from_slice(items: &[T]) -> Json<Self> {
        Json(ItemsResponse {
            items: items.to_vec(),
        })
    }
}

/// Raw query pairs, in request order. A repeated key is not a decode error;
/// the last occurrence wins.
type QueryPairs = Vec<(String, String)>;

fn required_param(
    query: Result<Query<QueryPairs>, QueryRejection>,
    name: &str,
) -> Result<String, AppError> {
    let Query(pairs) = query?;
    pairs
        .into_iter()
        .rev()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value)
        .ok_or_else(|| AppError::Validation(format!("Missing required query parameter `{name}`")))
}

#[derive(Serialize)]
pub struct ProjectsResponse {
    pub tech: String,
    pub projects: Vec<Project>,
}

#[derive(Serialize)]
pub struct GalleryResponse {
    pub focus: String,
    pub items: Vec<GalleryItem>,
}

/// GET /api/menu
pub async fn handle_menu(State(state): State<AppState>) -> Json<ItemsResponse<MenuItem>> {
    ItemsResponse::from_slice(state.catalog.menu())
}

/// GET /api/frontend/tech
pub async fn handle_tech_stack(State(state): State<AppState>) -> Json<ItemsResponse<String>> {
    ItemsResponse::from_slice(state.catalog.tech_stack())
}

/// GET /api/projects?tech=<name>
/// Unknown tech names yield an empty list, not an error.
pub async fn handle_projects(
    State(state): State<AppState>,
    query: Result<Query<QueryPairs>, QueryRejection>,
) -> Result<Json<ProjectsResponse>, AppError> {
    let tech = required_param(query, "tech")?;
    let projects = state.catalog.projects(&tech).to_vec();
    debug!(tech = %tech, count = projects.len(), "projects lookup");
    Ok(Json(ProjectsResponse { tech, projects }))
}

/// GET /api/design/focus
pub async fn handle_design_focus(State(state): State<AppState>) -> Json<ItemsResponse<String>> {
    ItemsResponse::from_slice(state.catalog.design_focus())
}

/// GET /api/design/gallery?focus=<name>
pub async fn handle_gallery(
    State(state): State<AppState>,
    query: Result<Query<QueryPairs>, QueryRejection>,
) -> Result<Json<GalleryResponse>, AppError> {
    let focus = required_param(query, "focus")?;
    let items = state.catalog.gallery(&focus).to_vec();
    debug!(focus = %focus, count = items.len(), "gallery lookup");
    Ok(Json(GalleryResponse { focus, items }))
}

/// GET /api/reviews
pub async fn handle_reviews(State(state): State<AppState>) -> Json<ItemsResponse<Review>> {
    ItemsResponse::from_slice(state.catalog.reviews())
}

/// GET /api/contact
pub async fn handle_contacts(State(state): State<AppState>) -> Json<ItemsResponse<Contact>> {
    ItemsResponse::from_slice(state.catalog.contacts())
}
