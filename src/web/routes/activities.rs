use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use crate::database::ActivityStore;
use crate::error::RegistryError;
use crate::models::{ActivityMap, MessageResponse};
use crate::services::activities_service;

#[derive(Debug, Deserialize)]
pub struct SignupQuery {
    pub email: String,
}

pub async fn list_activities_handler(State(store): State<ActivityStore>) -> Json<ActivityMap> {
    Json(activities_service::list_activities(&store).await)
}

pub async fn signup_handler(
    Path(activity): Path<String>,
    Query(query): Query<SignupQuery>,
    State(store): State<ActivityStore>,
) -> Result<Json<MessageResponse>, RegistryError> {
    let res = activities_service::signup(&store, &activity, &query.email).await?;
    Ok(Json(res))
}

pub async fn unregister_handler(
    Path(activity): Path<String>,
    Query(query): Query<SignupQuery>,
    State(store): State<ActivityStore>,
) -> Result<Json<MessageResponse>, RegistryError> {
    let res = activities_service::unregister(&store, &activity, &query.email).await?;
    Ok(Json(res))
}
