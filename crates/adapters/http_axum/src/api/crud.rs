//! JSON REST handlers shared by every record kind.
//!
//! One set of generic handlers is mounted once per service, each instance
//! holding its own [`CrudService`] as router state.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use serde::de::DeserializeOwned;

use bank_app::mapping::RecordMapper;
use bank_app::ports::{EntityStore, IdOf};
use bank_app::services::CrudService;
use bank_domain::error::ValidationError;

use crate::error::ApiError;

/// Possible responses from the bulk read endpoint.
pub enum ListResponse<T> {
    Ok(Json<Vec<T>>),
}

impl<T: Serialize> IntoResponse for ListResponse<T> {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the read and update endpoints.
pub enum GetResponse<T> {
    Ok(Json<T>),
}

impl<T: Serialize> IntoResponse for GetResponse<T> {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse<T> {
    Created(Json<T>),
}

impl<T: Serialize> IntoResponse for CreateResponse<T> {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Build the sub-router for one service, to be nested under its base path.
pub fn routes<S, M>(service: Arc<CrudService<S, M>>) -> Router
where
    S: EntityStore + 'static,
    M: RecordMapper<Record = S::Record> + 'static,
    M::Dto: Serialize + DeserializeOwned,
{
    Router::new()
        .route("/", get(read_all::<S, M>).post(create::<S, M>))
        .route("/{id}", get(read::<S, M>).put(update::<S, M>))
        .with_state(service)
}

fn parse_id<I: From<i64>>(raw: &str) -> Result<I, ValidationError> {
    raw.parse::<i64>()
        .map(I::from)
        .map_err(|_| ValidationError::InvalidId(raw.to_string()))
}

/// Collect every decoded `id` parameter, in order.
fn parse_ids<I: From<i64>>(params: &[(String, String)]) -> Result<Vec<I>, ValidationError> {
    params
        .iter()
        .filter(|(key, _)| key == "id")
        .map(|(_, value)| parse_id(value))
        .collect()
}

/// `GET /{base}?id=1&id=2`
pub async fn read_all<S, M>(
    State(service): State<Arc<CrudService<S, M>>>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<ListResponse<M::Dto>, ApiError>
where
    S: EntityStore,
    M: RecordMapper<Record = S::Record>,
{
    let ids: Vec<IdOf<S>> = parse_ids(&params)?;
    let dtos = service.read_all_by_id(&ids).await?;
    Ok(ListResponse::Ok(Json(dtos)))
}

/// `GET /{base}/{id}`
pub async fn read<S, M>(
    State(service): State<Arc<CrudService<S, M>>>,
    Path(id): Path<String>,
) -> Result<GetResponse<M::Dto>, ApiError>
where
    S: EntityStore,
    M: RecordMapper<Record = S::Record>,
{
    let dto = service.read_by_id(parse_id(&id)?).await?;
    Ok(GetResponse::Ok(Json(dto)))
}

/// `POST /{base}`
pub async fn create<S, M>(
    State(service): State<Arc<CrudService<S, M>>>,
    Json(dto): Json<M::Dto>,
) -> Result<CreateResponse<M::Dto>, ApiError>
where
    S: EntityStore,
    M: RecordMapper<Record = S::Record>,
{
    let created = service.create(dto).await?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `PUT /{base}/{id}`
///
/// A `null` body leaves the record as it is.
pub async fn update<S, M>(
    State(service): State<Arc<CrudService<S, M>>>,
    Path(id): Path<String>,
    Json(dto): Json<Option<M::Dto>>,
) -> Result<GetResponse<M::Dto>, ApiError>
where
    S: EntityStore,
    M: RecordMapper<Record = S::Record>,
{
    let updated = service.update(parse_id(&id)?, dto).await?;
    Ok(GetResponse::Ok(Json(updated)))
}
