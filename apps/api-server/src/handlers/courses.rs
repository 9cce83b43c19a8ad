//! Course read handlers.

use actix_web::{HttpResponse, web};
use serde::Deserialize;
use uuid::Uuid;

use lms_core::domain::{CourseFilter, CourseSelect, CourseStatus, SerializedCourse};
use lms_core::error::DomainError;
use lms_shared::ApiResponse;

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

fn course_not_found(id: Uuid) -> AppError {
    DomainError::NotFound {
        entity_type: "Course",
        id,
    }
    .into()
}

/// GET /api/courses
pub async fn list(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let courses = state.courses.get_all_courses().await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok_with_message(
        courses,
        state.course_messages.get_all_success.clone(),
    )))
}

/// GET /api/courses/{id}
pub async fn get(state: web::Data<AppState>, path: web::Path<Uuid>) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let course = state
        .courses
        .get_course_with_author_and_date(id)
        .await?
        .ok_or_else(|| course_not_found(id))?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok_with_message(
        course,
        state.course_messages.get_one_success.clone(),
    )))
}

/// GET /api/courses/{id}/overview
pub async fn overview(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let overview = state
        .courses
        .get_course_content_overview(id)
        .await?
        .ok_or_else(|| course_not_found(id))?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(overview)))
}

/// GET /api/courses/{id}/structure
pub async fn structure(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let structure = state
        .courses
        .get_course_structure(id)
        .await?
        .ok_or_else(|| course_not_found(id))?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(structure)))
}

/// GET /api/courses/{id}/cover
pub async fn cover(state: web::Data<AppState>, path: web::Path<Uuid>) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let found = state
        .courses
        .get_course_with_cover_image(&CourseFilter::by_id(id))
        .await?
        .ok_or_else(|| course_not_found(id))?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(SerializedCourse::from(&found))))
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupQuery {
    pub id: Option<Uuid>,
    pub title: Option<String>,
    pub status: Option<CourseStatus>,
    pub category_id: Option<Uuid>,
    pub creator_id: Option<Uuid>,
    /// Comma-separated field names; omitted means every field.
    pub fields: Option<String>,
}

impl LookupQuery {
    fn filter(&self) -> CourseFilter {
        CourseFilter {
            id: self.id,
            title: self.title.clone(),
            status: self.status,
            category_id: self.category_id,
            creator_id: self.creator_id,
        }
    }

    fn select(&self) -> Result<Option<CourseSelect>, DomainError> {
        let Some(fields) = &self.fields else {
            return Ok(None);
        };

        fields
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .try_fold(CourseSelect::none(), |select, name| {
                select
                    .with_field(name)
                    .ok_or_else(|| DomainError::Validation(format!("unknown course field `{name}`")))
            })
            .map(Some)
    }
}

/// GET /api/courses/lookup?title=..&status=..&fields=id,title
///
/// First course matching every given filter, projected onto `fields`.
pub async fn lookup(
    state: web::Data<AppState>,
    query: web::Query<LookupQuery>,
) -> AppResult<HttpResponse> {
    let select = query.select()?;
    let course = state
        .courses
        .find_course(&query.filter(), select.as_ref())
        .await?
        .ok_or_else(|| AppError::NotFound("No course matches the given filter".to_string()))?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok_with_message(
        course,
        state.course_messages.get_one_success.clone(),
    )))
}
