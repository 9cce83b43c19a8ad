//! PostgreSQL course repository.

use std::collections::HashMap;

use async_trait::async_trait;
use sea_orm::prelude::DateTimeWithTimeZone;
use sea_orm::{
    ActiveEnum, ColumnTrait, Condition, ConnectionTrait, DbConn, DbErr, EntityTrait, IdenStatic,
    QueryFilter, QueryOrder, QueryResult, QuerySelect, QueryTrait, TryGetable,
};
use uuid::Uuid;

use lms_core::domain::{
    Chapter, Course, CourseContentOverview, CourseFilter, CourseOutline, CourseSelect,
    CourseStructure, CourseWithCoverImage, Page, PartialCourse, SerializedCourse,
    serialize_course,
};
use lms_core::error::RepoError;
use lms_core::ports::CourseRepository;

use super::entity::{category, chapter, course, image, instructor, page, user};

/// Course reads against PostgreSQL.
///
/// Related rows are loaded with one `IN` query per table rather than joins,
/// so a course list costs a fixed number of round trips.
pub struct SeaOrmCourseRepository {
    db: DbConn,
}

impl SeaOrmCourseRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    async fn first_course(&self, filter: &CourseFilter) -> Result<Option<Course>, RepoError> {
        let model = course::Entity::find()
            .filter(condition(filter))
            .one(&self.db)
            .await
            .map_err(query_error)?;

        Ok(model.map(Into::into))
    }

    /// Display names keyed by instructor id.
    async fn author_names(
        &self,
        instructor_ids: Vec<Uuid>,
    ) -> Result<HashMap<Uuid, String>, RepoError> {
        if instructor_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let instructors = instructor::Entity::find()
            .filter(instructor::Column::Id.is_in(instructor_ids))
            .all(&self.db)
            .await
            .map_err(query_error)?;
        if instructors.is_empty() {
            return Ok(HashMap::new());
        }

        let user_ids: Vec<Uuid> = instructors.iter().map(|i| i.user_id).collect();
        let names: HashMap<Uuid, String> = user::Entity::find()
            .filter(user::Column::Id.is_in(user_ids))
            .all(&self.db)
            .await
            .map_err(query_error)?
            .into_iter()
            .map(|u| (u.id, u.name))
            .collect();

        Ok(instructors
            .into_iter()
            .filter_map(|i| names.get(&i.user_id).map(|name| (i.id, name.clone())))
            .collect())
    }

    async fn image_urls(&self, image_ids: Vec<Uuid>) -> Result<HashMap<Uuid, String>, RepoError> {
        if image_ids.is_empty() {
            return Ok(HashMap::new());
        }

        Ok(image::Entity::find()
            .filter(image::Column::Id.is_in(image_ids))
            .all(&self.db)
            .await
            .map_err(query_error)?
            .into_iter()
            .map(|i| (i.id, i.url))
            .collect())
    }

    async fn category_names(
        &self,
        category_ids: Vec<Uuid>,
    ) -> Result<HashMap<Uuid, String>, RepoError> {
        if category_ids.is_empty() {
            return Ok(HashMap::new());
        }

        Ok(category::Entity::find()
            .filter(category::Column::Id.is_in(category_ids))
            .all(&self.db)
            .await
            .map_err(query_error)?
            .into_iter()
            .map(|c| (c.id, c.name))
            .collect())
    }

    async fn load_outline(&self, id: Uuid) -> Result<Option<CourseOutline>, RepoError> {
        let exists = course::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(query_error)?
            .is_some();
        if !exists {
            return Ok(None);
        }

        let chapters: Vec<Chapter> = chapter::Entity::find()
            .filter(chapter::Column::CourseId.eq(id))
            .order_by_asc(chapter::Column::ChapterNumber)
            .all(&self.db)
            .await
            .map_err(query_error)?
            .into_iter()
            .map(Into::into)
            .collect();

        let pages: Vec<Page> = if chapters.is_empty() {
            Vec::new()
        } else {
            page::Entity::find()
                .filter(page::Column::ChapterId.is_in(chapters.iter().map(|c| c.id)))
                .order_by_asc(page::Column::PageNumber)
                .all(&self.db)
                .await
                .map_err(query_error)?
                .into_iter()
                .map(Into::into)
                .collect()
        };

        Ok(Some(CourseOutline::assemble(id, chapters, pages)))
    }
}

#[async_trait]
impl CourseRepository for SeaOrmCourseRepository {
    async fn get_course_with_cover_image(
        &self,
        filter: &CourseFilter,
    ) -> Result<Option<CourseWithCoverImage>, RepoError> {
        let Some(course) = self.first_course(filter).await? else {
            return Ok(None);
        };

        let cover_image = image::Entity::find_by_id(course.cover_image_asset_id)
            .one(&self.db)
            .await
            .map_err(query_error)?
            .map(Into::into);

        Ok(Some(CourseWithCoverImage {
            course,
            cover_image,
        }))
    }

    async fn find_course(
        &self,
        filter: &CourseFilter,
        select: Option<&CourseSelect>,
    ) -> Result<Option<PartialCourse>, RepoError> {
        let select = select.copied().unwrap_or_else(CourseSelect::all);

        let statement = course::Entity::find()
            .select_only()
            .columns(selected_columns(&select))
            .filter(condition(filter))
            .limit(1_u64)
            .build(self.db.get_database_backend());
        let Some(row) = self.db.query_one(statement).await.map_err(query_error)? else {
            return Ok(None);
        };

        read_partial(&row, &select).map(Some).map_err(query_error)
    }

    async fn get_course_with_author_and_date(
        &self,
        id: Uuid,
    ) -> Result<Option<SerializedCourse>, RepoError> {
        tracing::debug!(course_id = %id, "Loading course with authors");

        let Some(course) = self.first_course(&CourseFilter::by_id(id)).await? else {
            return Ok(None);
        };

        let authors = self
            .author_names(vec![course.creator_id, course.last_updated_user_id])
            .await?;
        let images = self.image_urls(vec![course.cover_image_asset_id]).await?;

        Ok(Some(
            serialize_course(&course)
                .with_created_by(authors.get(&course.creator_id).cloned())
                .with_last_updated_by(authors.get(&course.last_updated_user_id).cloned())
                .with_cover_image(images.get(&course.cover_image_asset_id).cloned()),
        ))
    }

    async fn get_course_content_overview(
        &self,
        id: Uuid,
    ) -> Result<Option<CourseContentOverview>, RepoError> {
        Ok(self.load_outline(id).await?.map(CourseOutline::into_overview))
    }

    async fn get_course_structure(&self, id: Uuid) -> Result<Option<CourseStructure>, RepoError> {
        Ok(self.load_outline(id).await?.map(CourseOutline::into_structure))
    }

    async fn get_all_courses(&self) -> Result<Vec<SerializedCourse>, RepoError> {
        let courses: Vec<Course> = course::Entity::find()
            .order_by_asc(course::Column::CreateDate)
            .all(&self.db)
            .await
            .map_err(query_error)?
            .into_iter()
            .map(Into::into)
            .collect();
        tracing::debug!(count = courses.len(), "Loaded courses");
        if courses.is_empty() {
            return Ok(Vec::new());
        }

        let authors = self
            .author_names(
                courses
                    .iter()
                    .flat_map(|c| [c.creator_id, c.last_updated_user_id])
                    .collect(),
            )
            .await?;
        let categories = self
            .category_names(courses.iter().map(|c| c.category_id).collect())
            .await?;
        let images = self
            .image_urls(courses.iter().map(|c| c.cover_image_asset_id).collect())
            .await?;

        Ok(courses
            .iter()
            .map(|c| {
                serialize_course(c)
                    .with_created_by(authors.get(&c.creator_id).cloned())
                    .with_last_updated_by(authors.get(&c.last_updated_user_id).cloned())
                    .with_category(categories.get(&c.category_id).cloned())
                    .with_cover_image(images.get(&c.cover_image_asset_id).cloned())
            })
            .collect())
    }
}

fn condition(filter: &CourseFilter) -> Condition {
    let mut cond = Condition::all();
    if let Some(id) = filter.id {
        cond = cond.add(course::Column::Id.eq(id));
    }
    if let Some(title) = &filter.title {
        cond = cond.add(course::Column::Title.eq(title.as_str()));
    }
    if let Some(status) = filter.status {
        cond = cond.add(course::Column::Status.eq(course::CourseStatus::from(status)));
    }
    if let Some(category_id) = filter.category_id {
        cond = cond.add(course::Column::CategoryId.eq(category_id));
    }
    if let Some(creator_id) = filter.creator_id {
        cond = cond.add(course::Column::CreatorId.eq(creator_id));
    }
    cond
}

/// Columns backing `select`. `id` is always fetched so the column list is
/// never empty; it is only returned when selected.
fn selected_columns(select: &CourseSelect) -> Vec<course::Column> {
    use course::Column;

    [
        (true, Column::Id),
        (select.title, Column::Title),
        (select.description, Column::Description),
        (select.learning_objectives, Column::LearningObjectives),
        (select.price, Column::Price),
        (select.create_date, Column::CreateDate),
        (select.last_updated_date, Column::LastUpdatedDate),
        (select.status, Column::Status),
        (select.category_id, Column::CategoryId),
        (select.cover_image_asset_id, Column::CoverImageAssetId),
        (select.creator_id, Column::CreatorId),
        (select.last_updated_user_id, Column::LastUpdatedUserId),
    ]
    .into_iter()
    .filter_map(|(selected, column)| selected.then_some(column))
    .collect()
}

fn read_partial(row: &QueryResult, select: &CourseSelect) -> Result<PartialCourse, DbErr> {
    use course::Column;

    fn read<T: TryGetable>(
        row: &QueryResult,
        selected: bool,
        column: Column,
    ) -> Result<Option<T>, DbErr> {
        if !selected {
            return Ok(None);
        }
        row.try_get("", column.as_str()).map(Some)
    }

    let status = read::<String>(row, select.status, Column::Status)?
        .map(|value| course::CourseStatus::try_from_value(&value))
        .transpose()?;

    Ok(PartialCourse {
        id: read(row, select.id, Column::Id)?,
        title: read(row, select.title, Column::Title)?,
        description: read(row, select.description, Column::Description)?,
        learning_objectives: read(row, select.learning_objectives, Column::LearningObjectives)?,
        price: read(row, select.price, Column::Price)?,
        create_date: read::<DateTimeWithTimeZone>(row, select.create_date, Column::CreateDate)?
            .map(Into::into),
        last_updated_date: read::<DateTimeWithTimeZone>(
            row,
            select.last_updated_date,
            Column::LastUpdatedDate,
        )?
        .map(Into::into),
        status: status.map(Into::into),
        category_id: read(row, select.category_id, Column::CategoryId)?,
        cover_image_asset_id: read(row, select.cover_image_asset_id, Column::CoverImageAssetId)?,
        creator_id: read(row, select.creator_id, Column::CreatorId)?,
        last_updated_user_id: read(row, select.last_updated_user_id, Column::LastUpdatedUserId)?,
    })
}

fn query_error(err: DbErr) -> RepoError {
    match err {
        DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => RepoError::Connection(err.to_string()),
        other => RepoError::Query(other.to_string()),
    }
}
