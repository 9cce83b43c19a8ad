use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{
    CourseContentOverview, CourseFilter, CourseSelect, CourseStructure, CourseWithCoverImage,
    PartialCourse, SerializedCourse,
};
use crate::error::RepoError;

/// Read access to courses and their outlines.
///
/// Every method is a single attempt. "Not found" is `Ok(None)`; store
/// failures come back as [`RepoError`] untouched.
#[async_trait]
pub trait CourseRepository: Send + Sync {
    /// First course matching `filter`, joined with its cover image.
    async fn get_course_with_cover_image(
        &self,
        filter: &CourseFilter,
    ) -> Result<Option<CourseWithCoverImage>, RepoError>;

    /// First course matching `filter`, projected to `select` (all fields when `None`).
    async fn find_course(
        &self,
        filter: &CourseFilter,
        select: Option<&CourseSelect>,
    ) -> Result<Option<PartialCourse>, RepoError>;

    /// Serialized course with creator name, updater name and cover URL.
    async fn get_course_with_author_and_date(
        &self,
        id: Uuid,
    ) -> Result<Option<SerializedCourse>, RepoError>;

    /// Chapter and page names, descriptions and durations in reading order.
    async fn get_course_content_overview(
        &self,
        id: Uuid,
    ) -> Result<Option<CourseContentOverview>, RepoError>;

    /// Chapter and page identifiers in reading order.
    async fn get_course_structure(&self, id: Uuid) -> Result<Option<CourseStructure>, RepoError>;

    /// Every course, serialized with creator, updater, category and cover URL.
    async fn get_all_courses(&self) -> Result<Vec<SerializedCourse>, RepoError>;
}
