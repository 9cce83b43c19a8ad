//! In-memory course repository - used when no database is configured and as
//! a fixture in handler tests.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use lms_core::domain::{
    Chapter, Course, CourseContentOverview, CourseFilter, CourseOutline, CourseSelect,
    CourseStructure, CourseWithCoverImage, CoverImage, Page, PartialCourse, SerializedCourse,
    serialize_course,
};
use lms_core::error::RepoError;
use lms_core::ports::CourseRepository;

#[derive(Default)]
struct Tables {
    courses: Vec<Course>,
    images: HashMap<Uuid, CoverImage>,
    categories: HashMap<Uuid, String>,
    /// Instructor id to the instructor's display name.
    authors: HashMap<Uuid, String>,
    chapters: Vec<Chapter>,
    pages: Vec<Page>,
}

impl Tables {
    fn first(&self, filter: &CourseFilter) -> Option<&Course> {
        self.courses.iter().find(|c| filter.matches(c))
    }

    fn outline(&self, id: Uuid) -> Option<CourseOutline> {
        self.courses.iter().find(|c| c.id == id)?;

        let chapters: Vec<Chapter> = self
            .chapters
            .iter()
            .filter(|c| c.course_id == id)
            .cloned()
            .collect();
        let pages = self
            .pages
            .iter()
            .filter(|p| chapters.iter().any(|c| c.id == p.chapter_id))
            .cloned()
            .collect();

        Some(CourseOutline::assemble(id, chapters, pages))
    }

    fn serialize(&self, course: &Course) -> SerializedCourse {
        serialize_course(course)
            .with_created_by(self.authors.get(&course.creator_id).cloned())
            .with_last_updated_by(self.authors.get(&course.last_updated_user_id).cloned())
            .with_cover_image(
                self.images
                    .get(&course.cover_image_asset_id)
                    .map(|i| i.url.clone()),
            )
    }
}

/// Course store held in process memory.
///
/// Note: Data is lost on process restart.
#[derive(Default)]
pub struct InMemoryCourseRepository {
    tables: RwLock<Tables>,
}

impl InMemoryCourseRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert_course(&self, course: Course) {
        self.tables.write().await.courses.push(course);
    }

    pub async fn insert_image(&self, image: CoverImage) {
        self.tables.write().await.images.insert(image.id, image);
    }

    pub async fn insert_category(&self, id: Uuid, name: impl Into<String>) {
        self.tables.write().await.categories.insert(id, name.into());
    }

    pub async fn insert_author(&self, instructor_id: Uuid, name: impl Into<String>) {
        self.tables
            .write()
            .await
            .authors
            .insert(instructor_id, name.into());
    }

    pub async fn insert_chapter(&self, chapter: Chapter) {
        self.tables.write().await.chapters.push(chapter);
    }

    pub async fn insert_page(&self, page: Page) {
        self.tables.write().await.pages.push(page);
    }
}

#[async_trait]
impl CourseRepository for InMemoryCourseRepository {
    async fn get_course_with_cover_image(
        &self,
        filter: &CourseFilter,
    ) -> Result<Option<CourseWithCoverImage>, RepoError> {
        let tables = self.tables.read().await;
        Ok(tables.first(filter).map(|course| CourseWithCoverImage {
            course: course.clone(),
            cover_image: tables.images.get(&course.cover_image_asset_id).cloned(),
        }))
    }

    async fn find_course(
        &self,
        filter: &CourseFilter,
        select: Option<&CourseSelect>,
    ) -> Result<Option<PartialCourse>, RepoError> {
        let select = select.copied().unwrap_or_else(CourseSelect::all);
        let tables = self.tables.read().await;
        Ok(tables.first(filter).map(|course| select.project(course)))
    }

    async fn get_course_with_author_and_date(
        &self,
        id: Uuid,
    ) -> Result<Option<SerializedCourse>, RepoError> {
        let tables = self.tables.read().await;
        Ok(tables
            .first(&CourseFilter::by_id(id))
            .map(|course| tables.serialize(course)))
    }

    async fn get_course_content_overview(
        &self,
        id: Uuid,
    ) -> Result<Option<CourseContentOverview>, RepoError> {
        let tables = self.tables.read().await;
        Ok(tables.outline(id).map(CourseOutline::into_overview))
    }

    async fn get_course_structure(&self, id: Uuid) -> Result<Option<CourseStructure>, RepoError> {
        let tables = self.tables.read().await;
        Ok(tables.outline(id).map(CourseOutline::into_structure))
    }

    async fn get_all_courses(&self) -> Result<Vec<SerializedCourse>, RepoError> {
        let tables = self.tables.read().await;
        Ok(tables
            .courses
            .iter()
            .map(|course| {
                tables
                    .serialize(course)
                    .with_category(tables.categories.get(&course.category_id).cloned())
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use lms_core::domain::CourseStatus;
    use rust_decimal::Decimal;

    fn course(title: &str) -> Course {
        Course {
            id: Uuid::new_v4(),
            title: title.to_string(),
            description: String::new(),
            learning_objectives: String::new(),
            price: Decimal::new(4500, 2),
            create_date: Utc.with_ymd_and_hms(2024, 3, 9, 0, 0, 0).unwrap(),
            last_updated_date: Utc.with_ymd_and_hms(2024, 3, 10, 0, 0, 0).unwrap(),
            status: CourseStatus::Draft,
            category_id: Uuid::new_v4(),
            cover_image_asset_id: Uuid::new_v4(),
            creator_id: Uuid::new_v4(),
            last_updated_user_id: Uuid::new_v4(),
        }
    }

    #[tokio::test]
    async fn test_lookups_on_empty_store_are_none() {
        let repo = InMemoryCourseRepository::new();
        let filter = CourseFilter::by_id(Uuid::new_v4());

        assert!(repo.get_course_with_cover_image(&filter).await.unwrap().is_none());
        assert!(repo.find_course(&filter, None).await.unwrap().is_none());
        assert!(
            repo.get_course_content_overview(Uuid::new_v4())
                .await
                .unwrap()
                .is_none()
        );
        assert!(repo.get_all_courses().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_structure_is_ordered() {
        let repo = InMemoryCourseRepository::new();
        let c = course("Ordered");
        let course_id = c.id;
        repo.insert_course(c).await;

        let mut chapter_ids = Vec::new();
        for number in [3, 1, 2] {
            let chapter = Chapter {
                id: Uuid::new_v4(),
                course_id,
                chapter_number: number,
                name: format!("c{number}"),
                description: String::new(),
            };
            chapter_ids.push((number, chapter.id));
            repo.insert_chapter(chapter).await;
        }
        let (_, first_chapter) = chapter_ids.iter().find(|(n, _)| *n == 1).copied().unwrap();
        for number in [2, 1] {
            repo.insert_page(Page {
                id: Uuid::new_v4(),
                chapter_id: first_chapter,
                page_number: number,
                name: format!("p{number}"),
                duration: 5,
            })
            .await;
        }

        let structure = repo.get_course_structure(course_id).await.unwrap().unwrap();

        let names: Vec<_> = structure.chapters.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["c1", "c2", "c3"]);
        let pages: Vec<_> = structure.chapters[0]
            .pages
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(pages, ["p1", "p2"]);
    }

    #[tokio::test]
    async fn test_get_all_courses_resolves_names() {
        let repo = InMemoryCourseRepository::new();
        let c = course("Listed");
        repo.insert_category(c.category_id, "Design").await;
        repo.insert_author(c.creator_id, "Ada").await;
        repo.insert_image(CoverImage {
            id: c.cover_image_asset_id,
            url: "https://cdn.example/x.png".to_string(),
        })
        .await;
        repo.insert_course(c).await;

        let courses = repo.get_all_courses().await.unwrap();

        assert_eq!(courses[0].price, 45.0);
        assert_eq!(courses[0].category.as_ref().unwrap().name, "Design");
        assert_eq!(courses[0].created_by.as_ref().unwrap().user.name, "Ada");
        assert!(courses[0].last_updated_by.is_none());
        assert_eq!(courses[0].last_updated_date, "3/10/2024");
    }
}
