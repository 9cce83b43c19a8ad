//! Domain entities - the core business objects.

mod course;
mod media;
mod outline;

pub use course::{
    AuthorName, CategoryName, Course, CourseAuthor, CourseFilter, CourseSelect, CourseStatus,
    CourseWithCoverImage, CoverImage, ImageUrl, PartialCourse, SerializedCourse,
    format_locale_date, serialize_course,
};
pub use media::{ObjectOperation, PRESIGNED_URL_TTL, PresignRequest};
pub use outline::{
    Chapter, ChapterNode, ChapterOverview, CourseContentOverview, CourseOutline, CourseStructure,
    Page, PageNode, PageOverview,
};
