//! Chapter/page outline of a course.
//!
//! Storage order is never trusted: [`CourseOutline::assemble`] sorts chapters
//! by `chapter_number` and pages by `page_number`, both ascending.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Chapter row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chapter {
    pub id: Uuid,
    pub course_id: Uuid,
    pub chapter_number: i32,
    pub name: String,
    pub description: String,
}

/// Page row. `duration` is in minutes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub id: Uuid,
    pub chapter_id: Uuid,
    pub page_number: i32,
    pub name: String,
    pub duration: i32,
}

/// A course's chapters with their pages, in reading order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseOutline {
    pub course_id: Uuid,
    pub chapters: Vec<(Chapter, Vec<Page>)>,
}

impl CourseOutline {
    /// Groups `pages` under their chapters and orders both levels.
    ///
    /// Pages whose chapter is not in `chapters` are dropped.
    pub fn assemble(course_id: Uuid, mut chapters: Vec<Chapter>, pages: Vec<Page>) -> Self {
        chapters.sort_by_key(|c| c.chapter_number);

        let mut by_chapter: HashMap<Uuid, Vec<Page>> = HashMap::new();
        for page in pages {
            by_chapter.entry(page.chapter_id).or_default().push(page);
        }

        let chapters = chapters
            .into_iter()
            .map(|chapter| {
                let mut pages = by_chapter.remove(&chapter.id).unwrap_or_default();
                pages.sort_by_key(|p| p.page_number);
                (chapter, pages)
            })
            .collect();

        Self {
            course_id,
            chapters,
        }
    }

    pub fn into_overview(self) -> CourseContentOverview {
        CourseContentOverview {
            chapters: self
                .chapters
                .into_iter()
                .map(|(chapter, pages)| ChapterOverview {
                    name: chapter.name,
                    description: chapter.description,
                    pages: pages
                        .into_iter()
                        .map(|p| PageOverview {
                            name: p.name,
                            duration: p.duration,
                        })
                        .collect(),
                })
                .collect(),
        }
    }

    pub fn into_structure(self) -> CourseStructure {
        CourseStructure {
            id: self.course_id,
            chapters: self
                .chapters
                .into_iter()
                .map(|(chapter, pages)| ChapterNode {
                    id: chapter.id,
                    name: chapter.name,
                    pages: pages
                        .into_iter()
                        .map(|p| PageNode {
                            id: p.id,
                            name: p.name,
                        })
                        .collect(),
                })
                .collect(),
        }
    }
}

/// Descriptive outline for a course landing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseContentOverview {
    pub chapters: Vec<ChapterOverview>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChapterOverview {
    pub name: String,
    pub description: String,
    pub pages: Vec<PageOverview>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageOverview {
    pub name: String,
    pub duration: i32,
}

/// Identifier tree used for navigating a course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseStructure {
    pub id: Uuid,
    pub chapters: Vec<ChapterNode>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChapterNode {
    pub id: Uuid,
    pub name: String,
    pub pages: Vec<PageNode>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageNode {
    pub id: Uuid,
    pub name: String,
}
