use chrono::{TimeZone, Utc};
use rust_decimal::Decimal;
use sea_orm::{DatabaseBackend, DbErr, MockDatabase};
use uuid::Uuid;

use lms_core::domain::{CourseFilter, CourseSelect, CourseStatus};
use lms_core::error::RepoError;
use lms_core::ports::CourseRepository;

use super::entity::{category, chapter, course, image, instructor, page, user};
use super::SeaOrmCourseRepository;

fn course_model(title: &str) -> course::Model {
    course::Model {
        id: Uuid::new_v4(),
        title: title.to_owned(),
        description: "Description".to_owned(),
        learning_objectives: "Objectives".to_owned(),
        price: Decimal::new(1999, 2),
        create_date: Utc.with_ymd_and_hms(2024, 1, 1, 8, 0, 0).unwrap().into(),
        last_updated_date: Utc.with_ymd_and_hms(2024, 6, 1, 8, 0, 0).unwrap().into(),
        status: course::CourseStatus::Published,
        category_id: Uuid::new_v4(),
        cover_image_asset_id: Uuid::new_v4(),
        creator_id: Uuid::new_v4(),
        last_updated_user_id: Uuid::new_v4(),
    }
}

fn chapter_model(course_id: Uuid, number: i32) -> chapter::Model {
    chapter::Model {
        id: Uuid::new_v4(),
        course_id,
        chapter_number: number,
        name: format!("Chapter {number}"),
        description: format!("Chapter {number} description"),
    }
}

fn page_model(chapter_id: Uuid, number: i32) -> page::Model {
    page::Model {
        id: Uuid::new_v4(),
        chapter_id,
        page_number: number,
        name: format!("Page {number}"),
        duration: 10 * number,
    }
}

fn authors_for(course: &course::Model) -> (Vec<instructor::Model>, Vec<user::Model>) {
    let creator_user = Uuid::new_v4();
    let updater_user = Uuid::new_v4();
    (
        vec![
            instructor::Model {
                id: course.creator_id,
                user_id: creator_user,
            },
            instructor::Model {
                id: course.last_updated_user_id,
                user_id: updater_user,
            },
        ],
        vec![
            user::Model {
                id: creator_user,
                name: "Ada Lovelace".to_owned(),
                email: "ada@example.com".to_owned(),
                role: 1,
            },
            user::Model {
                id: updater_user,
                name: "Grace Hopper".to_owned(),
                email: "grace@example.com".to_owned(),
                role: 1,
            },
        ],
    )
}

#[tokio::test]
async fn test_find_course_without_match_is_none() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<course::Model>::new()])
        .into_connection();
    let repo = SeaOrmCourseRepository::new(db);

    let result = repo
        .find_course(&CourseFilter::by_id(Uuid::new_v4()), None)
        .await
        .unwrap();

    assert!(result.is_none());
}

#[tokio::test]
async fn test_find_course_applies_projection() {
    let model = course_model("Projected");
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![model.clone()]])
        .into_connection();
    let repo = SeaOrmCourseRepository::new(db.clone());

    let select = CourseSelect::none().title().status();
    let partial = repo
        .find_course(&CourseFilter::by_title("Projected"), Some(&select))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(partial.title.as_deref(), Some("Projected"));
    assert_eq!(partial.status, Some(CourseStatus::Published));
    assert!(partial.id.is_none());
    assert!(partial.price.is_none());

    let log = format!("{:?}", db.into_transaction_log());
    assert!(log.contains("title"), "{log}");
    assert!(log.contains("status"), "{log}");
    assert!(!log.contains("price"), "{log}");
    assert!(!log.contains("learning_objectives"), "{log}");
}

#[tokio::test]
async fn test_find_course_without_select_reads_every_column() {
    let model = course_model("Everything");
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![model.clone()]])
        .into_connection();
    let repo = SeaOrmCourseRepository::new(db);

    let partial = repo
        .find_course(&CourseFilter::by_id(model.id), None)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(partial.id, Some(model.id));
    assert_eq!(partial.price, Some(Decimal::new(1999, 2)));
    assert_eq!(partial.status, Some(CourseStatus::Published));
    assert_eq!(
        partial.last_updated_date,
        Some(Utc.with_ymd_and_hms(2024, 6, 1, 8, 0, 0).unwrap())
    );
}

#[tokio::test]
async fn test_get_course_with_cover_image() {
    let model = course_model("Covered");
    let cover = image::Model {
        id: model.cover_image_asset_id,
        url: "https://cdn.example/cover.png".to_owned(),
    };
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![model.clone()]])
        .append_query_results([vec![cover]])
        .into_connection();
    let repo = SeaOrmCourseRepository::new(db);

    let found = repo
        .get_course_with_cover_image(&CourseFilter::default())
        .await
        .unwrap()
        .unwrap();

    assert_eq!(found.course.id, model.id);
    assert_eq!(
        found.cover_image.map(|i| i.url).as_deref(),
        Some("https://cdn.example/cover.png")
    );
}

#[tokio::test]
async fn test_get_course_with_cover_image_without_match_is_none() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<course::Model>::new()])
        .into_connection();
    let repo = SeaOrmCourseRepository::new(db);

    let found = repo
        .get_course_with_cover_image(&CourseFilter::by_title("nothing"))
        .await
        .unwrap();

    assert!(found.is_none());
}

#[tokio::test]
async fn test_get_course_with_author_and_date() {
    let model = course_model("Authored");
    let (instructors, users) = authors_for(&model);
    let cover = image::Model {
        id: model.cover_image_asset_id,
        url: "https://cdn.example/a.png".to_owned(),
    };
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![model.clone()]])
        .append_query_results([instructors])
        .append_query_results([users])
        .append_query_results([vec![cover]])
        .into_connection();
    let repo = SeaOrmCourseRepository::new(db);

    let course = repo
        .get_course_with_author_and_date(model.id)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(course.price, 19.99);
    assert_eq!(course.create_date, "1/1/2024");
    assert_eq!(course.last_updated_date, "6/1/2024");
    assert_eq!(course.created_by.unwrap().user.name, "Ada Lovelace");
    assert_eq!(course.last_updated_by.unwrap().user.name, "Grace Hopper");
    assert_eq!(course.cover_image.unwrap().url, "https://cdn.example/a.png");
    assert!(course.category.is_none());
}

#[tokio::test]
async fn test_content_overview_orders_chapters_and_pages() {
    let model = course_model("Ordered");
    let c2 = chapter_model(model.id, 2);
    let c1 = chapter_model(model.id, 1);
    let pages = vec![
        page_model(c1.id, 2),
        page_model(c2.id, 1),
        page_model(c1.id, 1),
    ];
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![model.clone()]])
        .append_query_results([vec![c2, c1]])
        .append_query_results([pages])
        .into_connection();
    let repo = SeaOrmCourseRepository::new(db);

    let overview = repo
        .get_course_content_overview(model.id)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(overview.chapters[0].name, "Chapter 1");
    assert_eq!(overview.chapters[1].name, "Chapter 2");
    assert_eq!(overview.chapters[0].pages[0].name, "Page 1");
    assert_eq!(overview.chapters[0].pages[1].duration, 20);
}

#[tokio::test]
async fn test_structure_for_missing_course_is_none() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<course::Model>::new()])
        .into_connection();
    let repo = SeaOrmCourseRepository::new(db);

    assert!(repo.get_course_structure(Uuid::new_v4()).await.unwrap().is_none());
}

#[tokio::test]
async fn test_structure_without_chapters_skips_page_query() {
    let model = course_model("Empty");
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![model.clone()]])
        .append_query_results([Vec::<chapter::Model>::new()])
        .into_connection();
    let repo = SeaOrmCourseRepository::new(db);

    let structure = repo.get_course_structure(model.id).await.unwrap().unwrap();

    assert_eq!(structure.id, model.id);
    assert!(structure.chapters.is_empty());
}

#[tokio::test]
async fn test_get_all_courses_joins_relations() {
    let model = course_model("Listed");
    let (instructors, users) = authors_for(&model);
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![model.clone()]])
        .append_query_results([instructors])
        .append_query_results([users])
        .append_query_results([vec![category::Model {
            id: model.category_id,
            name: "Programming".to_owned(),
        }]])
        .append_query_results([vec![image::Model {
            id: model.cover_image_asset_id,
            url: "https://cdn.example/l.png".to_owned(),
        }]])
        .into_connection();
    let repo = SeaOrmCourseRepository::new(db);

    let courses = repo.get_all_courses().await.unwrap();

    assert_eq!(courses.len(), 1);
    let listed = &courses[0];
    assert_eq!(listed.title, "Listed");
    assert_eq!(listed.category.as_ref().unwrap().name, "Programming");
    assert_eq!(listed.created_by.as_ref().unwrap().user.name, "Ada Lovelace");
    assert_eq!(listed.cover_image.as_ref().unwrap().url, "https://cdn.example/l.png");
}

#[tokio::test]
async fn test_get_all_courses_empty() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<course::Model>::new()])
        .into_connection();
    let repo = SeaOrmCourseRepository::new(db);

    assert!(repo.get_all_courses().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_query_errors_propagate() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_errors([DbErr::Custom("relation does not exist".to_owned())])
        .into_connection();
    let repo = SeaOrmCourseRepository::new(db);

    let err = repo.get_all_courses().await.unwrap_err();

    assert!(matches!(err, RepoError::Query(msg) if msg.contains("relation does not exist")));
}
