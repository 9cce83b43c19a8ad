use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Publication state of a course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CourseStatus {
    Draft,
    Published,
    Archived,
}

/// Course entity as stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub learning_objectives: String,
    pub price: Decimal,
    pub create_date: DateTime<Utc>,
    pub last_updated_date: DateTime<Utc>,
    pub status: CourseStatus,
    pub category_id: Uuid,
    pub cover_image_asset_id: Uuid,
    pub creator_id: Uuid,
    pub last_updated_user_id: Uuid,
}

/// Cover image asset of a course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverImage {
    pub id: Uuid,
    pub url: String,
}

/// A course eagerly joined with its cover image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseWithCoverImage {
    #[serde(flatten)]
    pub course: Course,
    pub cover_image: Option<CoverImage>,
}

/// Criteria for a first-match course lookup.
///
/// Every populated field must match. An empty filter matches any course.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CourseFilter {
    pub id: Option<Uuid>,
    pub title: Option<String>,
    pub status: Option<CourseStatus>,
    pub category_id: Option<Uuid>,
    pub creator_id: Option<Uuid>,
}

impl CourseFilter {
    pub fn by_id(id: Uuid) -> Self {
        Self {
            id: Some(id),
            ..Self::default()
        }
    }

    pub fn by_title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    pub fn with_status(mut self, status: CourseStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_category(mut self, category_id: Uuid) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub fn with_creator(mut self, creator_id: Uuid) -> Self {
        self.creator_id = Some(creator_id);
        self
    }

    pub fn matches(&self, course: &Course) -> bool {
        self.id.is_none_or(|id| course.id == id)
            && self.title.as_deref().is_none_or(|t| course.title == t)
            && self.status.is_none_or(|s| course.status == s)
            && self.category_id.is_none_or(|c| course.category_id == c)
            && self.creator_id.is_none_or(|c| course.creator_id == c)
    }
}

/// Field projection for [`find_course`](crate::ports::CourseRepository::find_course).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CourseSelect {
    pub id: bool,
    pub title: bool,
    pub description: bool,
    pub learning_objectives: bool,
    pub price: bool,
    pub create_date: bool,
    pub last_updated_date: bool,
    pub status: bool,
    pub category_id: bool,
    pub cover_image_asset_id: bool,
    pub creator_id: bool,
    pub last_updated_user_id: bool,
}

macro_rules! select_field {
    ($($field:ident),* $(,)?) => {
        $(
            pub fn $field(mut self) -> Self {
                self.$field = true;
                self
            }
        )*
    };
}

impl CourseSelect {
    /// Selects nothing; chain field methods to build a projection.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn all() -> Self {
        Self {
            id: true,
            title: true,
            description: true,
            learning_objectives: true,
            price: true,
            create_date: true,
            last_updated_date: true,
            status: true,
            category_id: true,
            cover_image_asset_id: true,
            creator_id: true,
            last_updated_user_id: true,
        }
    }

    select_field!(
        id,
        title,
        description,
        learning_objectives,
        price,
        create_date,
        last_updated_date,
        status,
        category_id,
        cover_image_asset_id,
        creator_id,
        last_updated_user_id,
    );

    /// Adds a field by its transport (camelCase) name. `None` for unknown names.
    pub fn with_field(self, name: &str) -> Option<Self> {
        let select = match name {
            "id" => self.id(),
            "title" => self.title(),
            "description" => self.description(),
            "learningObjectives" => self.learning_objectives(),
            "price" => self.price(),
            "createDate" => self.create_date(),
            "lastUpdatedDate" => self.last_updated_date(),
            "status" => self.status(),
            "categoryId" => self.category_id(),
            "coverImageAssetId" => self.cover_image_asset_id(),
            "creatorId" => self.creator_id(),
            "lastUpdatedUserId" => self.last_updated_user_id(),
            _ => return None,
        };
        Some(select)
    }

    pub fn project(&self, course: &Course) -> PartialCourse {
        fn pick<T: Clone>(selected: bool, value: &T) -> Option<T> {
            selected.then(|| value.clone())
        }

        PartialCourse {
            id: pick(self.id, &course.id),
            title: pick(self.title, &course.title),
            description: pick(self.description, &course.description),
            learning_objectives: pick(self.learning_objectives, &course.learning_objectives),
            price: pick(self.price, &course.price),
            create_date: pick(self.create_date, &course.create_date),
            last_updated_date: pick(self.last_updated_date, &course.last_updated_date),
            status: pick(self.status, &course.status),
            category_id: pick(self.category_id, &course.category_id),
            cover_image_asset_id: pick(self.cover_image_asset_id, &course.cover_image_asset_id),
            creator_id: pick(self.creator_id, &course.creator_id),
            last_updated_user_id: pick(self.last_updated_user_id, &course.last_updated_user_id),
        }
    }
}

/// A course with only the selected fields populated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialCourse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub learning_objectives: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<CourseStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image_asset_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creator_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated_user_id: Option<Uuid>,
}

/// `{ "user": { "name": .. } }` - the creator or last updater of a course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseAuthor {
    pub user: AuthorName,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorName {
    pub name: String,
}

impl CourseAuthor {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            user: AuthorName { name: name.into() },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryName {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageUrl {
    pub url: String,
}

/// Transport-safe course record: plain number price, locale date strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SerializedCourse {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub learning_objectives: String,
    pub price: f64,
    pub create_date: String,
    pub last_updated_date: String,
    pub status: CourseStatus,
    pub category_id: Uuid,
    pub cover_image_asset_id: Uuid,
    pub creator_id: Uuid,
    pub last_updated_user_id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<CourseAuthor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated_by: Option<CourseAuthor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<CategoryName>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<ImageUrl>,
}

impl SerializedCourse {
    pub fn with_created_by(mut self, name: Option<String>) -> Self {
        self.created_by = name.map(CourseAuthor::named);
        self
    }

    pub fn with_last_updated_by(mut self, name: Option<String>) -> Self {
        self.last_updated_by = name.map(CourseAuthor::named);
        self
    }

    pub fn with_category(mut self, name: Option<String>) -> Self {
        self.category = name.map(|name| CategoryName { name });
        self
    }

    pub fn with_cover_image(mut self, url: Option<String>) -> Self {
        self.cover_image = url.map(|url| ImageUrl { url });
        self
    }
}

/// Formats a timestamp the way `en-US` short dates read: `M/D/YYYY`, in UTC.
pub fn format_locale_date(date: &DateTime<Utc>) -> String {
    date.format("%-m/%-d/%Y").to_string()
}

/// Converts a stored course into its transport form.
///
/// The price is narrowed to `f64`; digits beyond double precision are lost.
/// Relations are left empty; attach them with the `with_*` builders.
pub fn serialize_course(course: &Course) -> SerializedCourse {
    SerializedCourse {
        id: course.id,
        title: course.title.clone(),
        description: course.description.clone(),
        learning_objectives: course.learning_objectives.clone(),
        // Any 96-bit decimal is within f64 range.
        price: course.price.to_f64().unwrap_or_default(),
        create_date: format_locale_date(&course.create_date),
        last_updated_date: format_locale_date(&course.last_updated_date),
        status: course.status,
        category_id: course.category_id,
        cover_image_asset_id: course.cover_image_asset_id,
        creator_id: course.creator_id,
        last_updated_user_id: course.last_updated_user_id,
        created_by: None,
        last_updated_by: None,
        category: None,
        cover_image: None,
    }
}

impl From<&CourseWithCoverImage> for SerializedCourse {
    fn from(value: &CourseWithCoverImage) -> Self {
        serialize_course(&value.course)
            .with_cover_image(value.cover_image.as_ref().map(|image| image.url.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_course() -> Course {
        Course {
            id: Uuid::new_v4(),
            title: "Rust for Beginners".to_string(),
            description: "Ownership, borrowing and friends".to_string(),
            learning_objectives: "Write safe systems code".to_string(),
            price: Decimal::new(1999, 2),
            create_date: Utc.with_ymd_and_hms(2024, 1, 1, 9, 30, 0).unwrap(),
            last_updated_date: Utc.with_ymd_and_hms(2024, 6, 1, 17, 0, 0).unwrap(),
            status: CourseStatus::Published,
            category_id: Uuid::new_v4(),
            cover_image_asset_id: Uuid::new_v4(),
            creator_id: Uuid::new_v4(),
            last_updated_user_id: Uuid::new_v4(),
        }
    }

    #[test]
    fn test_serialize_course_converts_price_and_dates() {
        let course = sample_course();
        let serialized = serialize_course(&course);

        assert_eq!(serialized.price, 19.99);
        assert_eq!(serialized.create_date, "1/1/2024");
        // Uses the real last-updated timestamp, not the creation date.
        assert_eq!(serialized.last_updated_date, "6/1/2024");
        assert_eq!(serialized.title, course.title);
        assert!(serialized.created_by.is_none());
    }

    #[test]
    fn test_serialized_course_json_shape() {
        let serialized = serialize_course(&sample_course())
            .with_created_by(Some("Ada".to_string()))
            .with_cover_image(Some("https://cdn.example/cover.png".to_string()));
        let json = serde_json::to_value(&serialized).unwrap();

        assert_eq!(json["price"], serde_json::json!(19.99));
        assert_eq!(json["lastUpdatedDate"], "6/1/2024");
        assert_eq!(json["status"], "PUBLISHED");
        assert_eq!(json["createdBy"]["user"]["name"], "Ada");
        assert_eq!(json["coverImage"]["url"], "https://cdn.example/cover.png");
        assert!(json.get("category").is_none());
        assert!(json.get("lastUpdatedBy").is_none());
    }

    #[test]
    fn test_format_locale_date_has_no_padding() {
        let date = Utc.with_ymd_and_hms(2023, 11, 5, 0, 0, 0).unwrap();
        assert_eq!(format_locale_date(&date), "11/5/2023");
    }

    #[test]
    fn test_filter_matching() {
        let course = sample_course();

        assert!(CourseFilter::default().matches(&course));
        assert!(CourseFilter::by_id(course.id).matches(&course));
        assert!(
            CourseFilter::by_title("Rust for Beginners")
                .with_status(CourseStatus::Published)
                .matches(&course)
        );
        assert!(
            !CourseFilter::by_id(course.id)
                .with_status(CourseStatus::Draft)
                .matches(&course)
        );
        assert!(!CourseFilter::by_id(Uuid::new_v4()).matches(&course));
    }

    #[test]
    fn test_select_projects_only_chosen_fields() {
        let course = sample_course();
        let partial = CourseSelect::none().id().title().project(&course);

        assert_eq!(partial.id, Some(course.id));
        assert_eq!(partial.title.as_deref(), Some("Rust for Beginners"));
        assert!(partial.price.is_none());
        assert!(partial.status.is_none());

        let json = serde_json::to_value(&partial).unwrap();
        assert_eq!(json.as_object().map(|o| o.len()), Some(2));
    }

    #[test]
    fn test_select_by_transport_name() {
        let select = CourseSelect::none()
            .with_field("learningObjectives")
            .and_then(|s| s.with_field("price"))
            .unwrap();

        assert!(select.learning_objectives && select.price);
        assert!(!select.title);
        assert!(CourseSelect::none().with_field("password").is_none());
    }

    #[test]
    fn test_select_all_keeps_every_field() {
        let course = sample_course();
        let partial = CourseSelect::all().project(&course);

        assert_eq!(partial.price, Some(course.price));
        assert_eq!(partial.last_updated_user_id, Some(course.last_updated_user_id));
    }
}
