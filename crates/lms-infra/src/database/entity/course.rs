//! Course entity for SeaORM.

use sea_orm::entity::prelude::*;

use lms_core::domain;

#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum CourseStatus {
    #[sea_orm(string_value = "DRAFT")]
    Draft,
    #[sea_orm(string_value = "PUBLISHED")]
    Published,
    #[sea_orm(string_value = "ARCHIVED")]
    Archived,
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "courses")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    #[sea_orm(column_type = "Text")]
    pub learning_objectives: String,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub price: Decimal,
    pub create_date: DateTimeWithTimeZone,
    pub last_updated_date: DateTimeWithTimeZone,
    pub status: CourseStatus,
    pub category_id: Uuid,
    pub cover_image_asset_id: Uuid,
    pub creator_id: Uuid,
    pub last_updated_user_id: Uuid,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::category::Entity",
        from = "Column::CategoryId",
        to = "super::category::Column::Id"
    )]
    Category,
    #[sea_orm(
        belongs_to = "super::image::Entity",
        from = "Column::CoverImageAssetId",
        to = "super::image::Column::Id"
    )]
    CoverImage,
    #[sea_orm(
        belongs_to = "super::instructor::Entity",
        from = "Column::CreatorId",
        to = "super::instructor::Column::Id"
    )]
    Creator,
    #[sea_orm(
        belongs_to = "super::instructor::Entity",
        from = "Column::LastUpdatedUserId",
        to = "super::instructor::Column::Id"
    )]
    LastUpdatedBy,
    #[sea_orm(has_many = "super::chapter::Entity")]
    Chapters,
}

impl Related<super::category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl Related<super::image::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CoverImage.def()
    }
}

impl Related<super::chapter::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Chapters.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<CourseStatus> for domain::CourseStatus {
    fn from(status: CourseStatus) -> Self {
        match status {
            CourseStatus::Draft => Self::Draft,
            CourseStatus::Published => Self::Published,
            CourseStatus::Archived => Self::Archived,
        }
    }
}

impl From<domain::CourseStatus> for CourseStatus {
    fn from(status: domain::CourseStatus) -> Self {
        match status {
            domain::CourseStatus::Draft => Self::Draft,
            domain::CourseStatus::Published => Self::Published,
            domain::CourseStatus::Archived => Self::Archived,
        }
    }
}

/// Conversion from SeaORM Model to Domain Course.
impl From<Model> for domain::Course {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            description: model.description,
            learning_objectives: model.learning_objectives,
            price: model.price,
            create_date: model.create_date.into(),
            last_updated_date: model.last_updated_date.into(),
            status: model.status.into(),
            category_id: model.category_id,
            cover_image_asset_id: model.cover_image_asset_id,
            creator_id: model.creator_id,
            last_updated_user_id: model.last_updated_user_id,
        }
    }
}
