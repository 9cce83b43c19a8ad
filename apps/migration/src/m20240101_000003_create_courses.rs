use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Courses::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Courses::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Courses::Title).string().not_null())
                    .col(ColumnDef::new(Courses::Description).text().not_null())
                    .col(ColumnDef::new(Courses::LearningObjectives).text().not_null())
                    .col(ColumnDef::new(Courses::Price).decimal_len(10, 2).not_null())
                    .col(
                        ColumnDef::new(Courses::CreateDate)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Courses::LastUpdatedDate)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Courses::Status)
                            .string_len(16)
                            .not_null()
                            .default("DRAFT"),
                    )
                    .col(ColumnDef::new(Courses::CategoryId).uuid().not_null())
                    .col(ColumnDef::new(Courses::CoverImageAssetId).uuid().not_null())
                    .col(ColumnDef::new(Courses::CreatorId).uuid().not_null())
                    .col(ColumnDef::new(Courses::LastUpdatedUserId).uuid().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Courses::Table, Courses::CategoryId)
                            .to(Categories::Table, Categories::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Courses::Table, Courses::CoverImageAssetId)
                            .to(Images::Table, Images::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Courses::Table, Courses::CreatorId)
                            .to(Instructors::Table, Instructors::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Courses::Table, Courses::LastUpdatedUserId)
                            .to(Instructors::Table, Instructors::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_courses_title")
                    .table(Courses::Table)
                    .col(Courses::Title)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Courses::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Courses {
    Table,
    Id,
    Title,
    Description,
    LearningObjectives,
    Price,
    CreateDate,
    LastUpdatedDate,
    Status,
    CategoryId,
    CoverImageAssetId,
    CreatorId,
    LastUpdatedUserId,
}

#[derive(Iden)]
enum Categories {
    Table,
    Id,
}

#[derive(Iden)]
enum Images {
    Table,
    Id,
}

#[derive(Iden)]
enum Instructors {
    Table,
    Id,
}
