use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Chapters::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Chapters::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Chapters::CourseId).uuid().not_null())
                    .col(ColumnDef::new(Chapters::ChapterNumber).integer().not_null())
                    .col(ColumnDef::new(Chapters::Name).string().not_null())
                    .col(ColumnDef::new(Chapters::Description).text().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Chapters::Table, Chapters::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_chapters_course_number")
                    .table(Chapters::Table)
                    .col(Chapters::CourseId)
                    .col(Chapters::ChapterNumber)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Pages::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Pages::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Pages::ChapterId).uuid().not_null())
                    .col(ColumnDef::new(Pages::PageNumber).integer().not_null())
                    .col(ColumnDef::new(Pages::Name).string().not_null())
                    .col(
                        ColumnDef::new(Pages::Duration)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Pages::Table, Pages::ChapterId)
                            .to(Chapters::Table, Chapters::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_pages_chapter_number")
                    .table(Pages::Table)
                    .col(Pages::ChapterId)
                    .col(Pages::PageNumber)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Pages::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Chapters::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Chapters {
    Table,
    Id,
    CourseId,
    ChapterNumber,
    Name,
    Description,
}

#[derive(Iden)]
enum Pages {
    Table,
    Id,
    ChapterId,
    PageNumber,
    Name,
    Duration,
}

#[derive(Iden)]
enum Courses {
    Table,
    Id,
}
