//! create courses table migration.

use sea_orm_migration::prelude::*;

use super::m20250801_000001_create_universities::Universities;

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
                    .col(
                        ColumnDef::new(Courses::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Courses::Name).string().not_null())
                    .col(ColumnDef::new(Courses::Code).string().not_null().default(""))
                    .col(ColumnDef::new(Courses::Description).text().not_null().default(""))
                    .col(ColumnDef::new(Courses::Credits).integer().not_null().default(0))
                    .col(
                        ColumnDef::new(Courses::Instructor)
                            .string()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Courses::Status)
                            .string()
                            .not_null()
                            .default("ACTIVE"),
                    )
                    .col(ColumnDef::new(Courses::UniversityId).big_integer().not_null())
                    // a university with courses cannot be deleted
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_courses_university")
                            .from(Courses::Table, Courses::UniversityId)
                            .to(Universities::Table, Universities::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_courses_university_id")
                    .table(Courses::Table)
                    .col(Courses::UniversityId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Courses::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Courses {
    Table,
    Id,
    Name,
    Code,
    Description,
    Credits,
    Instructor,
    Status,
    UniversityId,
}
