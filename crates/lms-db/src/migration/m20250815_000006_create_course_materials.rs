//! create course_materials table migration.

use sea_orm_migration::prelude::*;

use super::m20250801_000002_create_courses::Courses;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CourseMaterials::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CourseMaterials::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(CourseMaterials::CourseId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(CourseMaterials::Title).string().not_null())
                    .col(
                        ColumnDef::new(CourseMaterials::MaterialType)
                            .string()
                            .not_null()
                            .default("DOCUMENT"),
                    )
                    .col(ColumnDef::new(CourseMaterials::Url).string().not_null())
                    .col(ColumnDef::new(CourseMaterials::Description).text())
                    .col(ColumnDef::new(CourseMaterials::FileSize).big_integer())
                    .col(ColumnDef::new(CourseMaterials::Duration).string())
                    .col(
                        ColumnDef::new(CourseMaterials::UploadedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CourseMaterials::IsPublic)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(CourseMaterials::DownloadCount)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_course_materials_course")
                            .from(CourseMaterials::Table, CourseMaterials::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_course_materials_course_id")
                    .table(CourseMaterials::Table)
                    .col(CourseMaterials::CourseId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CourseMaterials::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CourseMaterials {
    Table,
    Id,
    CourseId,
    Title,
    MaterialType,
    Url,
    Description,
    FileSize,
    Duration,
    UploadedAt,
    IsPublic,
    DownloadCount,
}
