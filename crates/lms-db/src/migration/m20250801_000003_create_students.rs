//! create students table migration.

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
                    .table(Students::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Students::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Students::StudentCode).string().not_null())
                    .col(ColumnDef::new(Students::FullName).string().not_null())
                    .col(ColumnDef::new(Students::Email).string().not_null())
                    .col(ColumnDef::new(Students::Major).string().not_null().default(""))
                    .col(ColumnDef::new(Students::Year).string().not_null().default(""))
                    .col(ColumnDef::new(Students::PhoneNumber).string())
                    .col(ColumnDef::new(Students::UniversityId).big_integer())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_students_university")
                            .from(Students::Table, Students::UniversityId)
                            .to(Universities::Table, Universities::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // login resolves students by email
        manager
            .create_index(
                Index::create()
                    .name("idx_students_email")
                    .table(Students::Table)
                    .col(Students::Email)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Students::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Students {
    Table,
    Id,
    StudentCode,
    FullName,
    Email,
    Major,
    Year,
    PhoneNumber,
    UniversityId,
}
