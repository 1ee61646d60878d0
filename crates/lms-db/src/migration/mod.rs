//! database migrations for the lms schema.

pub use sea_orm_migration::prelude::*;

mod m20250801_000001_create_universities;
mod m20250801_000002_create_courses;
mod m20250801_000003_create_students;
mod m20250801_000004_create_admins;
mod m20250815_000005_create_enrollments;
mod m20250815_000006_create_course_materials;
mod m20250901_000007_create_tenants;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250801_000001_create_universities::Migration),
            Box::new(m20250801_000002_create_courses::Migration),
            Box::new(m20250801_000003_create_students::Migration),
            Box::new(m20250801_000004_create_admins::Migration),
            Box::new(m20250815_000005_create_enrollments::Migration),
            Box::new(m20250815_000006_create_course_materials::Migration),
            Box::new(m20250901_000007_create_tenants::Migration),
        ]
    }
}
