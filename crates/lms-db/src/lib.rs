//! database layer for the lms backend.
//!
//! this crate provides persistent storage for:
//! - Universities
//! - Courses
//! - Students
//! - Admins
//! - Enrollments and course materials
//! - Tenants

#![warn(missing_docs)]

mod entity;
mod error;
mod migration;

pub use error::Error;

use std::future::Future;

use sea_orm::{
    ActiveModelTrait, ColumnTrait, Database as SeaOrmDatabase, DatabaseConnection, EntityTrait,
    QueryFilter, QueryOrder,
};
use sea_orm_migration::MigratorTrait;

use lms_types::{
    Admin, Config, Course, CourseId, CourseMaterial, Enrollment, Student, Tenant, University,
    UniversityId,
};

/// result type for database operations.
pub type Result<T> = std::result::Result<T, Error>;

/// database trait for lms storage operations.
///
/// this trait abstracts over different database backends (sqlite, postgresql).
/// deletes are physical: rows are removed and the schema's foreign key
/// actions decide what happens to dependants.
pub trait Database: Send + Sync {
    // ─── Health Check ─────────────────────────────────────────────────────────

    /// ping the database to verify connectivity.
    fn ping(&self) -> impl Future<Output = Result<()>> + Send;

    // ─── University Operations ───────────────────────────────────────────────

    /// create a new university. Returns it with its assigned ID.
    fn create_university(
        &self,
        university: &University,
    ) -> impl Future<Output = Result<University>> + Send;

    /// get a university by id.
    fn get_university(
        &self,
        id: UniversityId,
    ) -> impl Future<Output = Result<Option<University>>> + Send;

    /// get the first university with exactly this name.
    fn get_university_by_name(
        &self,
        name: &str,
    ) -> impl Future<Output = Result<Option<University>>> + Send;

    /// list all universities, ordered by id.
    fn list_universities(&self) -> impl Future<Output = Result<Vec<University>>> + Send;

    /// overwrite an existing university row.
    fn update_university(
        &self,
        university: &University,
    ) -> impl Future<Output = Result<University>> + Send;

    /// delete a university. fails with `Error::Constraint` while courses reference it.
    fn delete_university(&self, id: UniversityId) -> impl Future<Output = Result<()>> + Send;

    // ─── Course Operations ───────────────────────────────────────────────────

    /// create a new course. the referenced university must exist.
    fn create_course(&self, course: &Course) -> impl Future<Output = Result<Course>> + Send;

    /// get a course by id.
    fn get_course(&self, id: CourseId) -> impl Future<Output = Result<Option<Course>>> + Send;

    /// list all courses, ordered by id.
    fn list_courses(&self) -> impl Future<Output = Result<Vec<Course>>> + Send;

    /// overwrite an existing course row.
    fn update_course(&self, course: &Course) -> impl Future<Output = Result<Course>> + Send;

    /// delete a course along with its enrollments and materials.
    fn delete_course(&self, id: CourseId) -> impl Future<Output = Result<()>> + Send;

    // ─── Student Operations ──────────────────────────────────────────────────

    /// create a new student.
    fn create_student(&self, student: &Student) -> impl Future<Output = Result<Student>> + Send;

    /// get a student by id.
    fn get_student(&self, id: u64) -> impl Future<Output = Result<Option<Student>>> + Send;

    /// get the first student with this email.
    fn get_student_by_email(
        &self,
        email: &str,
    ) -> impl Future<Output = Result<Option<Student>>> + Send;

    /// list all students, ordered by id.
    fn list_students(&self) -> impl Future<Output = Result<Vec<Student>>> + Send;

    /// overwrite an existing student row.
    fn update_student(&self, student: &Student) -> impl Future<Output = Result<Student>> + Send;

    /// delete a student along with their enrollments.
    fn delete_student(&self, id: u64) -> impl Future<Output = Result<()>> + Send;

    // ─── Admin Operations ────────────────────────────────────────────────────

    /// create a new admin.
    fn create_admin(&self, admin: &Admin) -> impl Future<Output = Result<Admin>> + Send;

    /// get an admin by id.
    fn get_admin(&self, id: u64) -> impl Future<Output = Result<Option<Admin>>> + Send;

    /// get the first admin with this email.
    fn get_admin_by_email(&self, email: &str)
    -> impl Future<Output = Result<Option<Admin>>> + Send;

    /// list all admins, ordered by id.
    fn list_admins(&self) -> impl Future<Output = Result<Vec<Admin>>> + Send;

    /// overwrite an existing admin row.
    fn update_admin(&self, admin: &Admin) -> impl Future<Output = Result<Admin>> + Send;

    /// delete an admin.
    fn delete_admin(&self, id: u64) -> impl Future<Output = Result<()>> + Send;

    // ─── Enrollment Operations ───────────────────────────────────────────────

    /// create a new enrollment. student and course must exist.
    fn create_enrollment(
        &self,
        enrollment: &Enrollment,
    ) -> impl Future<Output = Result<Enrollment>> + Send;

    /// get an enrollment by id.
    fn get_enrollment(&self, id: u64) -> impl Future<Output = Result<Option<Enrollment>>> + Send;

    /// list all enrollments, ordered by id.
    fn list_enrollments(&self) -> impl Future<Output = Result<Vec<Enrollment>>> + Send;

    /// overwrite an existing enrollment row.
    fn update_enrollment(
        &self,
        enrollment: &Enrollment,
    ) -> impl Future<Output = Result<Enrollment>> + Send;

    /// delete an enrollment.
    fn delete_enrollment(&self, id: u64) -> impl Future<Output = Result<()>> + Send;

    // ─── Course Material Operations ──────────────────────────────────────────

    /// create a new course material. the course must exist.
    fn create_course_material(
        &self,
        material: &CourseMaterial,
    ) -> impl Future<Output = Result<CourseMaterial>> + Send;

    /// get a course material by id.
    fn get_course_material(
        &self,
        id: u64,
    ) -> impl Future<Output = Result<Option<CourseMaterial>>> + Send;

    /// list materials attached to a course, ordered by id.
    fn list_course_materials_for_course(
        &self,
        course_id: CourseId,
    ) -> impl Future<Output = Result<Vec<CourseMaterial>>> + Send;

    /// overwrite an existing course material row.
    fn update_course_material(
        &self,
        material: &CourseMaterial,
    ) -> impl Future<Output = Result<CourseMaterial>> + Send;

    /// delete a course material.
    fn delete_course_material(&self, id: u64) -> impl Future<Output = Result<()>> + Send;

    // ─── Tenant Operations ───────────────────────────────────────────────────

    /// create a new tenant. name and subdomain are unique.
    fn create_tenant(&self, tenant: &Tenant) -> impl Future<Output = Result<Tenant>> + Send;

    /// get a tenant by id.
    fn get_tenant(&self, id: u64) -> impl Future<Output = Result<Option<Tenant>>> + Send;

    /// list all tenants, ordered by id.
    fn list_tenants(&self) -> impl Future<Output = Result<Vec<Tenant>>> + Send;

    /// overwrite an existing tenant row.
    fn update_tenant(&self, tenant: &Tenant) -> impl Future<Output = Result<Tenant>> + Send;

    /// delete a tenant.
    fn delete_tenant(&self, id: u64) -> impl Future<Output = Result<()>> + Send;
}

/// the main database implementation using sea-orm.
#[derive(Clone)]
pub struct LmsDb {
    conn: DatabaseConnection,
}

impl LmsDb {
    /// create a new database connection from config and run migrations.
    pub async fn new(config: &Config) -> Result<Self> {
        let url = Self::build_connection_url(&config.database)?;
        let conn: DatabaseConnection = SeaOrmDatabase::connect(&url)
            .await
            .map_err(|e| Error::Connection(e.to_string()))?;

        let db = Self { conn };
        db.migrate().await?;
        tracing::info!(db_type = %config.database.db_type, "database ready");
        Ok(db)
    }

    /// build a sea-orm compatible connection url from config.
    fn build_connection_url(config: &lms_types::DatabaseConfig) -> Result<String> {
        match config.db_type.as_str() {
            "sqlite" => {
                let path = if config.connection_string.starts_with("sqlite:") {
                    config.connection_string.clone()
                } else {
                    format!("sqlite:{}", config.connection_string)
                };
                // mode=rwc creates the file on first start
                if path.contains('?') {
                    Ok(path)
                } else {
                    Ok(format!("{}?mode=rwc", path))
                }
            }
            "postgres" | "postgresql" => Ok(config.connection_string.clone()),
            other => Err(Error::InvalidData(format!(
                "unsupported database type: {}",
                other
            ))),
        }
    }

    /// create an in-memory sqlite database for testing.
    pub async fn new_in_memory() -> Result<Self> {
        let conn: DatabaseConnection = SeaOrmDatabase::connect("sqlite::memory:")
            .await
            .map_err(|e| Error::Connection(e.to_string()))?;

        let db = Self { conn };
        db.migrate().await?;
        Ok(db)
    }

    /// run database migrations.
    pub async fn migrate(&self) -> Result<()> {
        migration::Migrator::up(&self.conn, None)
            .await
            .map_err(|e| Error::Migration(e.to_string()))?;
        Ok(())
    }
}

impl Database for LmsDb {
    async fn ping(&self) -> Result<()> {
        use sea_orm::ConnectionTrait;
        self.conn
            .execute_unprepared("SELECT 1")
            .await
            .map_err(|e| Error::Connection(e.to_string()))?;
        Ok(())
    }

    // university operations

    async fn create_university(&self, university: &University) -> Result<University> {
        let model: entity::university::ActiveModel = university.into();
        let result = model.insert(&self.conn).await?;
        Ok(result.into())
    }

    async fn get_university(&self, id: UniversityId) -> Result<Option<University>> {
        let result = entity::university::Entity::find_by_id(id.0 as i64)
            .one(&self.conn)
            .await?;
        Ok(result.map(Into::into))
    }

    async fn get_university_by_name(&self, name: &str) -> Result<Option<University>> {
        let result = entity::university::Entity::find()
            .filter(entity::university::Column::Name.eq(name))
            .order_by_asc(entity::university::Column::Id)
            .one(&self.conn)
            .await?;
        Ok(result.map(Into::into))
    }

    async fn list_universities(&self) -> Result<Vec<University>> {
        let results = entity::university::Entity::find()
            .order_by_asc(entity::university::Column::Id)
            .all(&self.conn)
            .await?;
        Ok(results.into_iter().map(Into::into).collect())
    }

    async fn update_university(&self, university: &University) -> Result<University> {
        let model: entity::university::ActiveModel = university.into();
        let result = model.update(&self.conn).await?;
        Ok(result.into())
    }

    async fn delete_university(&self, id: UniversityId) -> Result<()> {
        entity::university::Entity::delete_by_id(id.0 as i64)
            .exec(&self.conn)
            .await?;
        Ok(())
    }

    // course operations

    async fn create_course(&self, course: &Course) -> Result<Course> {
        let model: entity::course::ActiveModel = course.into();
        let result = model.insert(&self.conn).await?;
        Ok(result.into())
    }

    async fn get_course(&self, id: CourseId) -> Result<Option<Course>> {
        let result = entity::course::Entity::find_by_id(id.0 as i64)
            .one(&self.conn)
            .await?;
        Ok(result.map(Into::into))
    }

    async fn list_courses(&self) -> Result<Vec<Course>> {
        let results = entity::course::Entity::find()
            .order_by_asc(entity::course::Column::Id)
            .all(&self.conn)
            .await?;
        Ok(results.into_iter().map(Into::into).collect())
    }

    async fn update_course(&self, course: &Course) -> Result<Course> {
        let model: entity::course::ActiveModel = course.into();
        let result = model.update(&self.conn).await?;
        Ok(result.into())
    }

    async fn delete_course(&self, id: CourseId) -> Result<()> {
        entity::course::Entity::delete_by_id(id.0 as i64)
            .exec(&self.conn)
            .await?;
        Ok(())
    }

    // student operations

    async fn create_student(&self, student: &Student) -> Result<Student> {
        let model: entity::student::ActiveModel = student.into();
        let result = model.insert(&self.conn).await?;
        Ok(result.into())
    }

    async fn get_student(&self, id: u64) -> Result<Option<Student>> {
        let result = entity::student::Entity::find_by_id(id as i64)
            .one(&self.conn)
            .await?;
        Ok(result.map(Into::into))
    }

    async fn get_student_by_email(&self, email: &str) -> Result<Option<Student>> {
        let result = entity::student::Entity::find()
            .filter(entity::student::Column::Email.eq(email))
            .order_by_asc(entity::student::Column::Id)
            .one(&self.conn)
            .await?;
        Ok(result.map(Into::into))
    }

    async fn list_students(&self) -> Result<Vec<Student>> {
        let results = entity::student::Entity::find()
            .order_by_asc(entity::student::Column::Id)
            .all(&self.conn)
            .await?;
        Ok(results.into_iter().map(Into::into).collect())
    }

    async fn update_student(&self, student: &Student) -> Result<Student> {
        let model: entity::student::ActiveModel = student.into();
        let result = model.update(&self.conn).await?;
        Ok(result.into())
    }

    async fn delete_student(&self, id: u64) -> Result<()> {
        entity::student::Entity::delete_by_id(id as i64)
            .exec(&self.conn)
            .await?;
        Ok(())
    }

    // admin operations

    async fn create_admin(&self, admin: &Admin) -> Result<Admin> {
        let model: entity::admin::ActiveModel = admin.into();
        let result = model.insert(&self.conn).await?;
        Ok(result.into())
    }

    async fn get_admin(&self, id: u64) -> Result<Option<Admin>> {
        let result = entity::admin::Entity::find_by_id(id as i64)
            .one(&self.conn)
            .await?;
        Ok(result.map(Into::into))
    }

    async fn get_admin_by_email(&self, email: &str) -> Result<Option<Admin>> {
        let result = entity::admin::Entity::find()
            .filter(entity::admin::Column::Email.eq(email))
            .order_by_asc(entity::admin::Column::Id)
            .one(&self.conn)
            .await?;
        Ok(result.map(Into::into))
    }

    async fn list_admins(&self) -> Result<Vec<Admin>> {
        let results = entity::admin::Entity::find()
            .order_by_asc(entity::admin::Column::Id)
            .all(&self.conn)
            .await?;
        Ok(results.into_iter().map(Into::into).collect())
    }

    async fn update_admin(&self, admin: &Admin) -> Result<Admin> {
        let model: entity::admin::ActiveModel = admin.into();
        let result = model.update(&self.conn).await?;
        Ok(result.into())
    }

    async fn delete_admin(&self, id: u64) -> Result<()> {
        entity::admin::Entity::delete_by_id(id as i64)
            .exec(&self.conn)
            .await?;
        Ok(())
    }

    // enrollment operations

    async fn create_enrollment(&self, enrollment: &Enrollment) -> Result<Enrollment> {
        let model: entity::enrollment::ActiveModel = enrollment.into();
        let result = model.insert(&self.conn).await?;
        Ok(result.into())
    }

    async fn get_enrollment(&self, id: u64) -> Result<Option<Enrollment>> {
        let result = entity::enrollment::Entity::find_by_id(id as i64)
            .one(&self.conn)
            .await?;
        Ok(result.map(Into::into))
    }

    async fn list_enrollments(&self) -> Result<Vec<Enrollment>> {
        let results = entity::enrollment::Entity::find()
            .order_by_asc(entity::enrollment::Column::Id)
            .all(&self.conn)
            .await?;
        Ok(results.into_iter().map(Into::into).collect())
    }

    async fn update_enrollment(&self, enrollment: &Enrollment) -> Result<Enrollment> {
        let model: entity::enrollment::ActiveModel = enrollment.into();
        let result = model.update(&self.conn).await?;
        Ok(result.into())
    }

    async fn delete_enrollment(&self, id: u64) -> Result<()> {
        entity::enrollment::Entity::delete_by_id(id as i64)
            .exec(&self.conn)
            .await?;
        Ok(())
    }

    // course material operations

    async fn create_course_material(&self, material: &CourseMaterial) -> Result<CourseMaterial> {
        let model: entity::course_material::ActiveModel = material.into();
        let result = model.insert(&self.conn).await?;
        Ok(result.into())
    }

    async fn get_course_material(&self, id: u64) -> Result<Option<CourseMaterial>> {
        let result = entity::course_material::Entity::find_by_id(id as i64)
            .one(&self.conn)
            .await?;
        Ok(result.map(Into::into))
    }

    async fn list_course_materials_for_course(
        &self,
        course_id: CourseId,
    ) -> Result<Vec<CourseMaterial>> {
        let results = entity::course_material::Entity::find()
            .filter(entity::course_material::Column::CourseId.eq(course_id.0 as i64))
            .order_by_asc(entity::course_material::Column::Id)
            .all(&self.conn)
            .await?;
        Ok(results.into_iter().map(Into::into).collect())
    }

    async fn update_course_material(&self, material: &CourseMaterial) -> Result<CourseMaterial> {
        let model: entity::course_material::ActiveModel = material.into();
        let result = model.update(&self.conn).await?;
        Ok(result.into())
    }

    async fn delete_course_material(&self, id: u64) -> Result<()> {
        entity::course_material::Entity::delete_by_id(id as i64)
            .exec(&self.conn)
            .await?;
        Ok(())
    }

    // tenant operations

    async fn create_tenant(&self, tenant: &Tenant) -> Result<Tenant> {
        let model: entity::tenant::ActiveModel = tenant.into();
        let result = model.insert(&self.conn).await?;
        Ok(result.into())
    }

    async fn get_tenant(&self, id: u64) -> Result<Option<Tenant>> {
        let result = entity::tenant::Entity::find_by_id(id as i64)
            .one(&self.conn)
            .await?;
        Ok(result.map(Into::into))
    }

    async fn list_tenants(&self) -> Result<Vec<Tenant>> {
        let results = entity::tenant::Entity::find()
            .order_by_asc(entity::tenant::Column::Id)
            .all(&self.conn)
            .await?;
        Ok(results.into_iter().map(Into::into).collect())
    }

    async fn update_tenant(&self, tenant: &Tenant) -> Result<Tenant> {
        let model: entity::tenant::ActiveModel = tenant.into();
        let result = model.update(&self.conn).await?;
        Ok(result.into())
    }

    async fn delete_tenant(&self, id: u64) -> Result<()> {
        entity::tenant::Entity::delete_by_id(id as i64)
            .exec(&self.conn)
            .await?;
        Ok(())
    }
}
