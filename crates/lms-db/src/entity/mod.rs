//! database entity models for sea-orm.
//!
//! these entities map to database tables. enumerated fields are stored as
//! their upper-case string form and parsed back on load.

pub mod admin;
pub mod course;
pub mod course_material;
pub mod enrollment;
pub mod student;
pub mod tenant;
pub mod university;

use std::str::FromStr;

use tracing::warn;

/// parse a stored enum column, falling back to the default on bad data.
pub(crate) fn parse_stored<T>(table: &'static str, id: i64, column: &'static str, value: &str) -> T
where
    T: FromStr + Default,
    T::Err: std::fmt::Display,
{
    match value.parse() {
        Ok(v) => v,
        Err(e) => {
            warn!(table, id, column, error = %e, "unrecognised stored value, using default");
            T::default()
        }
    }
}
