//! input validation for create and update bodies

use email_address::EmailAddress;
use lms_types::{CourseStatus, UniversityStatus};

use crate::handlers::ApiError;
use crate::services::{
    admin::AdminDto, course::CourseDto, course_material::CourseMaterialDto, student::StudentDto,
    tenant::TenantDto, university::UniversityDto,
};

/// maximum length for names (characters).
pub const MAX_NAME_LEN: usize = 255;

/// maximum length for a course code (characters).
pub const MAX_COURSE_CODE_LEN: usize = 20;

/// allowed credit range for a course.
pub const CREDITS_RANGE: std::ops::RangeInclusive<i32> = 1..=10;

/// require a non-blank value whose length lies in `min..=max`.
fn check_text(
    value: &str,
    required: &str,
    min: usize,
    max: usize,
    out_of_range: &str,
) -> Result<(), ApiError> {
    if value.trim().is_empty() {
        return Err(ApiError::bad_request(required));
    }
    let len = value.chars().count();
    if len < min || len > max {
        return Err(ApiError::bad_request(out_of_range));
    }
    Ok(())
}

fn check_email(email: &str) -> Result<(), ApiError> {
    if email.trim().is_empty() {
        return Err(ApiError::bad_request("Email is required"));
    }
    if !EmailAddress::is_valid(email) {
        return Err(ApiError::bad_request("Email should be valid"));
    }
    Ok(())
}

/// an absent status is fine; a present one must name a known variant.
fn check_status<T: std::str::FromStr>(status: Option<&str>) -> Result<(), ApiError> {
    match status {
        Some(s) if s.parse::<T>().is_err() => Err(ApiError::bad_request(
            "Status must be ACTIVE or INACTIVE",
        )),
        _ => Ok(()),
    }
}

/// optional leading `+` then 10 to 15 ascii digits
fn is_valid_phone(phone: &str) -> bool {
    let digits = phone.strip_prefix('+').unwrap_or(phone);
    (10..=15).contains(&digits.len()) && digits.bytes().all(|b| b.is_ascii_digit())
}

pub fn validate_course(dto: &CourseDto) -> Result<(), ApiError> {
    check_text(
        &dto.course_name,
        "Course name is required",
        2,
        MAX_NAME_LEN,
        "Course name must be between 2 and 255 characters",
    )?;
    if dto.course_code.chars().count() > MAX_COURSE_CODE_LEN {
        return Err(ApiError::bad_request(
            "Course code cannot exceed 20 characters",
        ));
    }
    check_text(
        &dto.description,
        "Description is required",
        10,
        1000,
        "Description must be between 10 and 1000 characters",
    )?;
    if dto.credits < *CREDITS_RANGE.start() {
        return Err(ApiError::bad_request("Credits must be at least 1"));
    }
    if dto.credits > *CREDITS_RANGE.end() {
        return Err(ApiError::bad_request("Credits cannot exceed 10"));
    }
    check_text(
        &dto.instructor,
        "Instructor name is required",
        2,
        MAX_NAME_LEN,
        "Instructor name must be between 2 and 255 characters",
    )?;
    check_status::<CourseStatus>(dto.status.as_deref())?;
    if dto.university_id.is_none() {
        return Err(ApiError::bad_request("University ID is required"));
    }
    Ok(())
}

pub fn validate_university(dto: &UniversityDto) -> Result<(), ApiError> {
    check_text(
        &dto.uni_name,
        "University name is required",
        2,
        MAX_NAME_LEN,
        "University name must be between 2 and 255 characters",
    )?;
    if dto.est_year.trim().is_empty() {
        return Err(ApiError::bad_request("Establishment year is required"));
    }
    if dto.est_year.len() != 4 || !dto.est_year.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ApiError::bad_request(
            "Establishment year must be a 4-digit year",
        ));
    }
    check_text(
        &dto.address,
        "Address is required",
        10,
        500,
        "Address must be between 10 and 500 characters",
    )?;
    check_text(
        &dto.admin_name,
        "Admin name is required",
        2,
        MAX_NAME_LEN,
        "Admin name must be between 2 and 255 characters",
    )?;
    if dto.students < 0 {
        return Err(ApiError::bad_request(
            "Number of students cannot be negative",
        ));
    }
    if dto.courses < 0 {
        return Err(ApiError::bad_request("Number of courses cannot be negative"));
    }
    check_status::<UniversityStatus>(dto.status.as_deref())?;
    Ok(())
}

pub fn validate_student(dto: &StudentDto) -> Result<(), ApiError> {
    check_text(
        &dto.student_id,
        "Student ID is required",
        5,
        50,
        "Student ID must be between 5 and 50 characters",
    )?;
    check_text(
        &dto.full_name,
        "Full name is required",
        2,
        MAX_NAME_LEN,
        "Full name must be between 2 and 255 characters",
    )?;
    check_email(&dto.email)?;
    check_text(
        &dto.major,
        "Major is required",
        2,
        100,
        "Major must be between 2 and 100 characters",
    )?;
    if dto.year.trim().is_empty() {
        return Err(ApiError::bad_request("Year is required"));
    }
    if !matches!(dto.year.as_str(), "1" | "2" | "3" | "4") {
        return Err(ApiError::bad_request("Year must be between 1 and 4"));
    }
    if let Some(phone) = &dto.phone_number
        && !is_valid_phone(phone)
    {
        return Err(ApiError::bad_request(
            "Phone number should be valid (10-15 digits)",
        ));
    }
    Ok(())
}

pub fn validate_admin(dto: &AdminDto) -> Result<(), ApiError> {
    check_email(&dto.email)?;
    check_text(
        &dto.admin_name,
        "Admin name is required",
        2,
        MAX_NAME_LEN,
        "Admin name must be between 2 and 255 characters",
    )
}

pub fn validate_material(dto: &CourseMaterialDto) -> Result<(), ApiError> {
    if dto.title.trim().is_empty() {
        return Err(ApiError::bad_request("Title is required"));
    }
    if dto.url.trim().is_empty() {
        return Err(ApiError::bad_request("URL is required"));
    }
    Ok(())
}

pub fn validate_tenant(dto: &TenantDto) -> Result<(), ApiError> {
    check_text(
        &dto.name,
        "Tenant name is required",
        2,
        MAX_NAME_LEN,
        "Tenant name must be between 2 and 255 characters",
    )?;
    if dto.subdomain.is_empty() {
        return Err(ApiError::bad_request("Subdomain is required"));
    }
    // must survive host parsing as the first label of `<sub>.<domain>`
    let label_ok = dto.subdomain.len() <= 63
        && dto
            .subdomain
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
        && !dto.subdomain.starts_with('-')
        && !dto.subdomain.ends_with('-')
        && dto.subdomain != "www";
    if !label_ok {
        return Err(ApiError::bad_request(
            "Subdomain must be a lowercase DNS label other than www",
        ));
    }
    if dto.domain.trim().is_empty() {
        return Err(ApiError::bad_request("Domain is required"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(result: Result<(), ApiError>) -> String {
        match result {
            Err(ApiError::BadRequest(msg)) => msg,
            other => panic!("expected bad request, got {:?}", other),
        }
    }

    fn course() -> CourseDto {
        CourseDto {
            course_name: "Operating Systems".to_string(),
            course_code: "CS162".to_string(),
            description: "Processes, threads and virtual memory.".to_string(),
            credits: 4,
            instructor: "J. Kubiatowicz".to_string(),
            university_id: Some(1),
            ..Default::default()
        }
    }

    fn student() -> StudentDto {
        StudentDto {
            student_id: "STU-1001".to_string(),
            full_name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            major: "Mathematics".to_string(),
            year: "3".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_course() {
        assert!(validate_course(&course()).is_ok());
    }

    #[test]
    fn test_course_rules() {
        let short_description = CourseDto {
            description: "too short".to_string(),
            ..course()
        };
        assert_eq!(
            message(validate_course(&short_description)),
            "Description must be between 10 and 1000 characters"
        );

        let no_credits = CourseDto {
            credits: 0,
            ..course()
        };
        assert_eq!(
            message(validate_course(&no_credits)),
            "Credits must be at least 1"
        );

        let long_code = CourseDto {
            course_code: "X".repeat(21),
            ..course()
        };
        assert_eq!(
            message(validate_course(&long_code)),
            "Course code cannot exceed 20 characters"
        );

        let no_university = CourseDto {
            university_id: None,
            ..course()
        };
        assert_eq!(
            message(validate_course(&no_university)),
            "University ID is required"
        );
    }

    #[test]
    fn test_blank_name_is_required_not_short() {
        let blank = CourseDto {
            course_name: "  ".to_string(),
            ..course()
        };
        assert_eq!(message(validate_course(&blank)), "Course name is required");
    }

    #[test]
    fn test_university_rules() {
        let valid = UniversityDto {
            uni_name: "Stanford".to_string(),
            est_year: "1885".to_string(),
            address: "450 Serra Mall, Stanford".to_string(),
            admin_name: "Provost".to_string(),
            ..Default::default()
        };
        assert!(validate_university(&valid).is_ok());

        let bad_year = UniversityDto {
            est_year: "85".to_string(),
            ..valid.clone()
        };
        assert_eq!(
            message(validate_university(&bad_year)),
            "Establishment year must be a 4-digit year"
        );

        let negative = UniversityDto {
            courses: -1,
            ..valid
        };
        assert_eq!(
            message(validate_university(&negative)),
            "Number of courses cannot be negative"
        );
    }

    #[test]
    fn test_student_rules() {
        assert!(validate_student(&student()).is_ok());

        let bad_email = StudentDto {
            email: "not-an-email".to_string(),
            ..student()
        };
        assert_eq!(message(validate_student(&bad_email)), "Email should be valid");

        let bad_year = StudentDto {
            year: "5".to_string(),
            ..student()
        };
        assert_eq!(
            message(validate_student(&bad_year)),
            "Year must be between 1 and 4"
        );
    }

    #[test]
    fn test_phone_numbers() {
        assert!(is_valid_phone("+919876543210"));
        assert!(is_valid_phone("0123456789"));
        assert!(!is_valid_phone("12345"));
        assert!(!is_valid_phone("+91-98765-43210"));
        assert!(!is_valid_phone("++919876543210"));

        let bad_phone = StudentDto {
            phone_number: Some("555-0100".to_string()),
            ..student()
        };
        assert!(validate_student(&bad_phone).is_err());
    }

    #[test]
    fn test_status_must_be_known() {
        let archived = CourseDto {
            status: Some("ARCHIVED".to_string()),
            ..course()
        };
        assert_eq!(
            message(validate_course(&archived)),
            "Status must be ACTIVE or INACTIVE"
        );
        let lower = CourseDto {
            status: Some("active".to_string()),
            ..course()
        };
        assert_eq!(
            message(validate_course(&lower)),
            "Status must be ACTIVE or INACTIVE"
        );
        let inactive = CourseDto {
            status: Some("INACTIVE".to_string()),
            ..course()
        };
        assert!(validate_course(&inactive).is_ok());
    }

    #[test]
    fn test_tenant_rules() {
        let tenant = TenantDto {
            name: "IIT".to_string(),
            subdomain: "iit-delhi".to_string(),
            domain: "iit-delhi.lms.com".to_string(),
            ..Default::default()
        };
        assert!(validate_tenant(&tenant).is_ok());

        for subdomain in ["IIT", "www", "-iit", "iit.delhi"] {
            let bad = TenantDto {
                subdomain: subdomain.to_string(),
                ..tenant.clone()
            };
            assert_eq!(
                message(validate_tenant(&bad)),
                "Subdomain must be a lowercase DNS label other than www",
                "subdomain {:?}",
                subdomain
            );
        }

        let no_domain = TenantDto {
            domain: " ".to_string(),
            ..tenant
        };
        assert_eq!(message(validate_tenant(&no_domain)), "Domain is required");
    }

    #[test]
    fn test_admin_rules() {
        let admin = AdminDto {
            email: "dean@mit.edu".to_string(),
            admin_name: "D".to_string(),
            ..Default::default()
        };
        assert_eq!(
            message(validate_admin(&admin)),
            "Admin name must be between 2 and 255 characters"
        );
    }
}
