//! Faculty model

use super::person::{validate_date, ContactInfo};

/// Represents a faculty member
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Faculty {
    /// Shared contact record
    pub contact: ContactInfo,
    /// Employee identifier (e.g., "E001")
    pub employee_id: String,
    /// Department code (e.g., "DEP-COM")
    pub department: String,
    /// Hire date, validated as `YYYY-MM-DD`
    pub hire_date: String,
}

impl Faculty {
    /// Create a new faculty member
    ///
    /// # Errors
    /// Returns an error on invalid email, phone, or hire date.
    pub fn new(
        name: &str,
        id: &str,
        email: &str,
        phone: &str,
        employee_id: &str,
        department: &str,
        hire_date: &str,
    ) -> Result<Self, String> {
        validate_date(hire_date)?;

        Ok(Self {
            contact: ContactInfo::new(name, id, email, phone)?,
            employee_id: employee_id.to_string(),
            department: department.to_string(),
            hire_date: hire_date.to_string(),
        })
    }

    /// Render the base summary plus faculty-specific fields
    #[must_use]
    pub fn info(&self) -> String {
        format!(
            "{}\nEmployee ID: {}\nDepartment: {}\nHire Date: {}",
            self.contact.info(),
            self.employee_id,
            self.department,
            self.hire_date
        )
    }

    /// Describe this role's responsibilities
    #[must_use]
    pub fn responsibilities(&self) -> &'static str {
        "Teach assigned courses, advise students, and conduct research."
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Faculty {
        Faculty::new(
            "Dr. N. K. Perera",
            "PF001",
            "nk.perera@nibm.lk",
            "0721000001",
            "E001",
            "DEP-COM",
            "2021-03-15",
        )
        .expect("valid faculty should construct")
    }

    #[test]
    fn test_valid_faculty() {
        let faculty = sample();
        assert_eq!(faculty.employee_id, "E001");
        assert_eq!(faculty.department, "DEP-COM");
        assert_eq!(faculty.hire_date, "2021-03-15");
    }

    #[test]
    fn test_rejects_bad_hire_date() {
        let result = Faculty::new(
            "Dr. N. K. Perera",
            "PF001",
            "nk.perera@nibm.lk",
            "0721000001",
            "E001",
            "DEP-COM",
            "15-03-2021",
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_info_appends_faculty_fields() {
        let info = sample().info();
        assert!(info.starts_with("Name: Dr. N. K. Perera\n"));
        assert!(info.ends_with("Employee ID: E001\nDepartment: DEP-COM\nHire Date: 2021-03-15"));
    }
}
