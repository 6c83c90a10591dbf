//! Staff model

use super::person::ContactInfo;

/// Fixed role -> responsibility description table
const ROLE_RESPONSIBILITIES: &[(&str, &str)] = &[
    (
        "Lab Assistant",
        "Prepare lab equipment, assist practical sessions, and maintain lab inventory.",
    ),
    (
        "Technical Officer",
        "Maintain IT infrastructure and support teaching technology.",
    ),
    (
        "Program Coordinator",
        "Coordinate course schedules, liaise with faculty, and track student progress.",
    ),
    (
        "Administrative Officer",
        "Handle administrative records, correspondence, and office operations.",
    ),
    (
        "Student Affairs Executive",
        "Support student services, events, and welfare programs.",
    ),
];

/// Description used when the role is not in the lookup table
const GENERIC_RESPONSIBILITIES: &str = "General responsibilities in the university.";

/// Represents a non-academic staff member
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Staff {
    /// Shared contact record
    pub contact: ContactInfo,
    /// Employee identifier (e.g., "ES001")
    pub employee_id: String,
    /// Job role (e.g., "Lab Assistant")
    pub role: String,
    /// Department code (e.g., "DEP-COM")
    pub department: String,
}

impl Staff {
    /// Create a new staff member
    ///
    /// # Errors
    /// Returns an error on invalid email or phone.
    pub fn new(
        name: &str,
        id: &str,
        email: &str,
        phone: &str,
        employee_id: &str,
        role: &str,
        department: &str,
    ) -> Result<Self, String> {
        Ok(Self {
            contact: ContactInfo::new(name, id, email, phone)?,
            employee_id: employee_id.to_string(),
            role: role.to_string(),
            department: department.to_string(),
        })
    }

    /// Render the base summary plus staff-specific fields
    #[must_use]
    pub fn info(&self) -> String {
        format!(
            "{}\nEmployee ID: {}\nRole: {}\nDepartment: {}",
            self.contact.info(),
            self.employee_id,
            self.role,
            self.department
        )
    }

    /// Describe this role's responsibilities from the fixed lookup table,
    /// defaulting to a generic description for unrecognized roles.
    #[must_use]
    pub fn responsibilities(&self) -> &'static str {
        ROLE_RESPONSIBILITIES
            .iter()
            .find(|(role, _)| *role == self.role)
            .map_or(GENERIC_RESPONSIBILITIES, |(_, description)| description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(role: &str) -> Staff {
        Staff::new(
            "Ms. K. M. Dilrukshi Silva",
            "PSF001",
            "dilrukshi.silva@nibm.lk",
            "0732000001",
            "ES001",
            role,
            "DEP-COM",
        )
        .expect("valid staff should construct")
    }

    #[test]
    fn test_known_role_lookup() {
        let staff = sample("Lab Assistant");
        assert!(staff.responsibilities().contains("lab"));
    }

    #[test]
    fn test_unknown_role_falls_back() {
        let staff = sample("Groundskeeper");
        assert_eq!(staff.responsibilities(), GENERIC_RESPONSIBILITIES);
    }

    #[test]
    fn test_info_appends_staff_fields() {
        let info = sample("Lab Assistant").info();
        assert!(info.contains("Employee ID: ES001"));
        assert!(info.ends_with("Role: Lab Assistant\nDepartment: DEP-COM"));
    }
}
