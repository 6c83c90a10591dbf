//! Closed set of university roles
//!
//! The single dispatch point for rendering member summaries and describing
//! responsibilities across the three role records.

use super::faculty::Faculty;
use super::staff::Staff;
use super::student::Student;

/// A university member: one of the three role records
#[derive(Debug, Clone, PartialEq)]
pub enum Member {
    /// An enrolled student
    Student(Student),
    /// An academic staff member
    Faculty(Faculty),
    /// A non-academic staff member
    Staff(Staff),
}

impl Member {
    /// Render the member's multi-line summary: the shared contact lines plus
    /// the role-specific fields.
    #[must_use]
    pub fn info(&self) -> String {
        match self {
            Self::Student(s) => s.info(),
            Self::Faculty(f) => f.info(),
            Self::Staff(s) => s.info(),
        }
    }

    /// Describe the member's responsibilities
    #[must_use]
    pub fn responsibilities(&self) -> &'static str {
        match self {
            Self::Student(s) => s.responsibilities(),
            Self::Faculty(f) => f.responsibilities(),
            Self::Staff(s) => s.responsibilities(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_appends_role_fields() {
        let student = Student::new(
            "Test", "P999", "t@nibm.lk", "0700000000", "S999", "Data Science", "2025-10-01",
        )
        .unwrap();
        let faculty = Faculty::new(
            "Dr. Test", "PF999", "f@nibm.lk", "0721000001", "E999", "DEP-COM", "2021-03-15",
        )
        .unwrap();
        let staff = Staff::new(
            "Ms. Test", "PSF999", "s@nibm.lk", "0732000001", "ES999", "Lab Assistant", "DEP-COM",
        )
        .unwrap();

        for member in [
            Member::Student(student),
            Member::Faculty(faculty),
            Member::Staff(staff),
        ] {
            let info = member.info();
            // Every summary starts with the shared contact lines
            assert!(info.starts_with("Name: "));
            assert!(info.contains("\nEmail: "));
            // And appends at least one role-specific line
            assert!(info.lines().count() > 4);
            assert!(!member.responsibilities().is_empty());
        }
    }

    #[test]
    fn test_role_specific_lines() {
        let student = Student::new(
            "Test", "P999", "t@nibm.lk", "0700000000", "S999", "Data Science", "2025-10-01",
        )
        .unwrap();
        let member = Member::Student(student);

        assert!(member.info().contains("Major: Data Science"));
        assert!(member.responsibilities().contains("coursework"));
    }
}
