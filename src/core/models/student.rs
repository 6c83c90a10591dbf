//! Student model and enrollment/grading engine
//!
//! Enrollment is a semester-keyed table of ordered course-code lists
//! (insertion order, no duplicates); grades are a separate semester-keyed
//! table of course-code -> grade maps. Both invariants — at most
//! [`MAX_COURSES_PER_SEMESTER`] courses per semester, and a grade only for an
//! enrolled (semester, course) pair — are enforced at the two mutation entry
//! points, [`Student::enroll_course`] and [`Student::add_grade`].

use super::person::{validate_date, ContactInfo};
use std::collections::HashMap;

/// Maximum number of enrolled courses per semester
pub const MAX_COURSES_PER_SEMESTER: usize = 6;

/// Inclusive grade range accepted by [`Student::add_grade`]
pub const GRADE_RANGE: (f64, f64) = (0.0, 4.0);

/// Represents an enrolled student
#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    /// Shared contact record
    pub contact: ContactInfo,
    /// Student identifier (e.g., "S001")
    pub student_id: String,
    /// Declared major
    pub major: String,
    /// Enrollment date, validated as `YYYY-MM-DD`
    pub enrollment_date: String,
    /// Semester key -> ordered course codes (insertion order, deduplicated)
    enrolled_courses: HashMap<String, Vec<String>>,
    /// Semester key -> course code -> grade in [0.0, 4.0]
    grades: HashMap<String, HashMap<String, f64>>,
}

impl Student {
    /// Create a new student
    ///
    /// # Errors
    /// Returns an error on invalid email, phone, or enrollment date.
    pub fn new(
        name: &str,
        id: &str,
        email: &str,
        phone: &str,
        student_id: &str,
        major: &str,
        enrollment_date: &str,
    ) -> Result<Self, String> {
        validate_date(enrollment_date)?;

        Ok(Self {
            contact: ContactInfo::new(name, id, email, phone)?,
            student_id: student_id.to_string(),
            major: major.to_string(),
            enrollment_date: enrollment_date.to_string(),
            enrolled_courses: HashMap::new(),
            grades: HashMap::new(),
        })
    }

    /// Render the base summary plus student-specific fields
    #[must_use]
    pub fn info(&self) -> String {
        format!(
            "{}\nStudent ID: {}\nMajor: {}\nEnrollment Date: {}",
            self.contact.info(),
            self.student_id,
            self.major,
            self.enrollment_date
        )
    }

    /// Describe this role's responsibilities
    #[must_use]
    pub fn responsibilities(&self) -> &'static str {
        "Attend classes, complete coursework, and maintain academic standing."
    }

    /// Courses enrolled in `semester`, in enrollment order
    #[must_use]
    pub fn courses_for(&self, semester: &str) -> &[String] {
        self.enrolled_courses
            .get(semester)
            .map_or(&[], Vec::as_slice)
    }

    /// Whether the student is enrolled in `course_code` for `semester`
    #[must_use]
    pub fn is_enrolled(&self, semester: &str, course_code: &str) -> bool {
        self.enrolled_courses
            .get(semester)
            .is_some_and(|courses| courses.iter().any(|c| c == course_code))
    }

    /// Enroll in a course for a semester
    ///
    /// Re-enrolling an already-enrolled course is a no-op.
    ///
    /// # Errors
    /// Returns a capacity error when the semester already holds
    /// [`MAX_COURSES_PER_SEMESTER`] courses and `course_code` is new.
    pub fn enroll_course(&mut self, semester: &str, course_code: &str) -> Result<(), String> {
        let courses = self.enrolled_courses.entry(semester.to_string()).or_default();

        if courses.iter().any(|c| c == course_code) {
            return Ok(());
        }
        if courses.len() >= MAX_COURSES_PER_SEMESTER {
            return Err(format!(
                "Cannot enroll in {course_code}: semester {semester} already has \
                 {MAX_COURSES_PER_SEMESTER} courses"
            ));
        }

        courses.push(course_code.to_string());
        Ok(())
    }

    /// Record (or overwrite) a grade for an enrolled course
    ///
    /// # Errors
    /// Returns an error when the (semester, course) pair is not enrolled, or
    /// when the grade is outside [0.0, 4.0].
    pub fn add_grade(&mut self, semester: &str, course_code: &str, grade: f64) -> Result<(), String> {
        if !self.is_enrolled(semester, course_code) {
            return Err(format!(
                "Cannot grade {course_code}: not enrolled in semester {semester}"
            ));
        }

        let (min, max) = GRADE_RANGE;
        if !(min..=max).contains(&grade) {
            return Err(format!(
                "Grade {grade} is out of range [{min:.1}, {max:.1}]"
            ));
        }

        self.grades
            .entry(semester.to_string())
            .or_default()
            .insert(course_code.to_string(), grade);
        Ok(())
    }

    /// Cumulative GPA across all semesters, rounded to 2 decimals
    ///
    /// Derived and read-only: recomputed from the grade tables on every call,
    /// never stored. Returns 0.0 when no grades have been recorded.
    #[must_use]
    pub fn gpa(&self) -> f64 {
        let mut total_points = 0.0;
        let mut total_courses = 0usize;

        for courses in self.grades.values() {
            total_courses += courses.len();
            for grade in courses.values() {
                total_points += grade;
            }
        }

        if total_courses == 0 {
            return 0.0;
        }

        let gpa = total_points / total_courses as f64;
        (gpa * 100.0).round() / 100.0
    }

    /// Academic status derived from GPA
    ///
    /// - GPA >= 3.5: "Dean's List"
    /// - GPA >= 2.0: "Good Standing"
    /// - otherwise: "Probation"
    #[must_use]
    pub fn academic_status(&self) -> &'static str {
        let gpa = self.gpa();
        if gpa >= 3.5 {
            "Dean's List"
        } else if gpa >= 2.0 {
            "Good Standing"
        } else {
            "Probation"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Student {
        Student::new(
            "Test",
            "P999",
            "t@nibm.lk",
            "0700000000",
            "S999",
            "Data Science",
            "2025-10-01",
        )
        .expect("valid student should construct")
    }

    #[test]
    fn test_valid_student() {
        let student = sample();
        assert_eq!(student.contact.email, "t@nibm.lk");
        assert_eq!(student.contact.phone, "0700000000");
        assert_eq!(student.enrollment_date, "2025-10-01");
    }

    #[test]
    fn test_rejects_invalid_fields() {
        assert!(Student::new(
            "Test", "P999", "tnibm.lk", "0700000000", "S999", "Data Science", "2025-10-01",
        )
        .is_err());
        assert!(Student::new(
            "Test", "P999", "t@nibm.lk", "0700000000", "S999", "Data Science", "202510-01",
        )
        .is_err());
        assert!(Student::new(
            "Test", "P999", "t@nibm.lk", "07000000@", "S999", "Data Science", "2025-10-01",
        )
        .is_err());
    }

    #[test]
    fn test_course_limit_per_semester() {
        let mut student = sample();
        for i in 0..MAX_COURSES_PER_SEMESTER {
            student
                .enroll_course("2025S1", &format!("DS10{i}"))
                .expect("enrollment under limit should succeed");
        }

        // 7th distinct course in the same semester fails
        assert!(student.enroll_course("2025S1", "DS999").is_err());

        // Re-enrolling an existing course is still a no-op
        assert!(student.enroll_course("2025S1", "DS100").is_ok());
        assert_eq!(student.courses_for("2025S1").len(), MAX_COURSES_PER_SEMESTER);

        // A different semester is unaffected
        assert!(student.enroll_course("2025S2", "DS999").is_ok());
    }

    #[test]
    fn test_enrollment_preserves_order() {
        let mut student = sample();
        student.enroll_course("2025S1", "DS103").unwrap();
        student.enroll_course("2025S1", "DS101").unwrap();
        student.enroll_course("2025S1", "DS103").unwrap();

        assert_eq!(student.courses_for("2025S1"), ["DS103", "DS101"]);
    }

    #[test]
    fn test_grade_requires_enrollment() {
        let mut student = sample();
        assert!(student.add_grade("2025S1", "DS101", 3.0).is_err());

        student.enroll_course("2025S1", "DS101").unwrap();
        assert!(student.add_grade("2025S1", "DS101", 3.0).is_ok());

        // Enrolled course, wrong semester
        assert!(student.add_grade("2025S2", "DS101", 3.0).is_err());
    }

    #[test]
    fn test_grade_range() {
        let mut student = sample();
        student.enroll_course("2025S1", "DS101").unwrap();

        assert!(student.add_grade("2025S1", "DS101", 4.5).is_err());
        assert!(student.add_grade("2025S1", "DS101", -0.1).is_err());
        assert!(student.add_grade("2025S1", "DS101", 0.0).is_ok());
        assert!(student.add_grade("2025S1", "DS101", 4.0).is_ok());
    }

    #[test]
    fn test_gpa_and_status() {
        let mut student = sample();
        assert!((student.gpa() - 0.0).abs() < f64::EPSILON);
        assert_eq!(student.academic_status(), "Probation");

        student.enroll_course("2025S1", "DS101").unwrap();
        student.add_grade("2025S1", "DS101", 3.5).unwrap();
        assert!((student.gpa() - 3.5).abs() < f64::EPSILON);
        assert_eq!(student.academic_status(), "Dean's List");

        student.enroll_course("2025S2", "DS201").unwrap();
        student.add_grade("2025S2", "DS201", 2.0).unwrap();
        assert!((student.gpa() - 2.75).abs() < f64::EPSILON);
        assert_eq!(student.academic_status(), "Good Standing");
    }

    #[test]
    fn test_grade_overwrite_recomputes_gpa() {
        let mut student = sample();
        student.enroll_course("2025S1", "DS101").unwrap();
        student.add_grade("2025S1", "DS101", 1.0).unwrap();
        assert_eq!(student.academic_status(), "Probation");

        student.add_grade("2025S1", "DS101", 4.0).unwrap();
        assert!((student.gpa() - 4.0).abs() < f64::EPSILON);
        assert_eq!(student.academic_status(), "Dean's List");
    }

    #[test]
    fn test_gpa_rounds_to_two_decimals() {
        let mut student = sample();
        for (code, grade) in [("DS101", 3.0), ("DS102", 3.0), ("DS103", 4.0)] {
            student.enroll_course("2025S1", code).unwrap();
            student.add_grade("2025S1", code, grade).unwrap();
        }

        // 10/3 = 3.333... -> 3.33
        assert!((student.gpa() - 3.33).abs() < f64::EPSILON);
    }
}
