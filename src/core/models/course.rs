//! Course model and roster

use super::faculty::Faculty;
use super::student::Student;
use std::fmt;

/// Represents a course with a capacity-bounded roster
///
/// The roster stores student identifiers in enrollment order without
/// duplicates. The instructor is a [`Faculty`] value, consistent with how
/// departments reference their head and members.
#[derive(Debug, Clone, PartialEq)]
pub struct Course {
    /// Course code (e.g., "DS101")
    pub code: String,
    /// Course name
    pub name: String,
    /// Credit hours, always positive
    pub credits: u32,
    /// Instructor teaching the course
    pub instructor: Faculty,
    /// Maximum roster size, always positive
    pub max_capacity: usize,
    /// Enrolled student ids (insertion order, deduplicated)
    enrolled_students: Vec<String>,
}

impl Course {
    /// Create a new course
    ///
    /// # Errors
    /// Returns an error when `credits` or `max_capacity` is zero.
    pub fn new(
        code: &str,
        name: &str,
        credits: u32,
        instructor: Faculty,
        max_capacity: usize,
    ) -> Result<Self, String> {
        if credits == 0 {
            return Err("Credits must be a positive value".to_string());
        }
        if max_capacity == 0 {
            return Err("Max capacity must be a positive value".to_string());
        }

        Ok(Self {
            code: code.to_string(),
            name: name.to_string(),
            credits,
            instructor,
            max_capacity,
            enrolled_students: Vec::new(),
        })
    }

    /// Whether the course has reached its maximum capacity
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.enrolled_students.len() >= self.max_capacity
    }

    /// Number of enrolled students
    #[must_use]
    pub fn enrolled_count(&self) -> usize {
        self.enrolled_students.len()
    }

    /// Whether `student` is on the roster
    #[must_use]
    pub fn has_student(&self, student: &Student) -> bool {
        self.enrolled_students
            .iter()
            .any(|id| id == &student.student_id)
    }

    /// Add a student to the roster
    ///
    /// Adding an already-enrolled student is a no-op.
    ///
    /// # Errors
    /// Returns a capacity error when the roster is full.
    pub fn add_student(&mut self, student: &Student) -> Result<(), String> {
        if self.is_full() {
            return Err(format!(
                "Cannot add student: course {} is at full capacity of {}",
                self.code, self.max_capacity
            ));
        }

        if !self.has_student(student) {
            self.enrolled_students.push(student.student_id.clone());
        }
        Ok(())
    }

    /// Remove a student from the roster; no-op when not enrolled
    pub fn remove_student(&mut self, student: &Student) {
        self.enrolled_students.retain(|id| id != &student.student_id);
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} ({} credits) | Instructor: {} | Enrolled: {}/{}",
            self.code,
            self.name,
            self.credits,
            self.instructor.contact.name,
            self.enrolled_students.len(),
            self.max_capacity
        )
    }
}
