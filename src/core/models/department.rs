//! Department model

use super::course::Course;
use super::faculty::Faculty;

/// Represents a department with faculty and course registries
///
/// Both registries are deduplicated on add: faculty by employee id, courses
/// by course code.
#[derive(Debug, Clone, PartialEq)]
pub struct Department {
    /// Department name
    pub name: String,
    /// Department head
    pub head: Faculty,
    /// Faculty members (insertion order, deduplicated by employee id)
    pub faculty: Vec<Faculty>,
    /// Courses offered (insertion order, deduplicated by course code)
    pub courses: Vec<Course>,
}

impl Department {
    /// Create a new department
    #[must_use]
    pub const fn new(name: String, head: Faculty) -> Self {
        Self {
            name,
            head,
            faculty: Vec::new(),
            courses: Vec::new(),
        }
    }

    /// Add a faculty member; no-op when already registered
    pub fn add_faculty(&mut self, faculty: Faculty) {
        if !self
            .faculty
            .iter()
            .any(|f| f.employee_id == faculty.employee_id)
        {
            self.faculty.push(faculty);
        }
    }

    /// Add a course; no-op when already registered
    pub fn add_course(&mut self, course: Course) {
        if !self.courses.iter().any(|c| c.code == course.code) {
            self.courses.push(course);
        }
    }

    /// Render the department summary
    #[must_use]
    pub fn info(&self) -> String {
        let faculty_names = self
            .faculty
            .iter()
            .map(|f| f.contact.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        let course_codes = self
            .courses
            .iter()
            .map(|c| c.code.as_str())
            .collect::<Vec<_>>()
            .join(", ");

        format!(
            "Department: {}\nHead: {}\nFaculty: {}\nCourses: {}",
            self.name,
            self.head.contact.name,
            faculty_names,
            if course_codes.is_empty() {
                "None"
            } else {
                &course_codes
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn faculty(n: u32) -> Faculty {
        Faculty::new(
            &format!("Dr. F{n}"),
            &format!("PF{n:03}"),
            "f@nibm.lk",
            "0721000001",
            &format!("E{n:03}"),
            "DEP-COM",
            "2021-03-15",
        )
        .unwrap()
    }

    #[test]
    fn test_add_faculty_dedup() {
        let mut dept = Department::new("Computing".to_string(), faculty(1));
        dept.add_faculty(faculty(2));
        dept.add_faculty(faculty(2));
        dept.add_faculty(faculty(3));

        assert_eq!(dept.faculty.len(), 2);
    }

    #[test]
    fn test_add_course_dedup() {
        let mut dept = Department::new("Computing".to_string(), faculty(1));
        let course = Course::new("DS101", "Intro", 3, faculty(2), 30).unwrap();
        dept.add_course(course.clone());
        dept.add_course(course);

        assert_eq!(dept.courses.len(), 1);
    }

    #[test]
    fn test_info_with_no_courses() {
        let mut dept = Department::new("Computing".to_string(), faculty(1));
        dept.add_faculty(faculty(2));

        let info = dept.info();
        assert!(info.starts_with("Department: Computing\nHead: Dr. F1\n"));
        assert!(info.ends_with("Courses: None"));
    }
}
