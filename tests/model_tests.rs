//! Integration tests for the university entity model

use campus_analytics::models::{Course, Department, Faculty, Member, Staff, Student};

fn sample_student() -> Student {
    Student::new(
        "Amina Perera",
        "P100",
        "amina@uni.edu",
        "0771234567",
        "S2024001",
        "Computer Science",
        "2024-02-01",
    )
    .expect("valid student")
}

fn sample_faculty() -> Faculty {
    Faculty::new(
        "Dr. Ruwan Silva",
        "P200",
        "ruwan@uni.edu",
        "0112345678",
        "E1001",
        "Computer Science",
        "2015-08-15",
    )
    .expect("valid faculty")
}

#[test]
fn test_invalid_contact_details_rejected() {
    assert!(Student::new(
        "X",
        "P1",
        "not-an-email",
        "0771234567",
        "S1",
        "CS",
        "2024-01-01"
    )
    .is_err());

    assert!(Student::new(
        "X",
        "P1",
        "x@uni.edu",
        "12345",
        "S1",
        "CS",
        "2024-01-01"
    )
    .is_err());

    assert!(Student::new(
        "X",
        "P1",
        "x@uni.edu",
        "0771234567",
        "S1",
        "CS",
        "2024-13-40"
    )
    .is_err());
}

#[test]
fn test_enrollment_grading_and_gpa() {
    let mut student = sample_student();

    student
        .enroll_course("2024-S1", "CS101")
        .expect("first enrollment");
    student
        .enroll_course("2024-S1", "CS102")
        .expect("second enrollment");

    // Enrolling twice is a quiet no-op
    student
        .enroll_course("2024-S1", "CS101")
        .expect("re-enrollment is idempotent");
    assert_eq!(student.courses_for("2024-S1").len(), 2);

    // Grades require enrollment and a valid range
    assert!(student.add_grade("2024-S1", "CS999", 3.0).is_err());
    assert!(student.add_grade("2024-S1", "CS101", 4.5).is_err());

    student.add_grade("2024-S1", "CS101", 4.0).expect("grade 1");
    student.add_grade("2024-S1", "CS102", 3.0).expect("grade 2");
    assert!((student.gpa() - 3.5).abs() < f64::EPSILON);
    assert_eq!(student.academic_status(), "Dean's List");
}

#[test]
fn test_semester_course_limit() {
    let mut student = sample_student();

    for i in 0..6 {
        student
            .enroll_course("2024-S1", &format!("CS10{i}"))
            .expect("within limit");
    }
    assert!(student.enroll_course("2024-S1", "CS200").is_err());

    // The limit is per semester
    student
        .enroll_course("2024-S2", "CS200")
        .expect("other semester unaffected");
}

#[test]
fn test_course_capacity_and_membership() {
    let faculty = sample_faculty();
    let mut course =
        Course::new("CS101", "Intro to Programming", 4, faculty, 2).expect("valid course");

    let student_a = sample_student();
    let student_b = Student::new(
        "Bimal Fernando",
        "P101",
        "bimal@uni.edu",
        "0779876543",
        "S2024002",
        "Computer Science",
        "2024-02-01",
    )
    .expect("valid student");

    course.add_student(&student_a).expect("first seat");
    // Duplicate add is a quiet no-op
    course.add_student(&student_a).expect("duplicate ignored");
    assert_eq!(course.enrolled_count(), 1);

    course.add_student(&student_b).expect("second seat");
    assert!(course.is_full());

    let student_c = Student::new(
        "Chathu Jayasuriya",
        "P102",
        "chathu@uni.edu",
        "0770001111",
        "S2024003",
        "Mathematics",
        "2024-02-01",
    )
    .expect("valid student");
    assert!(course.add_student(&student_c).is_err());

    course.remove_student(&student_a);
    assert!(!course.has_student(&student_a));
    assert!(!course.is_full());
}

#[test]
fn test_course_rejects_zero_values() {
    assert!(Course::new("CS0", "Zero Credits", 0, sample_faculty(), 10).is_err());
    assert!(Course::new("CS0", "Zero Capacity", 3, sample_faculty(), 0).is_err());
}

#[test]
fn test_department_deduplicates_registries() {
    let head = sample_faculty();
    let mut department = Department::new("Computer Science".to_string(), head.clone());

    department.add_faculty(head.clone());
    department.add_faculty(head.clone());
    assert_eq!(department.faculty.len(), 1);

    let course = Course::new("CS101", "Intro", 4, head, 50).expect("valid course");
    department.add_course(course.clone());
    department.add_course(course);
    assert_eq!(department.courses.len(), 1);
}

#[test]
fn test_member_dispatch() {
    let staff = Staff::new(
        "Nadeesha Perera",
        "P300",
        "nadeesha@uni.edu",
        "0771112222",
        "E2001",
        "Lab Assistant",
        "Computer Science",
    )
    .expect("valid staff");

    let members = vec![
        Member::Student(sample_student()),
        Member::Faculty(sample_faculty()),
        Member::Staff(staff),
    ];

    let summaries: Vec<String> = members.iter().map(Member::info).collect();
    assert!(summaries[0].contains("S2024001"));
    assert!(summaries[1].contains("E1001"));
    assert!(summaries[2].contains("Lab Assistant"));

    // Every member answers responsibilities through the same dispatch point
    for member in &members {
        assert!(!member.responsibilities().is_empty());
    }
}
