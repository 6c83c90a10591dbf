//! Data models for the university registry

pub mod course;
pub mod department;
pub mod faculty;
pub mod member;
pub mod person;
pub mod staff;
pub mod student;

pub use course::Course;
pub use department::Department;
pub use faculty::Faculty;
pub use member::Member;
pub use person::ContactInfo;
pub use staff::Staff;
pub use student::Student;
