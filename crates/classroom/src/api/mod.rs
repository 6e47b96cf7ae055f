//! API groups, one per Classroom resource collection.

mod course_work;
mod courses;
mod students;
mod teachers;

pub use course_work::{CourseWorkApi, NewCourseWork};
pub use courses::{CoursesApi, NewCourse};
pub use students::StudentsApi;
pub use teachers::TeachersApi;
