//! Service trait for roster operations

use crate::core::error::RosterResult;
use crate::core::model::{Course, CoursePatch, NewCourse, NewStudent, Student, StudentPatch};
use async_trait::async_trait;

/// Service trait for students, courses and enrollments
///
/// Resolvers only talk to this trait, so the backing store can be swapped
/// without touching the GraphQL layer. Missing records are reported as
/// `None` / `false`; `Err` is reserved for store failures.
#[async_trait]
pub trait RosterService: Send + Sync {
    /// List all students in insertion order
    async fn list_students(&self) -> RosterResult<Vec<Student>>;

    /// Get a student by ID
    async fn get_student(&self, id: &str) -> RosterResult<Option<Student>>;

    /// Students whose major matches, ignoring case
    async fn search_students_by_major(&self, major: &str) -> RosterResult<Vec<Student>>;

    /// Add a student with a fresh ID and no enrollments
    async fn create_student(&self, student: NewStudent) -> RosterResult<Student>;

    /// Apply a partial update; `None` if the student does not exist
    async fn update_student(&self, id: &str, patch: StudentPatch)
    -> RosterResult<Option<Student>>;

    /// Delete a student and its enrollments; `true` if one was removed
    async fn delete_student(&self, id: &str) -> RosterResult<bool>;

    /// List all courses in insertion order
    async fn list_courses(&self) -> RosterResult<Vec<Course>>;

    /// Get a course by ID
    async fn get_course(&self, id: &str) -> RosterResult<Option<Course>>;

    /// Add a course with a fresh ID
    async fn create_course(&self, course: NewCourse) -> RosterResult<Course>;

    /// Apply a partial update; `None` if the course does not exist
    async fn update_course(&self, id: &str, patch: CoursePatch) -> RosterResult<Option<Course>>;

    /// Delete a course and prune it from every enrollment
    async fn delete_course(&self, id: &str) -> RosterResult<bool>;

    /// Enroll a student in a course
    ///
    /// Returns the student, or `None` if either record is missing.
    async fn enroll(&self, student_id: &str, course_id: &str) -> RosterResult<Option<Student>>;

    /// Remove a course from a student's enrollments
    async fn unenroll(&self, student_id: &str, course_id: &str)
    -> RosterResult<Option<Student>>;

    /// Courses a student is enrolled in
    async fn courses_of(&self, student_id: &str) -> RosterResult<Vec<Course>>;

    /// Students enrolled in a course
    async fn students_of(&self, course_id: &str) -> RosterResult<Vec<Student>>;
}
