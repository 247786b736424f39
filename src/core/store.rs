//! Entity store holding students, courses and the enrollment index
//!
//! The store is plain data with synchronous operations. Sharing and locking
//! are the job of the service implementation wrapping it (see
//! [`InMemoryRosterService`](crate::storage::InMemoryRosterService)).

use super::model::{Course, CoursePatch, NewCourse, NewStudent, Student, StudentPatch};
use indexmap::{IndexMap, IndexSet};
use std::collections::HashMap;

/// Monotonic identifier source for one collection
///
/// Identifiers are decimal strings starting at `"1"` and are never handed out
/// twice, even after the record carrying them is deleted.
#[derive(Debug, Clone, Default)]
pub struct IdAllocator {
    last: u64,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the next identifier
    pub fn next_id(&mut self) -> String {
        self.last += 1;
        self.last.to_string()
    }
}

/// Students, courses and the student -> courses enrollment relation
#[derive(Debug, Clone, Default)]
pub struct EntityStore {
    students: IndexMap<String, Student>,
    courses: IndexMap<String, Course>,
    enrollments: HashMap<String, IndexSet<String>>,
    student_ids: IdAllocator,
    course_ids: IdAllocator,
}

impl EntityStore {
    pub fn new() -> Self {
        Self::default()
    }

    // === Students ===

    /// All students in insertion order
    pub fn students(&self) -> Vec<Student> {
        self.students.values().cloned().collect()
    }

    pub fn student(&self, id: &str) -> Option<&Student> {
        self.students.get(id)
    }

    /// Students whose major equals `major`, ignoring case
    ///
    /// Students without a major never match.
    pub fn students_by_major(&self, major: &str) -> Vec<Student> {
        let wanted = major.to_lowercase();
        self.students
            .values()
            .filter(|s| {
                s.major
                    .as_deref()
                    .is_some_and(|m| m.to_lowercase() == wanted)
            })
            .cloned()
            .collect()
    }

    pub fn insert_student(&mut self, new: NewStudent) -> Student {
        let id = self.student_ids.next_id();
        let student = new.into_student(id.clone());
        self.students.insert(id.clone(), student.clone());
        self.enrollments.insert(id, IndexSet::new());
        student
    }

    pub fn update_student(&mut self, id: &str, patch: StudentPatch) -> Option<Student> {
        let student = self.students.get_mut(id)?;
        patch.apply_to(student);
        Some(student.clone())
    }

    /// Remove a student and its enrollment entry
    ///
    /// Returns `true` only if a record was removed.
    pub fn remove_student(&mut self, id: &str) -> bool {
        self.enrollments.remove(id);
        self.students.shift_remove(id).is_some()
    }

    // === Courses ===

    /// All courses in insertion order
    pub fn courses(&self) -> Vec<Course> {
        self.courses.values().cloned().collect()
    }

    pub fn course(&self, id: &str) -> Option<&Course> {
        self.courses.get(id)
    }

    pub fn insert_course(&mut self, new: NewCourse) -> Course {
        let id = self.course_ids.next_id();
        let course = new.into_course(id.clone());
        self.courses.insert(id, course.clone());
        course
    }

    pub fn update_course(&mut self, id: &str, patch: CoursePatch) -> Option<Course> {
        let course = self.courses.get_mut(id)?;
        patch.apply_to(course);
        Some(course.clone())
    }

    /// Remove a course and prune it from every enrollment set
    pub fn remove_course(&mut self, id: &str) -> bool {
        for course_ids in self.enrollments.values_mut() {
            course_ids.shift_remove(id);
        }
        self.courses.shift_remove(id).is_some()
    }

    // === Enrollments ===

    /// Enroll a student in a course
    ///
    /// Returns the student, or `None` if either side does not exist.
    /// Enrolling twice has no further effect.
    pub fn enroll(&mut self, student_id: &str, course_id: &str) -> Option<Student> {
        if !self.courses.contains_key(course_id) {
            return None;
        }
        let student = self.students.get(student_id)?;
        self.enrollments
            .entry(student_id.to_string())
            .or_default()
            .insert(course_id.to_string());
        Some(student.clone())
    }

    /// Drop a course from a student's enrollments
    ///
    /// Returns the student, or `None` if the student does not exist.
    pub fn unenroll(&mut self, student_id: &str, course_id: &str) -> Option<Student> {
        let student = self.students.get(student_id)?;
        if let Some(course_ids) = self.enrollments.get_mut(student_id) {
            course_ids.shift_remove(course_id);
        }
        Some(student.clone())
    }

    /// Courses the student is enrolled in, in course collection order
    pub fn courses_of(&self, student_id: &str) -> Vec<Course> {
        let Some(course_ids) = self.enrollments.get(student_id) else {
            return vec![];
        };
        self.courses
            .values()
            .filter(|c| course_ids.contains(&c.id))
            .cloned()
            .collect()
    }

    /// Students enrolled in the course, in student collection order
    pub fn students_of(&self, course_id: &str) -> Vec<Student> {
        self.students
            .values()
            .filter(|s| {
                self.enrollments
                    .get(&s.id)
                    .is_some_and(|course_ids| course_ids.contains(course_id))
            })
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_student(name: &str, major: Option<&str>) -> NewStudent {
        NewStudent {
            name: name.to_string(),
            email: format!("{}@iti.edu", name.to_lowercase()),
            age: 21,
            major: major.map(String::from),
        }
    }

    fn new_course(code: &str) -> NewCourse {
        NewCourse {
            title: format!("Course {}", code),
            code: code.to_string(),
            credits: 3,
            instructor: "Dr. Mohamed".to_string(),
        }
    }

    #[test]
    fn test_id_allocator_starts_at_one() {
        let mut ids = IdAllocator::new();
        assert_eq!(ids.next_id(), "1");
        assert_eq!(ids.next_id(), "2");
    }

    #[test]
    fn test_ids_not_reused_after_delete() {
        let mut store = EntityStore::new();
        store.insert_student(new_student("Ahmed", None));
        let second = store.insert_student(new_student("Fatma", None));
        assert!(store.remove_student(&second.id));

        let third = store.insert_student(new_student("Omar", None));
        assert_eq!(third.id, "3");
        assert_eq!(store.students().len(), 2);
    }

    #[test]
    fn test_new_student_is_enrolled_nowhere() {
        let mut store = EntityStore::new();
        store.insert_course(new_course("CS201"));
        let s = store.insert_student(new_student("Ahmed", None));
        assert!(store.courses_of(&s.id).is_empty());
    }

    #[test]
    fn test_remove_keeps_insertion_order() {
        let mut store = EntityStore::new();
        for name in ["A", "B", "C"] {
            store.insert_student(new_student(name, None));
        }
        store.remove_student("2");

        let names: Vec<_> = store.students().into_iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["A", "C"]);
    }

    #[test]
    fn test_remove_student_twice() {
        let mut store = EntityStore::new();
        let s = store.insert_student(new_student("Ahmed", None));
        assert!(store.remove_student(&s.id));
        assert!(!store.remove_student(&s.id));
    }

    #[test]
    fn test_students_by_major_ignores_case_and_skips_missing() {
        let mut store = EntityStore::new();
        store.insert_student(new_student("Ahmed", Some("Computer Science")));
        store.insert_student(new_student("Fatma", Some("Information Systems")));
        store.insert_student(new_student("Omar", None));

        let found = store.students_by_major("computer science");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Ahmed");

        assert!(store.students_by_major("physics").is_empty());
        assert!(store.students_by_major("").is_empty());
    }

    #[test]
    fn test_enroll_is_idempotent() {
        let mut store = EntityStore::new();
        let s = store.insert_student(new_student("Ahmed", None));
        let c = store.insert_course(new_course("CS201"));

        assert!(store.enroll(&s.id, &c.id).is_some());
        assert!(store.enroll(&s.id, &c.id).is_some());
        assert_eq!(store.courses_of(&s.id).len(), 1);
        assert_eq!(store.students_of(&c.id).len(), 1);
    }

    #[test]
    fn test_enroll_requires_both_sides() {
        let mut store = EntityStore::new();
        let s = store.insert_student(new_student("Ahmed", None));
        let c = store.insert_course(new_course("CS201"));

        assert!(store.enroll(&s.id, "99").is_none());
        assert!(store.enroll("99", &c.id).is_none());
        assert!(store.students_of(&c.id).is_empty());
    }

    #[test]
    fn test_unenroll() {
        let mut store = EntityStore::new();
        let s = store.insert_student(new_student("Ahmed", None));
        let c = store.insert_course(new_course("CS201"));
        store.enroll(&s.id, &c.id);

        assert!(store.unenroll(&s.id, &c.id).is_some());
        assert!(store.courses_of(&s.id).is_empty());
        // Not enrolled anymore, still a no-op success
        assert!(store.unenroll(&s.id, &c.id).is_some());
        assert!(store.unenroll("99", &c.id).is_none());
    }

    #[test]
    fn test_relations_follow_collection_order() {
        let mut store = EntityStore::new();
        let a = store.insert_student(new_student("A", None));
        let b = store.insert_student(new_student("B", None));
        let c1 = store.insert_course(new_course("CS201"));
        let c2 = store.insert_course(new_course("CS301"));

        // Enroll in reverse order
        store.enroll(&b.id, &c1.id);
        store.enroll(&a.id, &c2.id);
        store.enroll(&a.id, &c1.id);

        let codes: Vec<_> = store.courses_of(&a.id).into_iter().map(|c| c.code).collect();
        assert_eq!(codes, vec!["CS201", "CS301"]);

        let names: Vec<_> = store.students_of(&c1.id).into_iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["A", "B"]);
    }

    #[test]
    fn test_remove_course_prunes_enrollments() {
        let mut store = EntityStore::new();
        let a = store.insert_student(new_student("A", None));
        let b = store.insert_student(new_student("B", None));
        let c1 = store.insert_course(new_course("CS201"));
        let c2 = store.insert_course(new_course("CS301"));
        store.enroll(&a.id, &c1.id);
        store.enroll(&a.id, &c2.id);
        store.enroll(&b.id, &c2.id);

        assert!(store.remove_course(&c2.id));

        assert_eq!(store.courses_of(&a.id).len(), 1);
        assert!(store.courses_of(&b.id).is_empty());
        assert!(store.students_of(&c2.id).is_empty());
        assert!(!store.remove_course(&c2.id));
    }

    #[test]
    fn test_remove_student_drops_from_course_side() {
        let mut store = EntityStore::new();
        let a = store.insert_student(new_student("A", None));
        let c = store.insert_course(new_course("CS201"));
        store.enroll(&a.id, &c.id);

        store.remove_student(&a.id);
        assert!(store.students_of(&c.id).is_empty());
    }

    #[test]
    fn test_update_missing_returns_none() {
        let mut store = EntityStore::new();
        assert!(store.update_student("1", StudentPatch::default()).is_none());
        assert!(store.update_course("1", CoursePatch::default()).is_none());
    }
}
