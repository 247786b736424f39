//! In-memory implementation of RosterService

use crate::core::{
    Course, CoursePatch, EntityStore, NewCourse, NewStudent, RosterResult, RosterService,
    StorageError, Student, StudentPatch,
};
use async_trait::async_trait;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// In-memory roster service
///
/// Wraps an [`EntityStore`] in a `RwLock`. Each operation takes the lock once,
/// so reads and mutations are atomic with respect to each other.
#[derive(Clone)]
pub struct InMemoryRosterService {
    store: Arc<RwLock<EntityStore>>,
}

impl InMemoryRosterService {
    /// Create an empty in-memory roster
    pub fn new() -> Self {
        Self::from_store(EntityStore::new())
    }

    /// Wrap an existing store
    pub fn from_store(store: EntityStore) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }

    fn read(&self, operation: &str) -> RosterResult<RwLockReadGuard<'_, EntityStore>> {
        self.store.read().map_err(|_| {
            StorageError::LockPoisoned {
                operation: operation.to_string(),
            }
            .into()
        })
    }

    fn write(&self, operation: &str) -> RosterResult<RwLockWriteGuard<'_, EntityStore>> {
        self.store.write().map_err(|_| {
            StorageError::LockPoisoned {
                operation: operation.to_string(),
            }
            .into()
        })
    }
}

impl Default for InMemoryRosterService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RosterService for InMemoryRosterService {
    async fn list_students(&self) -> RosterResult<Vec<Student>> {
        Ok(self.read("list_students")?.students())
    }

    async fn get_student(&self, id: &str) -> RosterResult<Option<Student>> {
        Ok(self.read("get_student")?.student(id).cloned())
    }

    async fn search_students_by_major(&self, major: &str) -> RosterResult<Vec<Student>> {
        Ok(self.read("search_students_by_major")?.students_by_major(major))
    }

    async fn create_student(&self, student: NewStudent) -> RosterResult<Student> {
        let created = self.write("create_student")?.insert_student(student);
        tracing::debug!(student_id = %created.id, "Student created");
        Ok(created)
    }

    async fn update_student(
        &self,
        id: &str,
        patch: StudentPatch,
    ) -> RosterResult<Option<Student>> {
        let updated = self.write("update_student")?.update_student(id, patch);
        if updated.is_some() {
            tracing::debug!(student_id = %id, "Student updated");
        }
        Ok(updated)
    }

    async fn delete_student(&self, id: &str) -> RosterResult<bool> {
        let removed = self.write("delete_student")?.remove_student(id);
        if removed {
            tracing::debug!(student_id = %id, "Student deleted");
        }
        Ok(removed)
    }

    async fn list_courses(&self) -> RosterResult<Vec<Course>> {
        Ok(self.read("list_courses")?.courses())
    }

    async fn get_course(&self, id: &str) -> RosterResult<Option<Course>> {
        Ok(self.read("get_course")?.course(id).cloned())
    }

    async fn create_course(&self, course: NewCourse) -> RosterResult<Course> {
        let created = self.write("create_course")?.insert_course(course);
        tracing::debug!(course_id = %created.id, "Course created");
        Ok(created)
    }

    async fn update_course(&self, id: &str, patch: CoursePatch) -> RosterResult<Option<Course>> {
        let updated = self.write("update_course")?.update_course(id, patch);
        if updated.is_some() {
            tracing::debug!(course_id = %id, "Course updated");
        }
        Ok(updated)
    }

    async fn delete_course(&self, id: &str) -> RosterResult<bool> {
        let removed = self.write("delete_course")?.remove_course(id);
        if removed {
            tracing::debug!(course_id = %id, "Course deleted and pruned from enrollments");
        }
        Ok(removed)
    }

    async fn enroll(&self, student_id: &str, course_id: &str) -> RosterResult<Option<Student>> {
        let student = self.write("enroll")?.enroll(student_id, course_id);
        if student.is_some() {
            tracing::debug!(student_id = %student_id, course_id = %course_id, "Student enrolled");
        }
        Ok(student)
    }

    async fn unenroll(
        &self,
        student_id: &str,
        course_id: &str,
    ) -> RosterResult<Option<Student>> {
        let student = self.write("unenroll")?.unenroll(student_id, course_id);
        if student.is_some() {
            tracing::debug!(student_id = %student_id, course_id = %course_id, "Student unenrolled");
        }
        Ok(student)
    }

    async fn courses_of(&self, student_id: &str) -> RosterResult<Vec<Course>> {
        Ok(self.read("courses_of")?.courses_of(student_id))
    }

    async fn students_of(&self, course_id: &str) -> RosterResult<Vec<Student>> {
        Ok(self.read("students_of")?.students_of(course_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_student(name: &str, major: Option<&str>) -> NewStudent {
        NewStudent {
            name: name.to_string(),
            email: format!("{}@iti.edu", name.to_lowercase()),
            age: 22,
            major: major.map(String::from),
        }
    }

    fn new_course(code: &str) -> NewCourse {
        NewCourse {
            title: "Data Structures".to_string(),
            code: code.to_string(),
            credits: 3,
            instructor: "Dr. Mohamed".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_and_get_student() {
        let service = InMemoryRosterService::new();

        let created = service
            .create_student(new_student("Ahmed", Some("Computer Science")))
            .await
            .unwrap();

        let fetched = service.get_student(&created.id).await.unwrap();
        assert_eq!(fetched, Some(created));
    }

    #[tokio::test]
    async fn test_get_missing_student_is_none() {
        let service = InMemoryRosterService::new();
        assert!(service.get_student("42").await.unwrap().is_none());
        assert!(service.get_course("42").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let service = InMemoryRosterService::new();
        let other = service.clone();

        service.create_course(new_course("CS201")).await.unwrap();

        assert_eq!(other.list_courses().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_update_student() {
        let service = InMemoryRosterService::new();
        let created = service
            .create_student(new_student("Ahmed", Some("Computer Science")))
            .await
            .unwrap();

        let updated = service
            .update_student(
                &created.id,
                StudentPatch {
                    age: Some(23),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.age, 23);
        assert_eq!(updated.major.as_deref(), Some("Computer Science"));
        assert_eq!(
            service.get_student(&created.id).await.unwrap().unwrap().age,
            23
        );
    }

    #[tokio::test]
    async fn test_delete_student() {
        let service = InMemoryRosterService::new();
        let created = service.create_student(new_student("Ahmed", None)).await.unwrap();

        assert!(service.delete_student(&created.id).await.unwrap());
        assert!(!service.delete_student(&created.id).await.unwrap());
        assert!(service.list_students().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_course_prunes_enrollments() {
        let service = InMemoryRosterService::new();
        let s = service.create_student(new_student("Ahmed", None)).await.unwrap();
        let c = service.create_course(new_course("CS201")).await.unwrap();
        service.enroll(&s.id, &c.id).await.unwrap();

        assert_eq!(service.courses_of(&s.id).await.unwrap().len(), 1);
        assert!(service.delete_course(&c.id).await.unwrap());
        assert!(service.courses_of(&s.id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_search_by_major() {
        let service = InMemoryRosterService::new();
        service
            .create_student(new_student("Ahmed", Some("Computer Science")))
            .await
            .unwrap();
        service.create_student(new_student("Omar", None)).await.unwrap();

        let found = service
            .search_students_by_major("COMPUTER SCIENCE")
            .await
            .unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Ahmed");
    }

    #[tokio::test]
    async fn test_enroll_and_unenroll() {
        let service = InMemoryRosterService::new();
        let s = service.create_student(new_student("Ahmed", None)).await.unwrap();
        let c = service.create_course(new_course("CS201")).await.unwrap();

        assert!(service.enroll(&s.id, &c.id).await.unwrap().is_some());
        assert_eq!(service.students_of(&c.id).await.unwrap().len(), 1);

        assert!(service.unenroll(&s.id, &c.id).await.unwrap().is_some());
        assert!(service.students_of(&c.id).await.unwrap().is_empty());

        assert!(service.enroll(&s.id, "404").await.unwrap().is_none());
    }
}
