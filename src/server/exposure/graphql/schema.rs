//! GraphQL schema for students, courses and enrollments
//!
//! The roster service is injected into the schema as context data, so
//! resolvers never reach for global state and every schema built in tests
//! gets its own store.

use crate::core::{
    Course, CoursePatch, NewCourse, NewStudent, RosterError, RosterService, Student, StudentPatch,
};
use async_graphql::{
    Context, EmptySubscription, Error, ErrorExtensions, ID, MaybeUndefined, Object, Result, Schema,
};
use std::sync::Arc;

/// The executable schema type served by the GraphQL exposure
pub type RosterSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the GraphQL schema around a roster service
pub fn build_schema(roster: Arc<dyn RosterService>) -> RosterSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(roster)
        .finish()
}

fn roster<'a>(ctx: &Context<'a>) -> Result<&'a Arc<dyn RosterService>> {
    ctx.data::<Arc<dyn RosterService>>()
}

impl ErrorExtensions for RosterError {
    fn extend(&self) -> Error {
        Error::new(self.to_string()).extend_with(|_, e| e.set("code", self.error_code()))
    }
}

#[Object]
impl Student {
    async fn id(&self) -> ID {
        ID(self.id.clone())
    }

    async fn name(&self) -> &str {
        &self.name
    }

    async fn email(&self) -> &str {
        &self.email
    }

    async fn age(&self) -> i32 {
        self.age
    }

    async fn major(&self) -> Option<&str> {
        self.major.as_deref()
    }

    /// Courses this student is enrolled in
    async fn courses(&self, ctx: &Context<'_>) -> Result<Vec<Course>> {
        roster(ctx)?
            .courses_of(&self.id)
            .await
            .map_err(|e| e.extend())
    }
}

#[Object]
impl Course {
    async fn id(&self) -> ID {
        ID(self.id.clone())
    }

    async fn title(&self) -> &str {
        &self.title
    }

    async fn code(&self) -> &str {
        &self.code
    }

    async fn credits(&self) -> i32 {
        self.credits
    }

    async fn instructor(&self) -> &str {
        &self.instructor
    }

    /// Students enrolled in this course
    async fn students(&self, ctx: &Context<'_>) -> Result<Vec<Student>> {
        roster(ctx)?
            .students_of(&self.id)
            .await
            .map_err(|e| e.extend())
    }
}

#[derive(Default)]
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// List all students in insertion order
    async fn get_all_students(&self, ctx: &Context<'_>) -> Result<Vec<Student>> {
        roster(ctx)?.list_students().await.map_err(|e| e.extend())
    }

    /// Get a student by ID, or null
    async fn get_student(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Student>> {
        roster(ctx)?
            .get_student(id.as_str())
            .await
            .map_err(|e| e.extend())
    }

    /// List all courses in insertion order
    async fn get_all_courses(&self, ctx: &Context<'_>) -> Result<Vec<Course>> {
        roster(ctx)?.list_courses().await.map_err(|e| e.extend())
    }

    /// Get a course by ID, or null
    async fn get_course(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Course>> {
        roster(ctx)?
            .get_course(id.as_str())
            .await
            .map_err(|e| e.extend())
    }

    /// Students whose major matches, ignoring case
    async fn search_students_by_major(
        &self,
        ctx: &Context<'_>,
        major: String,
    ) -> Result<Vec<Student>> {
        roster(ctx)?
            .search_students_by_major(&major)
            .await
            .map_err(|e| e.extend())
    }
}

#[derive(Default)]
pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn add_student(
        &self,
        ctx: &Context<'_>,
        name: String,
        email: String,
        age: i32,
        major: Option<String>,
    ) -> Result<Student> {
        let new = NewStudent {
            name,
            email,
            age,
            major,
        };
        roster(ctx)?.create_student(new).await.map_err(|e| e.extend())
    }

    /// Update the provided fields of a student
    ///
    /// `major: null` clears the major. Null for the other fields leaves
    /// them unchanged.
    async fn update_student(
        &self,
        ctx: &Context<'_>,
        id: ID,
        name: Option<String>,
        email: Option<String>,
        age: Option<i32>,
        major: MaybeUndefined<String>,
    ) -> Result<Option<Student>> {
        let patch = StudentPatch {
            name,
            email,
            age,
            major: match major {
                MaybeUndefined::Undefined => None,
                MaybeUndefined::Null => Some(None),
                MaybeUndefined::Value(major) => Some(Some(major)),
            },
        };
        roster(ctx)?
            .update_student(id.as_str(), patch)
            .await
            .map_err(|e| e.extend())
    }

    /// Delete a student; false if there was nothing to delete
    async fn delete_student(&self, ctx: &Context<'_>, id: ID) -> Result<bool> {
        roster(ctx)?
            .delete_student(id.as_str())
            .await
            .map_err(|e| e.extend())
    }

    async fn add_course(
        &self,
        ctx: &Context<'_>,
        title: String,
        code: String,
        credits: i32,
        instructor: String,
    ) -> Result<Course> {
        let new = NewCourse {
            title,
            code,
            credits,
            instructor,
        };
        roster(ctx)?.create_course(new).await.map_err(|e| e.extend())
    }

    async fn update_course(
        &self,
        ctx: &Context<'_>,
        id: ID,
        title: Option<String>,
        code: Option<String>,
        credits: Option<i32>,
        instructor: Option<String>,
    ) -> Result<Option<Course>> {
        let patch = CoursePatch {
            title,
            code,
            credits,
            instructor,
        };
        roster(ctx)?
            .update_course(id.as_str(), patch)
            .await
            .map_err(|e| e.extend())
    }

    /// Delete a course and drop it from every student's enrollments
    async fn delete_course(&self, ctx: &Context<'_>, id: ID) -> Result<bool> {
        roster(ctx)?
            .delete_course(id.as_str())
            .await
            .map_err(|e| e.extend())
    }

    /// Enroll a student in a course; null if either does not exist
    async fn enroll_student(
        &self,
        ctx: &Context<'_>,
        student_id: ID,
        course_id: ID,
    ) -> Result<Option<Student>> {
        roster(ctx)?
            .enroll(student_id.as_str(), course_id.as_str())
            .await
            .map_err(|e| e.extend())
    }

    /// Remove a course from a student's enrollments; null if the student does not exist
    async fn unenroll_student(
        &self,
        ctx: &Context<'_>,
        student_id: ID,
        course_id: ID,
    ) -> Result<Option<Student>> {
        roster(ctx)?
            .unenroll(student_id.as_str(), course_id.as_str())
            .await
            .map_err(|e| e.extend())
    }
}
