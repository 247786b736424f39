//! Student and course records plus their create/update inputs

use serde::{Deserialize, Serialize};

/// A student record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: String,
    pub name: String,
    pub email: String,
    pub age: i32,
    pub major: Option<String>,
}

/// A course record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub id: String,
    pub title: String,
    pub code: String,
    pub credits: i32,
    pub instructor: String,
}

/// Fields supplied when adding a student
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewStudent {
    pub name: String,
    pub email: String,
    pub age: i32,
    #[serde(default)]
    pub major: Option<String>,
}

impl NewStudent {
    pub(crate) fn into_student(self, id: String) -> Student {
        Student {
            id,
            name: self.name,
            email: self.email,
            age: self.age,
            // An empty major is stored as no major
            major: self.major.filter(|m| !m.is_empty()),
        }
    }
}

/// Fields supplied when adding a course
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCourse {
    pub title: String,
    pub code: String,
    pub credits: i32,
    pub instructor: String,
}

impl NewCourse {
    pub(crate) fn into_course(self, id: String) -> Course {
        Course {
            id,
            title: self.title,
            code: self.code,
            credits: self.credits,
            instructor: self.instructor,
        }
    }
}

/// Partial update of a student
///
/// `None` leaves a field untouched. `major` is tri-state:
/// `Some(None)` clears it, `Some(Some(_))` replaces it.
#[derive(Debug, Clone, Default)]
pub struct StudentPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub age: Option<i32>,
    pub major: Option<Option<String>>,
}

impl StudentPatch {
    /// Overwrite the provided fields of `student` in place
    pub fn apply_to(self, student: &mut Student) {
        if let Some(name) = self.name {
            student.name = name;
        }
        if let Some(email) = self.email {
            student.email = email;
        }
        if let Some(age) = self.age {
            student.age = age;
        }
        if let Some(major) = self.major {
            student.major = major;
        }
    }
}

/// Partial update of a course; `None` leaves a field untouched
#[derive(Debug, Clone, Default)]
pub struct CoursePatch {
    pub title: Option<String>,
    pub code: Option<String>,
    pub credits: Option<i32>,
    pub instructor: Option<String>,
}

impl CoursePatch {
    /// Overwrite the provided fields of `course` in place
    pub fn apply_to(self, course: &mut Course) {
        if let Some(title) = self.title {
            course.title = title;
        }
        if let Some(code) = self.code {
            course.code = code;
        }
        if let Some(credits) = self.credits {
            course.credits = credits;
        }
        if let Some(instructor) = self.instructor {
            course.instructor = instructor;
        }
    }
}
