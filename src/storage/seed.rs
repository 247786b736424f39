//! Demo data loaded at startup when `seed_demo_data` is enabled

use crate::core::{NewCourse, NewStudent, RosterResult, RosterService, StorageError};

/// Populate a roster with two students, two courses and their enrollments
///
/// The records receive IDs `"1"` and `"2"` and enrollments end up as
/// `{1: [1, 2], 2: [2]}`. Fails without touching the service if it already
/// holds students or courses, since the demo IDs would shift.
pub async fn populate_demo_data(service: &dyn RosterService) -> RosterResult<()> {
    if !is_empty(service).await? {
        return Err(StorageError::OperationFailed {
            operation: "seed".to_string(),
            message: "roster already holds records".to_string(),
        }
        .into());
    }

    let ahmed = service
        .create_student(NewStudent {
            name: "Ahmed Hassan".to_string(),
            email: "ahmed@iti.edu".to_string(),
            age: 22,
            major: Some("Computer Science".to_string()),
        })
        .await?;
    let fatma = service
        .create_student(NewStudent {
            name: "Fatma Ali".to_string(),
            email: "fatma@iti.edu".to_string(),
            age: 21,
            major: Some("Information Systems".to_string()),
        })
        .await?;

    let data_structures = service
        .create_course(NewCourse {
            title: "Data Structures".to_string(),
            code: "CS201".to_string(),
            credits: 3,
            instructor: "Dr. Mohamed".to_string(),
        })
        .await?;
    let databases = service
        .create_course(NewCourse {
            title: "Database Systems".to_string(),
            code: "CS301".to_string(),
            credits: 4,
            instructor: "Dr. Sarah".to_string(),
        })
        .await?;

    let enrollments = [
        (&ahmed.id, &data_structures.id),
        (&ahmed.id, &databases.id),
        (&fatma.id, &databases.id),
    ];
    for (student_id, course_id) in enrollments {
        if service.enroll(student_id, course_id).await?.is_none() {
            return Err(StorageError::OperationFailed {
                operation: "seed".to_string(),
                message: format!(
                    "could not enroll student {} in course {}",
                    student_id, course_id
                ),
            }
            .into());
        }
    }

    tracing::info!(students = 2, courses = 2, "Demo data loaded");
    Ok(())
}

/// Whether the service holds no students and no courses
pub async fn is_empty(service: &dyn RosterService) -> RosterResult<bool> {
    Ok(service.list_students().await?.is_empty() && service.list_courses().await?.is_empty())
}
