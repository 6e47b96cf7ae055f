//! Per-request role resolution.

use gcls_classroom::ClassroomClient;
use gcls_core::rbac::Role;
use tracing::debug;

/// Determine the caller's role for a course.
///
/// Without a course context the caller is treated as a teacher. That is a
/// convenience default for tools that are not scoped to a course, not a
/// security boundary; the access policy is what actually gates privileged
/// tools.
///
/// With a course id, the caller is a teacher iff a teacher record for
/// `"me"` exists on that course. Any probe failure (not found, forbidden,
/// network) downgrades to student and is never surfaced; the policy lives
/// entirely in this function so it can change without touching the
/// dispatch pipeline.
pub async fn resolve_role(client: &ClassroomClient, course_id: Option<&str>) -> Role {
    let Some(course_id) = course_id else {
        return Role::Teacher;
    };

    match client.teachers().get(course_id, "me").await {
        Ok(_) => Role::Teacher,
        Err(err) => {
            debug!(course_id, error = %err, "teacher probe failed, downgrading to student");
            Role::Student
        }
    }
}
