//! Course teachers API endpoints.

use crate::client::ClassroomClient;
use crate::error::ClassroomResult;
use gcls_core::Teacher;

/// Teachers API for querying teacher enrollments on a course.
pub struct TeachersApi<'a> {
    client: &'a ClassroomClient,
}

impl<'a> TeachersApi<'a> {
    pub(crate) fn new(client: &'a ClassroomClient) -> Self {
        Self { client }
    }

    /// Get a teacher record on a course. `user_id` may be `"me"` for the
    /// authenticated identity; a 404 means no such enrollment exists.
    pub async fn get(&self, course_id: &str, user_id: &str) -> ClassroomResult<Teacher> {
        self.client
            .http
            .get(&format!("/v1/courses/{}/teachers/{}", course_id, user_id))
            .await
    }
}
