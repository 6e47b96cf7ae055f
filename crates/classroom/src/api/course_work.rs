//! Course work API endpoints.

use crate::client::ClassroomClient;
use crate::error::ClassroomResult;
use gcls_core::{CourseWork, CourseWorkState, CourseWorkType};
use serde::Serialize;

/// Course work API for creating work items on a course.
pub struct CourseWorkApi<'a> {
    client: &'a ClassroomClient,
}

impl<'a> CourseWorkApi<'a> {
    pub(crate) fn new(client: &'a ClassroomClient) -> Self {
        Self { client }
    }

    /// Create a course work item.
    pub async fn create(
        &self,
        course_id: &str,
        request: NewCourseWork,
    ) -> ClassroomResult<CourseWork> {
        self.client
            .http
            .post(&format!("/v1/courses/{}/courseWork", course_id), &request)
            .await
    }
}

/// Request body for creating a course work item.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCourseWork {
    pub title: String,
    pub description: String,
    pub work_type: CourseWorkType,
    pub state: CourseWorkState,
    pub max_points: f64,
}
