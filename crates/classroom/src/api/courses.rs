//! Courses API endpoints.

use crate::client::ClassroomClient;
use crate::error::ClassroomResult;
use gcls_core::{Course, CourseState};
use serde::{Deserialize, Serialize};

/// Courses API for listing, fetching and creating courses.
pub struct CoursesApi<'a> {
    client: &'a ClassroomClient,
}

impl<'a> CoursesApi<'a> {
    pub(crate) fn new(client: &'a ClassroomClient) -> Self {
        Self { client }
    }

    /// List courses visible to the caller, one page.
    pub async fn list(&self, page_size: u32) -> ClassroomResult<Vec<Course>> {
        let page: CoursePage = self
            .client
            .http
            .get_with_query("/v1/courses", &[("pageSize", page_size.to_string())])
            .await?;
        Ok(page.courses.unwrap_or_default())
    }

    /// Get a course by id.
    pub async fn get(&self, course_id: &str) -> ClassroomResult<Course> {
        self.client
            .http
            .get(&format!("/v1/courses/{}", course_id))
            .await
    }

    /// Create a course.
    pub async fn create(&self, request: NewCourse) -> ClassroomResult<Course> {
        self.client.http.post("/v1/courses", &request).await
    }
}

/// One page of a course listing. Google omits `courses` entirely when the
/// page is empty.
#[derive(Debug, Deserialize)]
struct CoursePage {
    courses: Option<Vec<Course>>,
    #[allow(dead_code)]
    #[serde(rename = "nextPageToken")]
    next_page_token: Option<String>,
}

/// Request body for creating a course.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCourse {
    pub name: String,
    pub section: String,
    pub description: String,
    pub owner_id: String,
    pub course_state: CourseState,
}
