//! Course students API endpoints.

use crate::client::ClassroomClient;
use crate::error::ClassroomResult;
use gcls_core::Student;
use serde::Deserialize;

/// Students API for listing roster members on a course.
pub struct StudentsApi<'a> {
    client: &'a ClassroomClient,
}

impl<'a> StudentsApi<'a> {
    pub(crate) fn new(client: &'a ClassroomClient) -> Self {
        Self { client }
    }

    /// List students enrolled in a course.
    pub async fn list(&self, course_id: &str) -> ClassroomResult<Vec<Student>> {
        let page: StudentPage = self
            .client
            .http
            .get(&format!("/v1/courses/{}/students", course_id))
            .await?;
        Ok(page.students.unwrap_or_default())
    }
}

/// One page of a roster listing; `students` is omitted when empty.
#[derive(Debug, Deserialize)]
struct StudentPage {
    students: Option<Vec<Student>>,
    #[allow(dead_code)]
    #[serde(rename = "nextPageToken")]
    next_page_token: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_list_students() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/courses/1234/students"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "students": [
                    {"courseId": "1234", "userId": "s1"},
                    {"courseId": "1234", "userId": "s2"}
                ]
            })))
            .mount(&server)
            .await;

        let client = ClassroomClient::builder()
            .base_url(server.uri())
            .build()
            .unwrap();

        let students = client.students().list("1234").await.unwrap();
        assert_eq!(students.len(), 2);
        assert_eq!(students[1].user_id.as_deref(), Some("s2"));
    }

    #[tokio::test]
    async fn test_empty_roster_yields_empty_vec() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/courses/1234/students"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .mount(&server)
            .await;

        let client = ClassroomClient::builder()
            .base_url(server.uri())
            .build()
            .unwrap();

        let students = client.students().list("1234").await.unwrap();
        assert!(students.is_empty());
    }
}
