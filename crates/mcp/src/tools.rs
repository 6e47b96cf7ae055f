//! Typed tool calls.
//!
//! One enum variant per exposed tool, so routing is an exhaustive match
//! and a tool the policy table knows can never fall through to a runtime
//! "unknown tool" branch. Unknown names and structurally invalid
//! arguments are rejected here, before any role resolution happens.

use crate::dispatch::DispatchError;
use crate::protocol::ToolInvocation;
use serde::Deserialize;

/// Tool name constants, as they appear on the wire and in the policy table.
pub mod names {
    pub const LIST_COURSES: &str = "list_courses";
    pub const GET_COURSE: &str = "get_course";
    pub const CREATE_COURSE: &str = "create_course";
    pub const LIST_STUDENTS: &str = "list_students";
    pub const CREATE_ASSIGNMENT: &str = "create_assignment";
}

/// A validated tool invocation.
#[derive(Debug, Clone)]
pub enum ToolCall {
    ListCourses,
    GetCourse(GetCourseArgs),
    CreateCourse(CreateCourseArgs),
    ListStudents(ListStudentsArgs),
    CreateAssignment(CreateAssignmentArgs),
}

/// Arguments for `get_course`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetCourseArgs {
    pub course_id: String,
}

/// Arguments for `create_course`. Optional fields default to empty, as
/// the upstream create call always sends them.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCourseArgs {
    pub name: String,
    #[serde(default)]
    pub section: String,
    #[serde(default)]
    pub description: String,
}

/// Arguments for `list_students`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListStudentsArgs {
    pub course_id: String,
}

/// Arguments for `create_assignment`. `points` is also accepted as
/// `maxPoints` and defaults to 100.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAssignmentArgs {
    pub course_id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_points", alias = "maxPoints")]
    pub points: f64,
}

fn default_points() -> f64 {
    100.0
}

impl ToolCall {
    /// Parse a raw invocation into a typed call.
    ///
    /// Unknown argument fields are ignored; missing required fields are a
    /// client error, reported per tool.
    pub fn parse(invocation: ToolInvocation) -> Result<Self, DispatchError> {
        let args = invocation
            .arguments
            .unwrap_or_else(|| serde_json::Value::Object(serde_json::Map::new()));

        let invalid = |tool, source| DispatchError::InvalidArguments { tool, source };

        match invocation.name.as_str() {
            names::LIST_COURSES => Ok(Self::ListCourses),
            names::GET_COURSE => serde_json::from_value(args)
                .map(Self::GetCourse)
                .map_err(|e| invalid(names::GET_COURSE, e)),
            names::CREATE_COURSE => serde_json::from_value(args)
                .map(Self::CreateCourse)
                .map_err(|e| invalid(names::CREATE_COURSE, e)),
            names::LIST_STUDENTS => serde_json::from_value(args)
                .map(Self::ListStudents)
                .map_err(|e| invalid(names::LIST_STUDENTS, e)),
            names::CREATE_ASSIGNMENT => serde_json::from_value(args)
                .map(Self::CreateAssignment)
                .map_err(|e| invalid(names::CREATE_ASSIGNMENT, e)),
            _ => Err(DispatchError::UnknownTool(invocation.name)),
        }
    }

    /// Wire name of this tool.
    pub fn name(&self) -> &'static str {
        match self {
            Self::ListCourses => names::LIST_COURSES,
            Self::GetCourse(_) => names::GET_COURSE,
            Self::CreateCourse(_) => names::CREATE_COURSE,
            Self::ListStudents(_) => names::LIST_STUDENTS,
            Self::CreateAssignment(_) => names::CREATE_ASSIGNMENT,
        }
    }

    /// The course this call is scoped to, if any. Drives role resolution;
    /// calls without a course context get the default role.
    pub fn course_id(&self) -> Option<&str> {
        match self {
            Self::ListCourses | Self::CreateCourse(_) => None,
            Self::GetCourse(args) => Some(&args.course_id),
            Self::ListStudents(args) => Some(&args.course_id),
            Self::CreateAssignment(args) => Some(&args.course_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invocation(name: &str, arguments: Option<serde_json::Value>) -> ToolInvocation {
        ToolInvocation {
            name: name.to_string(),
            arguments,
        }
    }

    #[test]
    fn test_unknown_tool_rejected() {
        let err = ToolCall::parse(invocation("delete_course", None)).unwrap_err();

        assert!(matches!(err, DispatchError::UnknownTool(ref name) if name == "delete_course"));
        assert_eq!(err.to_string(), "Unknown tool: delete_course");
    }

    #[test]
    fn test_list_courses_takes_no_arguments() {
        let call = ToolCall::parse(invocation("list_courses", None)).unwrap();

        assert!(matches!(call, ToolCall::ListCourses));
        assert!(call.course_id().is_none());
    }

    #[test]
    fn test_get_course_requires_course_id() {
        let err =
            ToolCall::parse(invocation("get_course", Some(serde_json::json!({})))).unwrap_err();
        assert!(matches!(
            err,
            DispatchError::InvalidArguments { tool: "get_course", .. }
        ));

        let call = ToolCall::parse(invocation(
            "get_course",
            Some(serde_json::json!({"courseId": "1234"})),
        ))
        .unwrap();
        assert_eq!(call.course_id(), Some("1234"));
    }

    #[test]
    fn test_create_course_defaults() {
        let call = ToolCall::parse(invocation(
            "create_course",
            Some(serde_json::json!({"name": "CS101"})),
        ))
        .unwrap();

        match call {
            ToolCall::CreateCourse(args) => {
                assert_eq!(args.name, "CS101");
                assert_eq!(args.section, "");
                assert_eq!(args.description, "");
            }
            other => panic!("Expected CreateCourse, got {other:?}"),
        }
    }

    #[test]
    fn test_create_course_has_no_course_context() {
        let call = ToolCall::parse(invocation(
            "create_course",
            Some(serde_json::json!({"name": "CS101"})),
        ))
        .unwrap();

        assert!(call.course_id().is_none());
    }

    #[test]
    fn test_create_assignment_defaults_and_alias() {
        let call = ToolCall::parse(invocation(
            "create_assignment",
            Some(serde_json::json!({"courseId": "1234", "title": "Essay 1"})),
        ))
        .unwrap();

        match call {
            ToolCall::CreateAssignment(ref args) => {
                assert_eq!(args.points, 100.0);
                assert_eq!(args.description, "");
            }
            ref other => panic!("Expected CreateAssignment, got {other:?}"),
        }

        // `maxPoints` is accepted as an alias for `points`
        let call = ToolCall::parse(invocation(
            "create_assignment",
            Some(serde_json::json!({"courseId": "1234", "title": "Essay 1", "maxPoints": 25})),
        ))
        .unwrap();

        match call {
            ToolCall::CreateAssignment(args) => assert_eq!(args.points, 25.0),
            other => panic!("Expected CreateAssignment, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_argument_fields_ignored() {
        let call = ToolCall::parse(invocation(
            "list_students",
            Some(serde_json::json!({"courseId": "1234", "pageToken": "zzz"})),
        ))
        .unwrap();

        assert_eq!(call.name(), "list_students");
        assert_eq!(call.course_id(), Some("1234"));
    }
}
