//! Role-based access control for tool execution.
//!
//! Roles are computed per request from the caller's relationship to a
//! course and never persisted. The access policy is a process-wide
//! constant fixed at build time.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier this gateway answers to in `selected_servers`.
pub const SERVER_ID: &str = "GCLS_MCP";

/// The caller's authorization level relative to a course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Teacher,
    Student,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Wire form, also used in the access-denied message
        match self {
            Role::Teacher => f.write_str("TEACHER"),
            Role::Student => f.write_str("STUDENT"),
        }
    }
}

/// Static tool-name → allowed-roles table.
///
/// Pure lookup, no side effects. Unknown tool names are never allowed;
/// the dispatcher rejects them before consulting the policy, this is the
/// defensive backstop.
pub struct AccessPolicy;

const TOOL_ACCESS: &[(&str, &[Role])] = &[
    ("list_courses", &[Role::Teacher, Role::Student]),
    ("get_course", &[Role::Teacher, Role::Student]),
    ("list_students", &[Role::Teacher]),
    ("create_course", &[Role::Teacher]),
    ("create_assignment", &[Role::Teacher]),
];

impl AccessPolicy {
    /// Roles permitted to invoke a tool, or `None` for an unknown tool.
    pub fn allowed_roles(tool: &str) -> Option<&'static [Role]> {
        TOOL_ACCESS
            .iter()
            .find(|(name, _)| *name == tool)
            .map(|(_, roles)| *roles)
    }

    /// Whether `role` may invoke `tool`. Unknown tools are denied.
    pub fn is_allowed(tool: &str, role: Role) -> bool {
        Self::allowed_roles(tool)
            .map(|roles| roles.contains(&role))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_tools_open_to_both_roles() {
        for tool in ["list_courses", "get_course"] {
            assert!(AccessPolicy::is_allowed(tool, Role::Teacher));
            assert!(AccessPolicy::is_allowed(tool, Role::Student));
        }
    }

    #[test]
    fn test_privileged_tools_are_teacher_only() {
        for tool in ["list_students", "create_course", "create_assignment"] {
            assert!(AccessPolicy::is_allowed(tool, Role::Teacher));
            assert!(!AccessPolicy::is_allowed(tool, Role::Student));
        }
    }

    #[test]
    fn test_unknown_tool_is_denied() {
        assert!(AccessPolicy::allowed_roles("delete_course").is_none());
        assert!(!AccessPolicy::is_allowed("delete_course", Role::Teacher));
        assert!(!AccessPolicy::is_allowed("delete_course", Role::Student));
    }

    #[test]
    fn test_role_display_matches_wire_form() {
        assert_eq!(Role::Teacher.to_string(), "TEACHER");
        assert_eq!(Role::Student.to_string(), "STUDENT");

        let json = serde_json::to_string(&Role::Student).unwrap();
        assert_eq!(json, "\"STUDENT\"");
    }
}
