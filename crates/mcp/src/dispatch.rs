//! The tool dispatcher: envelope checks, role gating, routing.

use crate::protocol::{CallToolResult, ProcessMessageRequest, ToolInvocation};
use crate::role::resolve_role;
use crate::tools::ToolCall;
use gcls_classroom::api::{NewCourse, NewCourseWork};
use gcls_classroom::{ClassroomClient, ClassroomError, ClientConfig};
use gcls_core::rbac::{AccessPolicy, Role, SERVER_ID};
use gcls_core::{CourseState, CourseWorkState, CourseWorkType};
use std::sync::Arc;
use tracing::debug;

/// Page size for course listings.
const LIST_PAGE_SIZE: u32 = 50;

/// Errors a dispatch can terminate with. Each maps to one HTTP status and
/// renders the exact wire message.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    /// The outer envelope did not select this server.
    #[error("GCLS_MCP not selected")]
    NotSelected,

    /// The outer envelope carried no tool input.
    #[error("Missing tool input")]
    MissingInput,

    /// The tool input was not valid JSON.
    #[error("Invalid tool call JSON")]
    InvalidJson(#[source] serde_json::Error),

    /// The tool name is not in the catalog.
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// The tool is known but its arguments do not fit.
    #[error("Invalid arguments for {tool}: {source}")]
    InvalidArguments {
        tool: &'static str,
        source: serde_json::Error,
    },

    /// The resolved role may not invoke the tool.
    #[error("Access denied: {role} cannot execute {tool}")]
    AccessDenied { role: Role, tool: &'static str },

    /// The tool result could not be serialized.
    #[error("Response encoding failed: {0}")]
    Encode(#[from] serde_json::Error),

    /// The remote operation failed.
    #[error(transparent)]
    Upstream(#[from] ClassroomError),
}

impl DispatchError {
    /// HTTP status code carried alongside the error envelope.
    pub fn status(&self) -> u16 {
        match self {
            Self::NotSelected
            | Self::MissingInput
            | Self::InvalidJson(_)
            | Self::UnknownTool(_)
            | Self::InvalidArguments { .. } => 400,
            Self::AccessDenied { .. } => 403,
            Self::Encode(_) | Self::Upstream(_) => 500,
        }
    }
}

/// Routes tool invocations to Classroom operations.
///
/// Holds only the immutable client configuration; a fresh
/// [`ClassroomClient`] is constructed for every request, so concurrent
/// requests share nothing mutable.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    client_config: Arc<ClientConfig>,
}

impl Dispatcher {
    /// Create a dispatcher over the given client configuration.
    pub fn new(client_config: ClientConfig) -> Self {
        Self {
            client_config: Arc::new(client_config),
        }
    }

    /// Run one tool invocation through the full pipeline.
    ///
    /// Envelope checks, JSON parsing and tool validation come first, then
    /// role resolution, the policy gate, and finally exactly one remote
    /// operation. No partial execution: the first failure terminates the
    /// request with its status.
    pub async fn process(
        &self,
        request: &ProcessMessageRequest,
    ) -> Result<CallToolResult, DispatchError> {
        if !request.selected_servers.iter().any(|s| s == SERVER_ID) {
            return Err(DispatchError::NotSelected);
        }

        let input = request
            .client_details
            .as_ref()
            .map(|details| details.input.as_str())
            .unwrap_or_default();
        if input.is_empty() {
            return Err(DispatchError::MissingInput);
        }

        let invocation: ToolInvocation =
            serde_json::from_str(input).map_err(DispatchError::InvalidJson)?;
        let call = ToolCall::parse(invocation)?;

        let client = ClassroomClient::from_config(self.client_config.as_ref().clone())?;

        let role = resolve_role(&client, call.course_id()).await;
        debug!(tool = call.name(), %role, "resolved caller role");

        if !AccessPolicy::is_allowed(call.name(), role) {
            return Err(DispatchError::AccessDenied {
                role,
                tool: call.name(),
            });
        }

        let result = Self::execute(&client, call).await?;
        Ok(CallToolResult::text(&result)?)
    }

    /// Route a validated call to its remote operation.
    async fn execute(
        client: &ClassroomClient,
        call: ToolCall,
    ) -> Result<serde_json::Value, DispatchError> {
        let value = match call {
            ToolCall::ListCourses => {
                serde_json::to_value(client.courses().list(LIST_PAGE_SIZE).await?)?
            }
            ToolCall::GetCourse(args) => {
                serde_json::to_value(client.courses().get(&args.course_id).await?)?
            }
            ToolCall::CreateCourse(args) => serde_json::to_value(
                client
                    .courses()
                    .create(NewCourse {
                        name: args.name,
                        section: args.section,
                        description: args.description,
                        owner_id: "me".to_string(),
                        course_state: CourseState::Provisioned,
                    })
                    .await?,
            )?,
            ToolCall::ListStudents(args) => {
                serde_json::to_value(client.students().list(&args.course_id).await?)?
            }
            ToolCall::CreateAssignment(args) => serde_json::to_value(
                client
                    .course_work()
                    .create(
                        &args.course_id,
                        NewCourseWork {
                            title: args.title,
                            description: args.description,
                            work_type: CourseWorkType::Assignment,
                            state: CourseWorkState::Published,
                            max_points: args.points,
                        },
                    )
                    .await?,
            )?,
        };
        Ok(value)
    }
}
