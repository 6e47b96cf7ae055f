//! Role-gated tool dispatch for the GCLS MCP gateway.
//!
//! Takes the outer `process_message` envelope apart, parses the embedded
//! tool invocation into a typed [`tools::ToolCall`], resolves the caller's
//! role against the course in question, consults the access policy, and
//! routes to exactly one Classroom operation. Success and failure are both
//! normalized into the MCP response envelope.

pub mod dispatch;
pub mod protocol;
pub mod role;
pub mod tools;

pub use dispatch::{DispatchError, Dispatcher};
pub use protocol::{CallToolResult, ErrorBody, ProcessMessageRequest, ToolContent, ToolInvocation};
pub use tools::ToolCall;
