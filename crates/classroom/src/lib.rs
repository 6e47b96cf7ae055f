//! Google Classroom REST client.
//!
//! A thin, stateless client over the Classroom v1 API: bearer-token
//! transport, one API group per resource collection, and the one-time
//! OAuth authorization-code exchange. Clients are cheap to construct and
//! are built fresh per gateway request from immutable credentials.

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod oauth;
pub mod transport;

pub use client::{ClassroomClient, ClassroomClientBuilder};
pub use config::{ClientConfig, OauthConfig};
pub use error::{ClassroomError, ClassroomResult};
