//! Wire envelope types shared by every relay transport
//!
//! The envelope is transport-agnostic: a request names a provider, a
//! procedure, and an ordered argument list; a successful response body is
//! the raw JSON result value; a failure response body is a [`FailureBody`].

mod envelope;

pub use envelope::{CallRequest, FailureBody};
