//! Interceptor seams the guarded client composes around every exchange.
//!
//! The crate exposes the seams as traits so hosts can bring their own decorations and
//! guards; [`bearer`] and [`expiry`] ship the standard session pair. Chains run in
//! registration order, fixed at client construction: every request interceptor before
//! dispatch, every response interceptor after completion or failure.

pub mod bearer;
pub mod expiry;

pub use bearer::*;
pub use expiry::*;

// self
use crate::{
	_prelude::*,
	http::{RequestDescriptor, ResponseDescriptor},
};

/// Decorates outgoing requests before dispatch.
pub trait RequestInterceptor
where
	Self: Send + Sync,
{
	/// Consumes the descriptor and returns it, decorated.
	///
	/// Returning an error aborts dispatch. The failure still traverses the response chain's
	/// [`ResponseInterceptor::on_failure`] before reaching the caller; this stage performs
	/// no recovery of its own.
	fn decorate(&self, request: RequestDescriptor) -> Result<RequestDescriptor>;
}

/// Observes completed exchanges after dispatch.
pub trait ResponseInterceptor
where
	Self: Send + Sync,
{
	/// Passes a successful response onward. Identity unless overridden.
	fn on_success(&self, response: ResponseDescriptor) -> ResponseDescriptor {
		response
	}

	/// Observes a failure and re-raises it.
	///
	/// Implementations may produce side effects before forwarding, but the original failure
	/// must come back out; converting a failure into a success is not expressible here.
	fn on_failure(&self, failure: Error) -> Error {
		failure
	}
}
