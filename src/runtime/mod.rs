//! runtime
//!
//! Everything that talks to the background runtime process.
//!
//! # Modules
//!
//! - [`endpoint`] - Which address to contact
//! - [`protocol`] - Request and envelope wire types
//! - [`client`] - One-shot TCP status exchange with a hard deadline
//! - [`errors`] - Connect / Protocol / Response failure taxonomy
//!
//! # Example
//!
//! ```no_run
//! use lodetime::runtime::{fetch_status, resolve_endpoint, STATUS_TIMEOUT};
//!
//! let endpoint = resolve_endpoint(None, None);
//! match fetch_status(&endpoint, false, STATUS_TIMEOUT) {
//!     Ok(payload) => println!("mode: {:?}", payload.mode()),
//!     Err(e) if e.is_connect() => println!("runtime not running"),
//!     Err(e) => eprintln!("{}", e),
//! }
//! ```

pub mod client;
pub mod endpoint;
pub mod errors;
pub mod protocol;

pub use client::{
    fetch_status, RuntimeClient, TcpRuntimeClient, CHECK_TIMEOUT, MAX_RESPONSE_BYTES,
    STATUS_TIMEOUT,
};
pub use endpoint::{resolve_endpoint, EndpointSources, DEFAULT_ENDPOINT, ENDPOINT_ENV};
pub use errors::{ErrorKind, TransportError};
pub use protocol::{Envelope, Request, ResponseError};
