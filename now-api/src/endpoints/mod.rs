//! API endpoint modules organized by resource.
//!
//! Each module pairs pure `build_*` functions, which validate arguments and
//! produce a `RequestDescriptor`, with the `NowClient` methods that send them.

pub mod aliases;
pub mod certs;
pub mod deployments;
pub mod domains;
pub mod records;
pub mod secrets;
