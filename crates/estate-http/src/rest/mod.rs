//! WordPress REST transport.

pub(crate) mod client;
pub(crate) mod wire;
