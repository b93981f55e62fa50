//! Networking: the REST record-store client.

pub mod api;
