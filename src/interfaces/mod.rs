//! Interface adapters: the REST API boundary.

pub mod http;
