//! # Pizza REST
//!
//! HTTP surface of the pizza service: routes, controllers, the plain-text
//! error mapping and the operational endpoints.

pub mod controllers;
pub mod extractors;
pub mod middleware;
pub mod openapi;
pub mod responses;
pub mod router;
pub mod state;

pub use router::*;
pub use state::*;
