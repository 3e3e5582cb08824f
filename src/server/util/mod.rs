//! Credential helpers shared by the auth service and middleware.

pub mod password;
pub mod token;
