//! Request guards that run before controllers.
//!
//! - `auth` - bearer token verification and role enforcement
//! - `policy` - declarative allow-list keyed by resource and action
//! - `validation` - JSON body extraction with per-DTO validation rules

pub mod auth;
pub mod policy;
pub mod validation;

#[cfg(test)]
mod test;
