//! Server-side API backend and business logic.
//!
//! The backend uses Axum as the web framework and SeaORM for database operations. It
//! follows a layered architecture:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Business logic orchestration between controllers and data layer
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Query** (`query/`) - List query parsing into filters, ordering and page windows
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Access policy, token verification and body validation
//! - **Realtime** (`realtime/`) - WebSocket broadcast hub
//!
//! # Request Flow
//!
//! 1. **Router** matches the route and runs `require_access` with the route's policy key
//! 2. **Controller** extracts and validates input, converts DTOs to params, calls the service
//! 3. **Service** executes business logic and publishes realtime events
//! 4. **Data** queries the database and converts entities to domain models
//! 5. **Controller** converts domain models to DTOs inside the response envelope

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod query;
pub mod realtime;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
