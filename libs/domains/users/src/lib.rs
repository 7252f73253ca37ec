//! Users Domain
//!
//! A directory of users identified by a system-assigned id and a login.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← POST /user, GET /user
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← validation, metrics
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← trait + in-memory and SeaORM implementations
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← entity, DTOs
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_users::{handlers, InMemoryUserRepository, UserService};
//!
//! let service = UserService::new(InMemoryUserRepository::new());
//! let app = axum::Router::new().nest("/user", handlers::router(service));
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod service;
pub mod sql;

pub use error::{UserError, UserResult};
pub use models::{CreateUser, LOGIN_MAX_CHARS, NewUser, User};
pub use repository::{InMemoryUserRepository, UserRepository};
pub use service::UserService;
pub use sql::SqlUserRepository;
