//! Pegboard: kanban project and task management core.
//!
//! This crate provides the interaction core of a project/task management
//! application: a live-query document store mirror, a drag-and-drop kanban
//! coordinator, derived board statistics, notifications, and a pomodoro
//! timer. Persistence, real-time sync, and authentication are owned by an
//! external hosted backend and consumed through ports.
//!
//! # Architecture
//!
//! Pegboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (in-memory store, fake
//!   auth gateway)
//!
//! # Modules
//!
//! - [`store`]: Schema-less document collections with live subscriptions
//! - [`project`]: Project lifecycle, membership, and bulk archive actions
//! - [`task`]: Task lifecycle and append-only comments
//! - [`board`]: Entity store mirror, drag-drop coordinator, and aggregates
//! - [`notification`]: Notification records and template-driven dispatch
//! - [`auth`]: Authentication gateway port and session tracking
//! - [`app`]: Application context, configuration, and theme preference
//! - [`pomodoro`]: Clock-driven pomodoro timer state machine

pub mod app;
pub mod auth;
pub mod board;
pub mod notification;
pub mod pomodoro;
pub mod project;
pub mod store;
pub mod task;
