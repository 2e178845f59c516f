// src/application/commands/mod.rs
//
// Command Handlers
//
// ARCHITECTURE:
// - Commands are thin adapters between the CLI and controllers/services
// - Commands return DTOs or an ErrorResponse
// - Commands NEVER contain business logic

pub mod catalog_commands;
pub mod favorite_commands;

pub use catalog_commands::*;
pub use favorite_commands::*;
