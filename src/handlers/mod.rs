//! # HTTP Request Handlers
//!
//! Each handler extracts its own input, makes its decision, and returns a typed
//! JSON body or an [`AppError`](crate::error::AppError).
//!
//! ## Available Handlers
//!
//! - **Status** (`status`) - Service status, with a debug payload behind a query flag
//! - **Search** (`search`) - Username substring lookup
//! - **Token** (`token`) - Bearer token verification and role check
//! - **Upload** (`upload`) - File upload metadata validation
//! - **Health Check** (`health_check`) - Liveness probe

mod health_check;
mod search;
mod status;
mod token;
mod upload;

pub use health_check::*;
pub use search::*;
pub use status::*;
pub use token::*;
pub use upload::*;
