//! The safety assistant: mode selection and response resolution.
//!
//! - [`selector`] - One-shot startup choice between live and demo mode
//! - [`resolver`] - Per-message reply resolution and the shared mode flag
//! - [`keywords`] - Demo-mode keyword table
//! - [`replies`] / [`instruction`] - Fixed strings

pub mod instruction;
pub mod keywords;
pub mod mode;
pub mod replies;
pub mod resolver;
pub mod selector;

pub use keywords::KeywordTable;
pub use mode::Mode;
pub use resolver::{Assistant, Reply, ReplySource};
pub use selector::{initialize_model, StartupError};
