//! Page Components

mod erm;
mod workflow;

pub use erm::ErmPage;
pub use workflow::WorkflowPage;
