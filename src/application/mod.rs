//! Application layer: the interactive menu front end
//!
//! This layer maps console input onto the domain tree; the domain never sees raw text.

pub mod error;
pub mod error_ext;
pub mod menu;

pub use error::{ApplicationError, ApplicationResult};
pub use error_ext::IoResultExt;
pub use menu::{apply, MenuAction, MenuCommand, MenuSession, Outcome};
