// TUBO Caption Studio - core library
//
// Turns a product page into brand-voice captions and mirrors the operator's
// chosen captions into a Notion database. Infrastructure lives behind the
// Base* traits in kernel/; product logic lives in domains/; session/ sequences
// the operator actions.

pub mod auth;
pub mod config;
pub mod domains;
pub mod error;
pub mod guide;
pub mod kernel;
pub mod session;

pub use config::*;
pub use error::{CaptionError, ExtractError, SessionError};
pub use kernel::StudioKernel;
pub use session::{Session, Studio};
