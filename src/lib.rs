pub mod error;
pub mod list;

pub use error::{Error, Result};
pub use list::List;
