//! Type system utilities and aliases.
//!
//! ## Modules
//!
//! - [`aliases`]: Type aliases for `Rc<RefCell<T>>`, change callbacks and plotted functions.

pub mod aliases;

pub use aliases::*;
