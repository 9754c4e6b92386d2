//! A generic sequential container built on a singly linked chain of nodes.
//!
//! ```
//! use linked_container::Container;
//!
//! let mut container = Container::new();
//! container.add("first");
//! container.add("second");
//! container.add("third");
//!
//! assert_eq!(container.remove(1), Ok("second"));
//! assert_eq!(container.to_string(), "[first, third]");
//! assert!(container.get(2).is_err());
//! ```

pub mod container;
pub mod error;

pub use container::{Container, DisplayNullable, Iter};
pub use error::{ContainerError, Result};
