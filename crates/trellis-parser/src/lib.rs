//! Parser and validator for Trellis fabric descriptions.
//!
//! Turns YAML text into a typed [`FabricDescription`] and checks it against
//! the required-field rules.
//!
//! # Example
//!
//! ```
//! let source = "
//! apiVersion: fabrics.eda.nokia.com/v1alpha1
//! kind: Fabric
//! metadata:
//!   name: dc1
//! spec:
//!   leafs: {}
//!   spines: {}
//!   underlayProtocol:
//!     protocol: [EBGP]
//! ";
//!
//! let description = trellis_parser::parse(source).expect("well-formed YAML");
//! assert_eq!(description.name(), Some("dc1"));
//! assert!(trellis_parser::validate(source));
//! assert!(!trellis_parser::validate("kind: [unterminated"));
//! ```

pub mod error;

mod parser;
mod span;
mod validate;


pub use parser::parse;
pub use span::Span;
pub use validate::{check, check_source, validate, validate_description};

pub use trellis_core::description::FabricDescription;
