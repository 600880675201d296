//! Requirement manifest loading.
//!
//! This module reads the dependency manifest (conventionally
//! `requirements.txt`) and turns it into the ordered list of specifiers
//! declared as the package's install requirements.
//!
//! # Modules
//!
//! - [`specifier`] - Opaque requirement specifiers and the ordered list type
//! - [`loader`] - Manifest reading with missing-file recovery
//!
//! # Example
//!
//! ```
//! use netsec_pkg::requirements::parse_requirements;
//!
//! let list = parse_requirements("pandas==1.5.0\n\n-e .\nnumpy>=1.21\n");
//! assert_eq!(list.to_strings(), vec!["pandas==1.5.0", "numpy>=1.21"]);
//! ```

pub mod loader;
pub mod specifier;

pub use loader::{
    load_requirements, parse_requirements, LoadReport, RequirementsLoader,
    EDITABLE_SELF_SENTINEL, REQUIREMENTS_FILE,
};
pub use specifier::{Requirement, RequirementList};
