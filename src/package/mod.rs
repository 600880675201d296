//! Package resolution and output.
//!
//! - [`discovery`] - Find importable packages in the project tree
//! - [`resolved`] - Combine metadata, README, packages, and requirements
//! - [`pkg_info`] - Render core metadata

pub mod discovery;
pub mod pkg_info;
pub mod resolved;

pub use discovery::{find_packages, PACKAGE_MARKER};
pub use pkg_info::{render_pkg_info, METADATA_VERSION};
pub use resolved::{ResolveOptions, ResolvedPackage};
