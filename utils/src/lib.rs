//! Shared infrastructure utilities for Folio.
//!
//! - **`atomic_write`**: crash-safe file persistence (temp + rename)
//! - **`secure_dir`**: owner-only permissions for the config directory

pub mod atomic_write;
pub mod secure_dir;

pub use atomic_write::{atomic_write, recover_bak_file};
pub use secure_dir::{ensure_private_dir, restrict_file_to_owner};
