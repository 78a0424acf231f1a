//! vaultview — turn password-manager vault items into titled, typed field
//! sections.
//!
//! The core is [`ops::sections::build_field_sections`], a pure function from
//! one decrypted vault item to an ordered list of [`model::FieldSection`]s.
//! Everything around it (fetching and decrypting the vault, clipboard,
//! rendering widgets) belongs to the caller; the `vv` binary is a thin
//! harness that reads item JSON and prints the sections.

pub mod cli;
pub mod model;
pub mod ops;
pub mod util;
