//! Step handlers for the diagnostic binaries.
//!
//! `probe` implements the five-step environment prober; `preimport`
//! implements the pre-init configurator. Both render through the shared
//! `display` helpers.

pub mod display;
pub mod preimport;
pub mod probe;

#[cfg(test)]
pub(crate) mod test_support;
