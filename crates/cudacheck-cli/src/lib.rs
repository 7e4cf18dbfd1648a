//! Diagnostic step handlers for the cudacheck binaries.
//!
//! Handlers take the device runtime as `&dyn DeviceRuntimePort` (or a
//! fallible init closure) and write to a caller-supplied sink, so every
//! printed line is assertable in tests without touching a real GPU.

#![deny(unused_crate_dependencies)]

// Dependencies used by the binaries, not the library
use clap as _;
use dotenvy as _;
use tracing_subscriber as _;

pub mod handlers;
