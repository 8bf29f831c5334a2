//! cowsay: a message in a speech bubble, followed by an ASCII cow.
//!
//! ```text
//!  -------
//! < Hello >
//!  -------
//!         \   ^__^
//!          \  (oo)\_______
//!             (__)\       )\/\
//!                 ||----w |
//!                 ||     ||
//! ```
//!
//! - [`say`]: border and bubble rendering, plus the [`cowsay`] entry point
//! - [`ascii`]: the fixed cow art
//! - [`ffi`]: `void cowsay(const char *)` for linking from C

pub mod ascii;
pub mod ffi;
pub mod say;

pub use say::{cowsay, render, write_cowsay};
