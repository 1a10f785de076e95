//! Color types and conversion utilities
//!
//! Conversion runs one way, from the hex strings palettes are exchanged in
//! to the Lab values catalogs are compared in:
//!
//! ```text
//! "#RRGGBB" --parse--> Rgb --gamma decode, primaries--> Xyz --D65, f(t)--> Lab
//! ```
//!
//! # Example
//!
//! ```
//! use color_match::{Lab, Rgb, Xyz};
//!
//! let rgb: Rgb = "#C8102E".parse().unwrap();
//! let xyz = Xyz::from(rgb);
//! let lab = Lab::from(xyz);
//! assert!(lab.a > 0.0); // reddish
//! ```

mod lab;
mod rgb;
mod xyz;

pub use lab::{delta_e, Lab, D65_WHITE};
pub use rgb::Rgb;
pub use xyz::Xyz;
