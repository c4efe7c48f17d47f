//! Audio I/O modules
//!
//! Audio decoding and the sample buffer input contract using Symphonia.

pub mod decoder;
pub mod sample_buffer;
