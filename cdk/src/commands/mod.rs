//! Command handlers

pub mod synth;
