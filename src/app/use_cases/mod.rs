//! Use-Cases der Application-Layer-Orchestrierung.

pub mod curve;
pub mod drag;
pub mod sampling;
