//! Core traits for pluggable behavior.

mod transport;

pub use transport::Transport;
