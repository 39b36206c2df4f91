// Core modules implementing the optional container, its codec seam, and errors.
pub mod codec;
pub mod error;
pub mod optional;
