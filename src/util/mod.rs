
//! Various utility types.

pub mod tensor;
