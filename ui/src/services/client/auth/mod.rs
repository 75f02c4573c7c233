mod signup;

pub use signup::*;
