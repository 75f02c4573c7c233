mod signup_screen;

pub use signup_screen::*;
