pub mod confirmation_code;
pub mod display;
pub mod entities;
pub mod name_generator;
pub mod random;
