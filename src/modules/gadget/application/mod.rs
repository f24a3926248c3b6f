pub mod domain;
pub mod gadget_use_cases;
pub mod ports;
pub mod services;
