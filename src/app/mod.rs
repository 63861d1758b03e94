pub mod load_use_case;
pub mod ports;
