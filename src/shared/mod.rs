pub mod interfaces;
pub mod logging;
