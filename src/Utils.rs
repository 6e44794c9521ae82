/// logger initialisation for binaries and examples
pub mod logger;
