/// numbered demonstration tasks for the structural analysis engines
pub mod network_examples;
