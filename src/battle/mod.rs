pub mod runner;
pub mod state;
pub mod turn_orchestrator;

#[cfg(test)]
pub(crate) mod tests;
