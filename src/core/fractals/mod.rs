pub mod algorithm;
pub mod convergence;
pub mod escape;
pub mod rules;
pub mod variant;
