pub mod plot;
pub mod sampler;
