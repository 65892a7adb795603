mod sampler_service;

pub use sampler_service::{SamplerError, SamplerService};
