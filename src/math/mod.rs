/// Count-weighted and uniform random index selection
pub mod probability;
