pub(crate) mod stats;

pub mod sentiment;
