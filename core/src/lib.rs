pub mod case;
pub mod config;
pub mod exec;
pub mod join;
pub mod plot;
pub mod split;
pub mod workload;
