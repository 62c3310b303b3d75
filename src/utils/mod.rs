pub mod muni_client;
pub mod time_math;
