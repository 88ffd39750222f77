pub mod crops;
pub mod disease;
pub mod soil;
pub mod weather;
