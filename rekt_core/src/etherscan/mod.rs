pub mod dto;
pub mod handler;

pub use handler::{Etherscan, ETHERSCAN_URL};
