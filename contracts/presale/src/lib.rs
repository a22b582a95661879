#![no_std]

mod contract;
mod errors;
mod events;
mod settlement;
mod storage;
mod types;


pub use contract::{PresaleContract, PresaleContractClient};
pub use errors::Error;
pub use settlement::sale_status;
pub use types::{Participant, SaleConfig, SaleInfo, SaleStatus};
