use crate::errors::Error;
use crate::types::{SaleConfig, SaleStatus};

/// Derive the sale status at `now`. The window is inclusive at both ends, so
/// `now == end_time` is still `Open`.
pub fn sale_status(config: &SaleConfig, now: u64, total_raised: i128) -> SaleStatus {
    status_at(
        now,
        config.start_time,
        config.end_time,
        total_raised,
        config.soft_cap,
    )
}

pub(crate) fn status_at(
    now: u64,
    start_time: u64,
    end_time: u64,
    total_raised: i128,
    soft_cap: i128,
) -> SaleStatus {
    if now < start_time {
        SaleStatus::NotStarted
    } else if now <= end_time {
        SaleStatus::Open
    } else if total_raised < soft_cap {
        SaleStatus::Failed
    } else {
        SaleStatus::Succeeded
    }
}

pub fn require_open(status: SaleStatus) -> Result<(), Error> {
    match status {
        SaleStatus::Open => Ok(()),
        _ => Err(Error::SaleNotActive),
    }
}

pub fn require_ended(status: SaleStatus) -> Result<(), Error> {
    match status {
        SaleStatus::NotStarted | SaleStatus::Open => Err(Error::SaleNotEnded),
        SaleStatus::Failed | SaleStatus::Succeeded => Ok(()),
    }
}

pub fn require_succeeded(status: SaleStatus) -> Result<(), Error> {
    require_ended(status)?;
    match status {
        SaleStatus::Succeeded => Ok(()),
        _ => Err(Error::SoftCapNotMet),
    }
}

pub fn require_failed(status: SaleStatus) -> Result<(), Error> {
    require_ended(status)?;
    match status {
        SaleStatus::Failed => Ok(()),
        _ => Err(Error::SoftCapReached),
    }
}
