use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    InvalidConfig = 3,
    NotOperator = 4,
    SaleNotActive = 5,
    SaleNotEnded = 6,
    NotAllowListed = 7,
    AmountOutOfRange = 8,
    AllocationExceeded = 9,
    HardCapExceeded = 10,
    SoftCapNotMet = 11,
    SoftCapReached = 12,
    NothingToClaim = 13,
    NothingToRefund = 14,
    InsufficientTokens = 15,
    InvalidAmount = 16,
    UnsoldAlreadyWithdrawn = 17,
    ProtectedAsset = 18,
    Overflow = 19,
}
