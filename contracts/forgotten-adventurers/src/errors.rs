use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum MintError {
    /// Indicates the attached payment is not exactly the mint price.
    InsufficientPayment = 400,
    /// Indicates all 2007 adventurers are minted or reserved.
    SupplyExhausted = 401,
    /// Indicates the contract cannot pay the oracle fee.
    OracleFundsMissing = 402,
    /// Indicates a non-existent `request_id`.
    UnknownRequest = 403,
    /// Indicates the oracle has not delivered randomness for the request yet.
    RequestNotFulfilled = 404,
    /// Indicates the oracle already delivered randomness for the request.
    RequestAlreadyFulfilled = 405,
    /// Indicates the request was already turned into a token.
    RequestAlreadyCompleted = 406,
    /// Indicates the oracle issued a `request_id` that is already in use.
    DuplicateRequest = 407,
    /// Indicates the configured oracle fee is not strictly positive.
    InvalidFee = 408,
    /// Indicates a non-existent `token_id`.
    NonExistentToken = 410,
    /// Indicates an error related to the ownership over a particular token.
    /// Used in transfers.
    IncorrectOwner = 411,
    /// Indicates the collection metadata is missing or malformed.
    UnsetMetadata = 412,
}
