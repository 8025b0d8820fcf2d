use soroban_sdk::{contracttype, Address, BytesN};

/// Network specific parameters used to pay for and address randomness requests.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OracleConfig {
    pub oracle: Address,
    pub fee_token: Address,
    pub key_hash: BytesN<32>,
    pub fee: i128,
}

/// Lifecycle of a mint request. A request id without a stored record has
/// never been issued.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RequestState {
    /// Paid for and forwarded to the oracle.
    Requested,
    /// The oracle delivered its random value.
    Fulfilled(BytesN<32>),
    /// Turned into the given token id.
    Completed(u32),
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MintRequest {
    pub requester: Address,
    pub state: RequestState,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Adventurer {
    pub strength: u32,
    pub dexterity: u32,
    pub constitution: u32,
    pub intelligence: u32,
    pub wisdom: u32,
    pub charisma: u32,
}

impl Adventurer {
    /// Rolls each attribute into `3..=18` from its own byte of `randomness`.
    pub fn roll(randomness: &BytesN<32>) -> Self {
        let seed = randomness.to_array();
        let stat = |i: usize| 3 + (seed[i] % 16) as u32;
        Adventurer {
            strength: stat(0),
            dexterity: stat(1),
            constitution: stat(2),
            intelligence: stat(3),
            wisdom: stat(4),
            charisma: stat(5),
        }
    }
}
