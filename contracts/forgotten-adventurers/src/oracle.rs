use soroban_sdk::{contractclient, Address, BytesN, Env};

/// Interface of the external randomness oracle.
///
/// The oracle takes the fee up front, hands back a request id and later calls
/// `fulfill_randomness(request_id, randomness)` on `consumer`.
#[contractclient(name = "RandomnessOracleClient")]
pub trait RandomnessOracle {
    fn request_randomness(e: Env, consumer: Address, key_hash: BytesN<32>, fee: i128) -> u64;
}
