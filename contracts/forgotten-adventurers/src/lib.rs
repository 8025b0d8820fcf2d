#![no_std]

use soroban_sdk::{contract, contractmeta, Address, BytesN, Env, String};

contractmeta!(key = "Description", val = "Forgotten Adventurers");

mod contract;
mod errors;
mod events;
mod oracle;
mod types;


pub use errors::MintError;
pub use oracle::{RandomnessOracle, RandomnessOracleClient};
pub use types::{Adventurer, MintRequest, OracleConfig, RequestState};

/// Hard cap on the number of adventurers.
pub const MAX_SUPPLY: u32 = 2007;

/// 0.03 of the native unit, in base units.
pub const MINT_PRICE: i128 = 30_000_000_000_000_000;

#[contract]
pub struct ForgottenAdventurers;

pub trait ForgottenAdventurersTrait {

    fn __constructor(
        e: &Env,
        admin: Address,
        oracle: Address,
        fee_token: Address,
        payment_token: Address,
        key_hash: BytesN<32>,
        fee: i128,
    );

    fn upgrade(e: &Env, wasm_hash: BytesN<32>);

    /// Returns the number of adventurers minted so far.
    fn get_total_minted_so_far(e: &Env) -> u32;

    /// Returns the maximum number of adventurers, always 2007.
    fn get_max_available(e: &Env) -> u32;

    /// Returns the mint price in base units of the payment token.
    fn get_mint_price(e: &Env) -> i128;

    /// First half of a mint: pay and ask the oracle for randomness.
    ///
    /// # Arguments
    ///
    /// * `e` - The environment object.
    /// * `requester` - Account paying for, and later receiving, the token.
    /// * `payment` - Amount of the payment token, must equal the mint price.
    ///
    /// # Returns
    ///
    /// The request id issued by the oracle. No token id is assigned yet.
    ///
    /// # Panics
    ///
    /// * If `payment` is not the mint price.
    /// * If minted plus pending requests already reach the maximum supply.
    /// * If the contract does not hold enough fee token to pay the oracle.
    /// * If the oracle returns a request id that is already in use.
    ///
    /// # Events
    ///
    /// * topics - `["mint_requested", requester: Address]`
    /// * data - `[request_id: u64]`
    fn request_mint(e: &Env, requester: Address, payment: i128) -> u64;

    /// Oracle callback delivering the random value for `request_id`.
    ///
    /// Only the configured oracle may call this. It records the value and
    /// does not mint.
    ///
    /// # Panics
    ///
    /// * If the caller is not the oracle.
    /// * If the request does not exist.
    /// * If the request was already fulfilled.
    ///
    /// # Events
    ///
    /// * topics - `["randomness_fulfilled", request_id: u64]`
    fn fulfill_randomness(e: &Env, request_id: u64, randomness: BytesN<32>);

    /// Second half of a mint: turn a fulfilled request into a token.
    ///
    /// Anyone may call this; the token always goes to the original requester.
    ///
    /// # Returns
    ///
    /// The new token id.
    ///
    /// # Panics
    ///
    /// * If the request does not exist.
    /// * If the oracle has not delivered randomness for it yet.
    /// * If the request was already completed.
    ///
    /// # Events
    ///
    /// * topics - `["mint", to: Address]`
    /// * data - `[token_id: u32]`
    fn finish_mint(e: &Env, request_id: u64) -> u32;

    /// Returns the state of `request_id`, `None` if it was never issued.
    fn request_state(e: &Env, request_id: u64) -> Option<RequestState>;

    /// Returns the number of requests that are not completed yet.
    fn pending_requests(e: &Env) -> u32;

    fn oracle_config(e: &Env) -> OracleConfig;

    /// Sends every collected mint payment to `to`. Admin only.
    ///
    /// # Events
    ///
    /// * topics - `["withdraw", to: Address]`
    /// * data - `[amount: i128]`
    fn withdraw(e: &Env, to: Address) -> i128;

    /// Returns the number of tokens in `owner`'s account.
    fn balance(e: &Env, owner: Address) -> u32;

    /// Returns the address of the owner of the given `token_id`.
    ///
    /// # Notes
    ///
    /// If the token does not exist, this function is expected to panic.
    fn owner_of(e: &Env, token_id: u32) -> Address;

    /// Transfers `token_id` token from `from` to `to`.
    ///
    /// # Panics
    ///
    /// * If `from` is not the owner of the token.
    ///
    /// # Events
    ///
    /// * topics - `["transfer", from: Address, to: Address]`
    /// * data - `[token_id: u32]`
    fn transfer(e: &Env, from: Address, to: Address, token_id: u32);

    /// Returns the attributes rolled for `token_id`.
    fn adventurer(e: &Env, token_id: u32) -> Adventurer;

    fn name(e: &Env) -> String;

    fn symbol(e: &Env) -> String;

    /// Returns the Uniform Resource Identifier (URI) for `token_id` token.
    ///
    /// # Notes
    ///
    /// If the token does not exist, this function is expected to panic.
    fn token_uri(e: &Env, token_id: u32) -> String;
}
