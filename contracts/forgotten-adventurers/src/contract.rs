//! Two-phase adventurer minting

use soroban_sdk::{
    contractimpl, contracttype, log, panic_with_error, token, Address, Bytes, BytesN, Env, String,
};

use crate::errors::MintError;
use crate::events;
use crate::{
    Adventurer, ForgottenAdventurers, ForgottenAdventurersArgs, ForgottenAdventurersClient,
    ForgottenAdventurersTrait, MintRequest, OracleConfig, RandomnessOracleClient, RequestState,
    MAX_SUPPLY, MINT_PRICE,
};

const NAME: &str = "Forgotten Adventurers";
const SYMBOL: &str = "ADV";
const BASE_URI: &str = "ipfs://forgotten-adventurers";
// Base URI, "/" and up to ten decimal digits.
const URI_CAPACITY: usize = BASE_URI.len() + 11;

#[contracttype]
pub enum DataKey {
    Admin,
    Oracle,
    PaymentToken,
}

#[contracttype]
pub enum SupplyKey {
    TotalMinted,
    Reserved,
    Request(u64),
}

#[contracttype]
pub enum NFTStorageKey {
    Owner(u32),
    Balance(Address),
    Adventurer(u32),
    Name,
    Symbol,
    URI,
}

#[contractimpl]
impl ForgottenAdventurersTrait for ForgottenAdventurers {

    fn __constructor(
        e: &Env,
        admin: Address,
        oracle: Address,
        fee_token: Address,
        payment_token: Address,
        key_hash: BytesN<32>,
        fee: i128,
    ) {
        if fee <= 0 {
            panic_with_error!(e, MintError::InvalidFee);
        }

        e.storage().instance().set(&DataKey::Admin, &admin);
        e.storage().instance().set(&DataKey::PaymentToken, &payment_token);
        e.storage().instance().set(
            &DataKey::Oracle,
            &OracleConfig { oracle, fee_token, key_hash, fee },
        );

        e.storage().instance().set(&SupplyKey::TotalMinted, &0u32);
        e.storage().instance().set(&SupplyKey::Reserved, &0u32);

        e.storage().instance().set(&NFTStorageKey::Name, &String::from_str(e, NAME));
        e.storage().instance().set(&NFTStorageKey::Symbol, &String::from_str(e, SYMBOL));
        e.storage().instance().set(&NFTStorageKey::URI, &String::from_str(e, BASE_URI));
    }

    fn upgrade(e: &Env, wasm_hash: BytesN<32>) {
        let admin = admin(e);
        admin.require_auth();

        e.deployer().update_current_contract_wasm(wasm_hash.clone());
        events::Upgrade { admin, wasm_hash }.publish(e);
    }

    fn get_total_minted_so_far(e: &Env) -> u32 {
        total_minted(e)
    }

    fn get_max_available(_e: &Env) -> u32 {
        MAX_SUPPLY
    }

    fn get_mint_price(_e: &Env) -> i128 {
        MINT_PRICE
    }

    fn request_mint(e: &Env, requester: Address, payment: i128) -> u64 {
        requester.require_auth();

        if payment != MINT_PRICE {
            panic_with_error!(e, MintError::InsufficientPayment);
        }

        // Outstanding requests hold a slot so completions can never pass the cap.
        let reserved = reserved(e);
        if total_minted(e) + reserved >= MAX_SUPPLY {
            panic_with_error!(e, MintError::SupplyExhausted);
        }

        let config = oracle_config(e);
        let contract = e.current_contract_address();
        let fee_token = token::TokenClient::new(e, &config.fee_token);
        if fee_token.balance(&contract) < config.fee {
            panic_with_error!(e, MintError::OracleFundsMissing);
        }

        token::TokenClient::new(e, &payment_token(e)).transfer(&requester, &contract, &payment);
        fee_token.transfer(&contract, &config.oracle, &config.fee);

        let request_id = RandomnessOracleClient::new(e, &config.oracle)
            .request_randomness(&contract, &config.key_hash, &config.fee);

        let key = SupplyKey::Request(request_id);
        if e.storage().persistent().has(&key) {
            panic_with_error!(e, MintError::DuplicateRequest);
        }
        e.storage().persistent().set(
            &key,
            &MintRequest { requester: requester.clone(), state: RequestState::Requested },
        );
        e.storage().instance().set(&SupplyKey::Reserved, &(reserved + 1));

        log!(e, "mint requested", requester, request_id);
        events::MintRequested { requester, request_id }.publish(e);

        request_id
    }

    fn fulfill_randomness(e: &Env, request_id: u64, randomness: BytesN<32>) {
        oracle_config(e).oracle.require_auth();

        let mut request = mint_request(e, request_id);
        match request.state {
            RequestState::Requested => {}
            RequestState::Fulfilled(_) | RequestState::Completed(_) => {
                panic_with_error!(e, MintError::RequestAlreadyFulfilled)
            }
        }

        request.state = RequestState::Fulfilled(randomness);
        e.storage().persistent().set(&SupplyKey::Request(request_id), &request);

        log!(e, "randomness fulfilled", request_id);
        events::RandomnessFulfilled { request_id }.publish(e);
    }

    fn finish_mint(e: &Env, request_id: u64) -> u32 {
        let mut request = mint_request(e, request_id);
        let randomness = match request.state {
            RequestState::Fulfilled(randomness) => randomness,
            RequestState::Requested => panic_with_error!(e, MintError::RequestNotFulfilled),
            RequestState::Completed(_) => panic_with_error!(e, MintError::RequestAlreadyCompleted),
        };

        let token_id = total_minted(e);
        let to = request.requester.clone();

        e.storage().persistent().set(&NFTStorageKey::Owner(token_id), &to);
        e.storage()
            .persistent()
            .set(&NFTStorageKey::Balance(to.clone()), &(Self::balance(e, to.clone()) + 1));
        e.storage()
            .persistent()
            .set(&NFTStorageKey::Adventurer(token_id), &Adventurer::roll(&randomness));

        e.storage().instance().set(&SupplyKey::TotalMinted, &(token_id + 1));
        e.storage().instance().set(&SupplyKey::Reserved, &(reserved(e) - 1));

        request.state = RequestState::Completed(token_id);
        e.storage().persistent().set(&SupplyKey::Request(request_id), &request);

        log!(e, "mint finished", request_id, token_id);
        events::Mint { to, token_id }.publish(e);

        token_id
    }

    fn request_state(e: &Env, request_id: u64) -> Option<RequestState> {
        e.storage()
            .persistent()
            .get::<_, MintRequest>(&SupplyKey::Request(request_id))
            .map(|request| request.state)
    }

    fn pending_requests(e: &Env) -> u32 {
        reserved(e)
    }

    fn oracle_config(e: &Env) -> OracleConfig {
        oracle_config(e)
    }

    fn withdraw(e: &Env, to: Address) -> i128 {
        admin(e).require_auth();

        let contract = e.current_contract_address();
        let payment_token = token::TokenClient::new(e, &payment_token(e));
        let amount = payment_token.balance(&contract);
        if amount > 0 {
            payment_token.transfer(&contract, &to, &amount);
        }

        events::Withdraw { to, amount }.publish(e);
        amount
    }

    fn balance(e: &Env, owner: Address) -> u32 {
        e.storage()
            .persistent()
            .get(&NFTStorageKey::Balance(owner))
            .unwrap_or(0)
    }

    fn owner_of(e: &Env, token_id: u32) -> Address {
        e.storage()
            .persistent()
            .get(&NFTStorageKey::Owner(token_id))
            .unwrap_or_else(|| panic_with_error!(e, MintError::NonExistentToken))
    }

    fn transfer(e: &Env, from: Address, to: Address, token_id: u32) {
        from.require_auth();

        if Self::owner_of(e, token_id) != from {
            panic_with_error!(e, MintError::IncorrectOwner);
        }

        e.storage().persistent().set(&NFTStorageKey::Owner(token_id), &to);
        e.storage()
            .persistent()
            .set(&NFTStorageKey::Balance(from.clone()), &(Self::balance(e, from.clone()) - 1));
        e.storage()
            .persistent()
            .set(&NFTStorageKey::Balance(to.clone()), &(Self::balance(e, to.clone()) + 1));

        events::Transfer { from, to, token_id }.publish(e);
    }

    fn adventurer(e: &Env, token_id: u32) -> Adventurer {
        e.storage()
            .persistent()
            .get(&NFTStorageKey::Adventurer(token_id))
            .unwrap_or_else(|| panic_with_error!(e, MintError::NonExistentToken))
    }

    fn name(e: &Env) -> String {
        e.storage()
            .instance()
            .get(&NFTStorageKey::Name)
            .unwrap_or_else(|| panic_with_error!(e, MintError::UnsetMetadata))
    }

    fn symbol(e: &Env) -> String {
        e.storage()
            .instance()
            .get(&NFTStorageKey::Symbol)
            .unwrap_or_else(|| panic_with_error!(e, MintError::UnsetMetadata))
    }

    fn token_uri(e: &Env, token_id: u32) -> String {
        Self::owner_of(e, token_id);

        let base: String = e
            .storage()
            .instance()
            .get(&NFTStorageKey::URI)
            .unwrap_or_else(|| panic_with_error!(e, MintError::UnsetMetadata));

        let mut uri = base.to_bytes();
        uri.push_back(b'/');
        uri.append(&u32_to_decimal_bytes(e, token_id));

        let mut buf = [0u8; URI_CAPACITY];
        let len = uri.len() as usize;
        if len > URI_CAPACITY {
            panic_with_error!(e, MintError::UnsetMetadata);
        }
        uri.copy_into_slice(&mut buf[..len]);
        String::from_bytes(e, &buf[..len])
    }
}

fn admin(e: &Env) -> Address {
    e.storage().instance().get(&DataKey::Admin).unwrap()
}

fn payment_token(e: &Env) -> Address {
    e.storage().instance().get(&DataKey::PaymentToken).unwrap()
}

fn oracle_config(e: &Env) -> OracleConfig {
    e.storage().instance().get(&DataKey::Oracle).unwrap()
}

fn total_minted(e: &Env) -> u32 {
    e.storage().instance().get(&SupplyKey::TotalMinted).unwrap_or(0)
}

fn reserved(e: &Env) -> u32 {
    e.storage().instance().get(&SupplyKey::Reserved).unwrap_or(0)
}

fn mint_request(e: &Env, request_id: u64) -> MintRequest {
    e.storage()
        .persistent()
        .get(&SupplyKey::Request(request_id))
        .unwrap_or_else(|| panic_with_error!(e, MintError::UnknownRequest))
}

/// Renders `value` as ASCII decimal digits.
pub(crate) fn u32_to_decimal_bytes(e: &Env, value: u32) -> Bytes {
    let mut digits = [0u8; 10];
    let mut n = value;
    let mut i = digits.len();
    loop {
        i -= 1;
        digits[i] = b'0' + (n % 10) as u8;
        n /= 10;
        if n == 0 {
            break;
        }
    }
    Bytes::from_slice(e, &digits[i..])
}
