use soroban_sdk::{contractclient, contracterror, Address, BytesN, Vec};

/// Error codes surfaced by confidentiality gateway contracts.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum GatewayError {
    Unavailable = 1,
    UnknownHandle = 2,
    UnauthorizedDecrypt = 3,
}

/// Interface for the confidential-computation service.
///
/// The cryptography behind it is fully opaque to this contract: values go in
/// as plaintext only on the gateway's side of the trust boundary, and come
/// back as 32-byte ciphertext handles. The engine never sees a plaintext.
///
/// `compare_and_reveal` must be deterministic: given handles in roster
/// (submission) order, ties between equal maxima resolve to the lowest index,
/// i.e. the first-submitted bid wins.
#[allow(dead_code)]
#[contractclient(name = "GatewayClient")]
pub trait ConfidentialityGateway {
    /// Seals `value` for `holder` in the scope of `context` (the auction
    /// contract address) and returns an opaque handle to the ciphertext.
    fn encrypt(value: i128, holder: Address, context: Address) -> BytesN<32>;

    /// Compares the sealed values behind `handles` and returns the index of
    /// the maximum, without revealing any plaintext to the caller.
    fn compare_and_reveal(handles: Vec<BytesN<32>>) -> Result<u32, GatewayError>;

    /// Reveals the sealed value behind `handle`, authorized only for the
    /// original holder.
    fn decrypt(handle: BytesN<32>, requester: Address) -> Result<i128, GatewayError>;

    /// Fee charged per confidential operation, in the configured fee token.
    fn get_fee() -> i128;
}
