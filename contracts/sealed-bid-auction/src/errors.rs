use soroban_sdk::contracterror;

/// Contract error taxonomy. Codes are grouped by concern: 1xx initialization
/// and authorization, 2xx lifecycle preconditions, 3xx payment and external
/// resolution, 4xx internal integrity guards.
///
/// Integrity errors (4xx) should be unreachable given correct component
/// interaction; seeing one indicates a defect, and the whole call aborts
/// without partial state mutation.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 101,
    NotInitialized = 102,
    NotOperator = 103,

    AuctionInProgress = 201,
    AuctionNotActive = 202,
    AuctionAlreadyResolved = 203,
    AuctionNotFound = 204,
    WinnerNotSet = 205,

    InsufficientFee = 301,
    ResolutionUnavailable = 302,

    AlreadyMinted = 401,
    TokenNotMinted = 402,
}
