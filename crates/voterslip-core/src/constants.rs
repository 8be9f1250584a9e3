/// Route component constants shared across crates
pub const API_ROUTE_COMPONENT: &str = "api";
pub const API_ROUTE_PREFIX: &str = const_str::concat!("/", API_ROUTE_COMPONENT);

pub const VOTERS_ROUTE_COMPONENT: &str = "voters";
pub const VOTERS_ROUTE_PREFIX: &str =
    const_str::concat!(API_ROUTE_PREFIX, "/", VOTERS_ROUTE_COMPONENT);

/// Default Realtime Database node holding the electoral roll, keyed by
/// mobile number.
pub const DEFAULT_VOTERS_NODE: &str = "BCD";

/// Default Realtime Database node holding the lowercased-name to phone-key
/// secondary index maintained by the ingestion job.
pub const DEFAULT_NAME_INDEX_NODE: &str = "BCD_INDEX";

/// Template row the roll import leaves behind in the primary node. Not a
/// voter; must never surface in scan or listing results.
pub const PLACEHOLDER_KEY: &str = "Contact";
