/// Route component constants shared across crates
pub const EVENTS_ROUTE_COMPONENT: &str = "events";
pub const EVENTS_ROUTE_PREFIX: &str = const_str::concat!("/", EVENTS_ROUTE_COMPONENT);

pub const UPCOMING_ROUTE_COMPONENT: &str = "upcoming";
pub const UPCOMING_ROUTE_PREFIX: &str =
    const_str::concat!(EVENTS_ROUTE_PREFIX, "/", UPCOMING_ROUTE_COMPONENT);

pub const SUBMIT_ROUTE_COMPONENT: &str = "submit";
pub const SUBMIT_ROUTE_PREFIX: &str =
    const_str::concat!(EVENTS_ROUTE_PREFIX, "/", SUBMIT_ROUTE_COMPONENT);

pub const APPROVE_ROUTE_COMPONENT: &str = "approve";
pub const APPROVE_ROUTE_PREFIX: &str =
    const_str::concat!(EVENTS_ROUTE_PREFIX, "/", APPROVE_ROUTE_COMPONENT);

pub const LOCATIONS_ROUTE_COMPONENT: &str = "locations";

pub const HEARTBEAT_ROUTE_COMPONENT: &str = "heartbeat";
pub const HEARTBEAT_ROUTE_PREFIX: &str = const_str::concat!("/", HEARTBEAT_ROUTE_COMPONENT);
