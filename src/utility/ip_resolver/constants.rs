// Current module imports
use super::types::EchoService;

/// IP argument sentinel that requests discovery.
pub const IP_AUTO: &str = "auto";

/// HTTP client settings
pub const REQUEST_TIMEOUT_SECS: u64 = 5;

/// HTTP echo services queried after the DNS-based resolvers, in order.
pub const IPV4_ECHO_SERVICES: [EchoService; 2] = [
    EchoService {
        name: "ipify",
        url: "https://api.ipify.org",
    },
    EchoService {
        name: "icanhazip",
        url: "https://ipv4.icanhazip.com",
    },
];
