pub mod dnsimple;
pub mod traits;

pub use traits::ApiTransport;
