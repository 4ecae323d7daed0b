// smartzone-api: Async Rust client for the Ruckus SmartZone public REST API
//
// Covers only what a metrics scrape needs: the cookie session handshake
// and read-only resource fetches (GET list endpoints and POST queries).

mod auth;
pub mod client;
pub mod error;
pub mod resource;
pub mod session;
pub mod transport;

pub use client::{DEFAULT_API_VERSION, SmartZoneClient};
pub use error::Error;
pub use resource::{PAGE_SIZE, QueryMode, Resource};
pub use session::{Credentials, Session};
pub use transport::{TlsMode, TransportConfig};
