//! Host-to-tenant resolution for the Atrium platform.
//!
//! Maps an inbound Host header to the agency that serves it. Hosts under the
//! platform's root domain are matched by subdomain label; every other host is
//! matched by exact custom domain. The two namespaces are disjoint.

pub mod host;
pub mod resolver;

pub use host::{HostMatch, classify, normalize_host};
pub use resolver::HostResolver;
