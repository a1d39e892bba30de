pub mod clock;
pub mod secure_compare;
pub mod url_signer;

pub use clock::{Clock, FixedClock, SystemClock};
pub use secure_compare::secure_compare;
pub use url_signer::{SignatureEngine, DEFAULT_EXPIRY_SECS, EXPIRES_PARAM, SIGNATURE_PARAM};
