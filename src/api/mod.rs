pub mod sign;
pub mod verify;

pub use sign::{handle_sign, SignRequest, SignResponse, __path_handle_sign};
pub use verify::{handle_verify, VerifyRequest, VerifyResponse, __path_handle_verify};
