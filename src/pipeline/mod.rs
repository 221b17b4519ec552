// ============================================================================
// Pipeline Module
// The transformation stages and the runner that chains them
// ============================================================================

mod divisor;
mod stages;
mod transformer;

pub use divisor::parse_divisor;
pub use stages::{
    decode_left, decode_right, divide, encode_letters, format_quotient, interleave, swap_point,
};
pub use transformer::{transform, Transformer};
