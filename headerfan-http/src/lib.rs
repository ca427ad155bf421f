pub mod header;

pub use header::{
    case_variant, fix_multiple_set_cookie, variant_capacity, CaseVariants, HeaderMap,
    HeaderNormalizer,
};

/// re-export source crate
pub use http;
