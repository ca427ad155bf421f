mod error;
pub use error::*;

pub mod util;

pub use headerfan_http as http;

pub mod prelude {
    pub use crate::{
        error::*,
        util::{cert_domain_names, domain, parse_duration, wildcard_matches},
    };
    pub use headerfan_http::{fix_multiple_set_cookie, HeaderMap, HeaderNormalizer};
}
