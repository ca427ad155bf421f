//! Small string helpers used around deployments: command exit codes, durations, domains, credential sections and
//! commit aliases.

mod alias;
pub use alias::*;

mod domain;
pub use domain::*;

mod duration;
pub use duration::*;

mod exit;
pub use exit::*;

mod sections;
pub use sections::*;
