//! Matching and ordering of IPv4/IPv6 address and CIDR literals, as they
//! appear in allow/block lists.

pub mod ip_list;
pub mod literal;
pub mod matcher;
pub mod order;
pub mod utils;

pub use ip_list::IpList;
pub use literal::{Family, IpLiteral, ParseError};
pub use matcher::{classify, classify_with, matches, MatchPolicy, MatchStatus};
pub use order::{compare, range_end_after_start, sort_literals};
