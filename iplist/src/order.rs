//! Ordering for address and CIDR literals, the way a table of list entries
//! should read: numerically, ranges before the bare address they start at.
//!
//! IPv4 sorts at its IPv4-mapped position (`::ffff:a.b.c.d`), so `127.0.0.1`
//! lands right before `::ffff:7f00:1`. Equal values order by prefix length,
//! a bare address counting as the full length of its family and coming after
//! an explicit prefix of that length. IPv4 goes before IPv6 on a full tie.

use std::cmp::Ordering;

use crate::literal::{mapped_value, Family, IpLiteral};

impl IpLiteral {
	pub fn sort_key(&self) -> (u128, u8, bool, Family) {
		(
			mapped_value(&self.addr()),
			self.prefix().unwrap_or(self.max_prefix()),
			!self.is_range(),
			self.family(),
		)
	}
}

impl Ord for IpLiteral {
	fn cmp(&self, other: &Self) -> Ordering {
		self.sort_key().cmp(&other.sort_key())
	}
}

impl PartialOrd for IpLiteral {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

/// Compares two literals as text.
///
/// Both sides are expected to be valid; an unparseable side sorts after every
/// valid one, and two unparseable sides compare as their raw text.
pub fn compare(a: &str, b: &str) -> Ordering {
	match (IpLiteral::parse(a), IpLiteral::parse(b)) {
		(Ok(a), Ok(b)) => a.cmp(&b),
		(Ok(_), Err(_)) => Ordering::Less,
		(Err(_), Ok(_)) => Ordering::Greater,
		(Err(_), Err(_)) => a.cmp(b),
	}
}

/// Stable, so literals that compare equal (one address in two notations)
/// keep their relative order.
pub fn sort_literals<S: AsRef<str>>(lst: &mut [S]) {
	// parse once per element rather than once per comparison
	lst.sort_by_cached_key(|s| {
		let s = s.as_ref();
		match IpLiteral::parse(s) {
			Ok(l) => (false, Some(l.sort_key()), String::new()),
			Err(_) => (true, None, s.to_string()),
		}
	});
}

/// Whether `end` is strictly after `start`, e.g. the bounds of a DHCP pool.
/// Both must be bare addresses of the same family.
pub fn range_end_after_start(start: &str, end: &str) -> bool {
	match (IpLiteral::parse(start), IpLiteral::parse(end)) {
		(Ok(start), Ok(end)) => {
			!start.is_range()
				&& !end.is_range()
				&& start.family() == end.family()
				&& start.value() < end.value()
		}
		_ => false,
	}
}
