use std::{fmt, net::IpAddr};

use log::*;

use crate::literal::{Family, IpLiteral};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchStatus {
	Exact,
	Cidr,
	NotFound,
}

impl MatchStatus {
	pub fn as_str(self) -> &'static str {
		match self {
			MatchStatus::Exact => "EXACT",
			MatchStatus::Cidr => "CIDR",
			MatchStatus::NotFound => "NOT_FOUND",
		}
	}

	pub fn is_found(self) -> bool {
		self != MatchStatus::NotFound
	}
}

impl fmt::Display for MatchStatus {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.pad(self.as_str())
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchPolicy {
	/// An exact entry anywhere in the list wins over any range.
	#[default]
	ExactFirst,
	/// Whatever matches first in list order wins.
	FirstMatch,
}

/// How a single list entry relates to `addr`, if at all.
pub fn entry_status(entry: &IpLiteral, addr: &IpAddr) -> MatchStatus {
	if entry.family() != Family::of(addr) || !entry.contains(addr) {
		MatchStatus::NotFound
	} else if entry.is_range() {
		MatchStatus::Cidr
	} else {
		MatchStatus::Exact
	}
}

pub fn classify(candidate: &str, list: &str) -> MatchStatus {
	classify_with(candidate, list, MatchPolicy::ExactFirst)
}

pub fn classify_with(candidate: &str, list: &str, policy: MatchPolicy) -> MatchStatus {
	if list.trim_ascii().is_empty() {
		return MatchStatus::NotFound;
	}
	let addr = match candidate.trim_ascii().parse::<IpAddr>() {
		Ok(addr) => addr,
		Err(_) => {
			debug!("invalid candidate: {:?}", candidate);
			return MatchStatus::NotFound;
		}
	};

	let mut ret = MatchStatus::NotFound;
	for (_, entry) in entries(list) {
		match entry_status(&entry, &addr) {
			MatchStatus::Exact => return MatchStatus::Exact,
			MatchStatus::Cidr => {
				if policy == MatchPolicy::FirstMatch {
					return MatchStatus::Cidr;
				}
				// keep looking, an exact entry further down still wins
				ret = MatchStatus::Cidr;
			}
			MatchStatus::NotFound => {}
		}
	}
	ret
}

/// Every entry of `list` that matches `candidate`, with its zero-based line
/// index.
pub fn matches(candidate: &str, list: &str) -> Vec<(usize, IpLiteral, MatchStatus)> {
	let addr = match candidate.trim_ascii().parse::<IpAddr>() {
		Ok(addr) => addr,
		Err(_) => return Vec::new(),
	};
	entries(list)
		.filter_map(|(i, entry)| match entry_status(&entry, &addr) {
			MatchStatus::NotFound => None,
			status => Some((i, entry, status)),
		})
		.collect()
}

fn entries(list: &str) -> impl Iterator<Item = (usize, IpLiteral)> + '_ {
	list.lines().enumerate().filter_map(|(i, l)| {
		let l = l.trim_ascii();
		if l.is_empty() {
			return None;
		}
		match IpLiteral::parse(l) {
			Ok(entry) => Some((i, entry)),
			Err(e) => {
				debug!("skipping line {}: {}", i + 1, e);
				None
			}
		}
	})
}
