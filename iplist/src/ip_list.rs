use std::{
	collections::BTreeSet,
	net::{IpAddr, Ipv4Addr, Ipv6Addr},
	path::Path,
};

use treebitmap::IpLookupTable;

use crate::{
	literal::{mask_u128, mask_u32, IpLiteral},
	matcher::MatchStatus,
	utils::FromLst,
};

/// A list parsed once and indexed, for checking many addresses against it.
///
/// Answers the same as [`crate::classify`] on the text it was built from.
pub struct IpList {
	exact4: BTreeSet<u32>,
	exact6: BTreeSet<u128>,
	v4: IpLookupTable<Ipv4Addr, ()>,
	v6: IpLookupTable<Ipv6Addr, ()>,
	// "/0" entries, kept out of the tables
	any4: bool,
	any6: bool,
	len: usize,
}

impl IpList {
	#[allow(clippy::new_without_default)]
	pub fn new() -> Self {
		Self {
			exact4: BTreeSet::new(),
			exact6: BTreeSet::new(),
			v4: IpLookupTable::new(),
			v6: IpLookupTable::new(),
			any4: false,
			any6: false,
			len: 0,
		}
	}

	pub fn from_text(list: &str) -> Self {
		let mut l = Self::new();
		l.append_from(list.lines());
		l
	}

	pub fn from_file(file: impl AsRef<Path>) -> Option<Self> {
		let mut l = Self::new();
		l.append_from_file(file)?;
		Some(l)
	}

	pub fn insert(&mut self, entry: IpLiteral) {
		match (entry.addr(), entry.prefix()) {
			(IpAddr::V4(a), None) => {
				self.exact4.insert(u32::from(a));
			}
			(IpAddr::V6(a), None) => {
				self.exact6.insert(u128::from(a));
			}
			(IpAddr::V4(_), Some(0)) => self.any4 = true,
			(IpAddr::V6(_), Some(0)) => self.any6 = true,
			(IpAddr::V4(a), Some(len)) => {
				let net = Ipv4Addr::from(u32::from(a) & mask_u32(len));
				self.v4.insert(net, len as u32, ());
			}
			(IpAddr::V6(a), Some(len)) => {
				let net = Ipv6Addr::from(u128::from(a) & mask_u128(len));
				self.v6.insert(net, len as u32, ());
			}
		}
		self.len += 1;
	}

	pub fn status4(&self, addr: Ipv4Addr) -> MatchStatus {
		if self.exact4.contains(&u32::from(addr)) {
			MatchStatus::Exact
		} else if self.any4 || self.v4.longest_match(addr).is_some() {
			MatchStatus::Cidr
		} else {
			MatchStatus::NotFound
		}
	}

	pub fn status6(&self, addr: Ipv6Addr) -> MatchStatus {
		if self.exact6.contains(&u128::from(addr)) {
			MatchStatus::Exact
		} else if self.any6 || self.v6.longest_match(addr).is_some() {
			MatchStatus::Cidr
		} else {
			MatchStatus::NotFound
		}
	}

	pub fn status(&self, addr: IpAddr) -> MatchStatus {
		match addr {
			IpAddr::V4(addr) => self.status4(addr),
			IpAddr::V6(addr) => self.status6(addr),
		}
	}

	/// Number of entries accepted, duplicates included.
	pub fn len(&self) -> usize {
		self.len
	}

	pub fn is_empty(&self) -> bool {
		self.len == 0
	}
}

impl FromLst for IpList {
	fn append_line(&mut self, l: &str) -> Option<()> {
		self.insert(IpLiteral::parse(l).ok()?);
		Some(())
	}
}
