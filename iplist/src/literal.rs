use std::{fmt, net::IpAddr, str::FromStr};

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
	#[error("empty literal")]
	Empty,

	#[error("invalid address: {0}")]
	InvalidAddress(String),

	#[error("invalid prefix length: {0}")]
	InvalidPrefix(String),

	#[error("prefix length {prefix} exceeds {max}")]
	PrefixTooLong { prefix: u8, max: u8 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Family {
	V4,
	V6,
}

impl Family {
	pub fn of(addr: &IpAddr) -> Self {
		match addr {
			IpAddr::V4(_) => Family::V4,
			IpAddr::V6(_) => Family::V6,
		}
	}

	pub fn bits(self) -> u8 {
		match self {
			Family::V4 => 32,
			Family::V6 => 128,
		}
	}
}

/// An address as written in a list or a table cell, with an optional CIDR
/// prefix length. The address is kept as given, it is not masked down to the
/// network. Only built through [`IpLiteral::new`] or parsing, so the prefix
/// never exceeds the family's width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IpLiteral {
	addr: IpAddr,
	prefix: Option<u8>,
}

impl IpLiteral {
	pub fn new(addr: IpAddr, prefix: Option<u8>) -> Result<Self, ParseError> {
		let max = Family::of(&addr).bits();
		match prefix {
			Some(prefix) if prefix > max => Err(ParseError::PrefixTooLong { prefix, max }),
			_ => Ok(Self { addr, prefix }),
		}
	}

	pub fn parse(s: &str) -> Result<Self, ParseError> {
		let s = s.trim_ascii();
		if s.is_empty() {
			return Err(ParseError::Empty);
		}
		let (addr, prefix) = match s.split_once('/') {
			Some((addr, len)) => {
				// u8::from_str takes a leading '+', a prefix length doesn't
				if len.is_empty() || !len.bytes().all(|b| b.is_ascii_digit()) {
					return Err(ParseError::InvalidPrefix(len.to_string()));
				}
				let len = len
					.parse::<u8>()
					.map_err(|_| ParseError::InvalidPrefix(len.to_string()))?;
				(addr, Some(len))
			}
			None => (s, None),
		};
		let addr = addr
			.parse::<IpAddr>()
			.map_err(|_| ParseError::InvalidAddress(addr.to_string()))?;
		Self::new(addr, prefix)
	}

	pub fn addr(&self) -> IpAddr {
		self.addr
	}

	pub fn prefix(&self) -> Option<u8> {
		self.prefix
	}

	pub fn family(&self) -> Family {
		Family::of(&self.addr)
	}

	pub fn max_prefix(&self) -> u8 {
		self.family().bits()
	}

	pub fn is_range(&self) -> bool {
		self.prefix.is_some()
	}

	/// Numeric value in its own family, IPv4 zero-extended.
	pub fn value(&self) -> u128 {
		addr_value(&self.addr)
	}

	/// Whether `addr` is this address (plain literal) or lies inside this
	/// range (CIDR literal). Never true across families.
	pub fn contains(&self, addr: &IpAddr) -> bool {
		match (self.addr, addr) {
			(IpAddr::V4(net), IpAddr::V4(a)) => match self.prefix {
				None => net == *a,
				Some(len) => {
					let mask = mask_u32(len);
					u32::from(net) & mask == u32::from(*a) & mask
				}
			},
			(IpAddr::V6(net), IpAddr::V6(a)) => match self.prefix {
				None => net == *a,
				Some(len) => {
					let mask = mask_u128(len);
					u128::from(net) & mask == u128::from(*a) & mask
				}
			},
			_ => false,
		}
	}
}

impl FromStr for IpLiteral {
	type Err = ParseError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::parse(s)
	}
}

impl fmt::Display for IpLiteral {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self.prefix {
			Some(len) => write!(f, "{}/{}", self.addr, len),
			None => write!(f, "{}", self.addr),
		}
	}
}

pub fn addr_value(addr: &IpAddr) -> u128 {
	match addr {
		IpAddr::V4(a) => u32::from(*a) as u128,
		IpAddr::V6(a) => u128::from(*a),
	}
}

// "::ffff:a.b.c.d", so an IPv4 address lands next to its mapped form
pub(crate) fn mapped_value(addr: &IpAddr) -> u128 {
	match addr {
		IpAddr::V4(a) => u128::from(a.to_ipv6_mapped()),
		IpAddr::V6(a) => u128::from(*a),
	}
}

pub(crate) fn mask_u32(len: u8) -> u32 {
	u32::MAX.checked_shl(32 - len as u32).unwrap_or(0)
}

pub(crate) fn mask_u128(len: u8) -> u128 {
	u128::MAX.checked_shl(128 - len as u32).unwrap_or(0)
}
