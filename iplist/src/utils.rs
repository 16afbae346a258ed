use std::{
	fs::File,
	io::{BufRead, BufReader},
	path::Path,
};

use log::*;

/// Something built up from a list file: one entry per line, blank lines and
/// `#` comments ignored.
pub trait FromLst {
	/// `None` rejects the line.
	fn append_line(&mut self, l: &str) -> Option<()>;

	/// Returns the number of accepted entries.
	fn append_from(&mut self, lst: impl IntoIterator<Item = impl AsRef<str>>) -> usize {
		lst.into_iter()
			.filter(|l| {
				let l = l.as_ref().trim_ascii();
				if l.is_empty() || l.starts_with('#') {
					return false;
				}
				let ok = self.append_line(l).is_some();
				if !ok {
					warn!("rejected list entry: {}", l);
				}
				ok
			})
			.count()
	}

	fn append_from_file(&mut self, file: impl AsRef<Path>) -> Option<usize> {
		let file = file.as_ref();
		let c = self.append_from(read_lines(file)?);
		info!("{}: {} entries", file.display(), c);
		Some(c)
	}
}

/// Lines of `f` without their terminators. A line that is not UTF-8 is
/// logged and skipped; a read error ends the iteration.
pub fn read_lines(f: impl AsRef<Path>) -> Option<impl Iterator<Item = String>> {
	let path = f.as_ref().to_path_buf();
	let file = File::open(&path)
		.map_err(|e| warn!("cannot open {}: {}", path.display(), e))
		.ok()?;
	let lines = BufReader::new(file)
		.split(b'\n')
		.map_while(move |r| r.map_err(|e| warn!("read error: {}", e)).ok())
		.enumerate()
		.filter_map(move |(i, mut buf)| {
			if buf.last() == Some(&b'\r') {
				buf.pop();
			}
			match String::from_utf8(buf) {
				Ok(l) => Some(l),
				Err(_) => {
					warn!("{}:{}: not UTF-8, skipped", path.display(), i + 1);
					None
				}
			}
		});
	Some(lines)
}
