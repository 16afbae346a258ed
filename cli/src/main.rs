use std::{io::BufRead, net::IpAddr, process::ExitCode};

use clap::Parser;
use log::*;

use iplist::{classify_with, matches, utils::read_lines, IpLiteral, MatchPolicy};

mod args;
use args::*;

fn main() -> ExitCode {
	let args = CliArgs::parse();

	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

	match args.cmd {
		Cmd::Check(args) => check(args),
		Cmd::Sort { file } => {
			let lines: Vec<String> = match file {
				Some(f) => match read_lines(&f) {
					Some(lines) => lines.collect(),
					None => return ExitCode::from(2),
				},
				None => std::io::stdin().lock().lines().map_while(Result::ok).collect(),
			};
			sort(lines);
			ExitCode::SUCCESS
		}
	}
}

fn check(args: CheckArgs) -> ExitCode {
	if let Err(e) = args.addr.trim_ascii().parse::<IpAddr>() {
		error!("invalid address {}: {}", args.addr, e);
		return ExitCode::from(2);
	}

	let mut list = String::new();
	for f in args.lists.iter() {
		let Some(lines) = read_lines(f) else {
			return ExitCode::from(2);
		};
		let mut c = 0;
		for l in lines {
			list.push_str(&l);
			list.push('\n');
			c += 1;
		}
		debug!("read {} lines from {}", c, f.display());
	}

	let policy = if args.first_match {
		MatchPolicy::FirstMatch
	} else {
		MatchPolicy::ExactFirst
	};
	let status = classify_with(&args.addr, &list, policy);
	println!("{}", status);
	if args.verbose {
		for (i, entry, s) in matches(&args.addr, &list) {
			println!("{:>6}  {:<9}  {}", i + 1, s, entry);
		}
	}

	if status.is_found() {
		ExitCode::SUCCESS
	} else {
		ExitCode::from(1)
	}
}

fn sort(lines: Vec<String>) {
	let mut lits: Vec<String> = lines
		.into_iter()
		.filter_map(|l| {
			let l = l.trim_ascii();
			if l.is_empty() {
				return None;
			}
			match l.parse::<IpLiteral>() {
				Ok(_) => Some(l.to_string()),
				Err(e) => {
					warn!("dropping {:?}: {}", l, e);
					None
				}
			}
		})
		.collect();
	iplist::sort_literals(&mut lits);
	for l in lits {
		println!("{}", l);
	}
}
