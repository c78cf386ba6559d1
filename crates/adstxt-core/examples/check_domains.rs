//! Validate the exchange domains in a local ads.txt-style file.
//!
//! Usage: `cargo run --example check_domains -- path/to/ads.txt`
//!
//! Only field #1 of each record line is inspected; full ads.txt record
//! parsing (account ids, relationship, certification authority) is a
//! caller's concern, not this crate's.

use std::{env, fs, process};

use adstxt_core::{is_valid_domain_syntax, validate_ad_system_domain};

fn main() {
    let path = match env::args().nth(1) {
        Some(path) => path,
        None => {
            eprintln!("usage: check_domains <ads.txt file>");
            process::exit(2);
        }
    };

    let body = match fs::read_to_string(&path) {
        Ok(body) => body,
        Err(err) => {
            eprintln!("{path}: {err}");
            process::exit(1);
        }
    };

    for line in body.lines() {
        let line = line.split('#').next().unwrap_or("").trim();
        // Skip blanks and variable lines (CONTACT=, SUBDOMAIN=).
        if line.is_empty() || line.contains('=') {
            continue;
        }
        let domain = match line.split(',').next() {
            Some(field) => field.trim(),
            None => continue,
        };
        if domain.is_empty() {
            continue;
        }

        if !is_valid_domain_syntax(domain) {
            println!("{domain}: not a bare host name");
            continue;
        }
        match validate_ad_system_domain(domain) {
            Ok(()) => println!("{domain}: ok"),
            Err(err) => println!("{domain}: {err}"),
        }
    }
}
