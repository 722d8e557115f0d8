//! The backup file format: a comment header, one tab-separated line per DNS
//! record, then an optional section of page rules as commented JSON lines.
//! Every line ends in CRLF.

use std::io::{self, Write};

use crate::api::models::{DnsRecord, PageRule, Zone};

pub const SEPARATOR: &str = "\t\t";
pub const NEWLINE: &str = "\r\n";
pub const NO_PAGE_RULES: &str = "# No page rules configured";

pub fn proxy_indicator(proxied: bool) -> &'static str {
    if proxied {
        "PROXY"
    } else {
        "NO_PROXY"
    }
}

pub fn write_zone<W: Write>(
    out: &mut W,
    zone: &Zone,
    records: &[DnsRecord],
    page_rules: Option<&[PageRule]>,
) -> io::Result<()> {
    write_header(out, zone)?;
    for record in records {
        log::debug!("{:?}", record);
        write_record(out, record)?;
    }
    if let Some(rules) = page_rules {
        write_page_rules(out, rules)?;
    }
    Ok(())
}

fn write_header<W: Write>(out: &mut W, zone: &Zone) -> io::Result<()> {
    let timestamp = |value: &Option<String>| value.clone().unwrap_or_default();

    write!(out, "#{NEWLINE}")?;
    write!(out, "# DNS zone backup for {}{NEWLINE}", zone.name)?;
    write!(out, "# Domain created on: {}{NEWLINE}", timestamp(&zone.created_on))?;
    write!(out, "# Domain activated on: {}{NEWLINE}", timestamp(&zone.activated_on))?;
    write!(out, "# Domain last modified on: {}{NEWLINE}", timestamp(&zone.modified_on))?;
    write!(out, "#{NEWLINE}")?;
    write!(
        out,
        "# Name{SEPARATOR}TTL{SEPARATOR}Type{SEPARATOR}Proxied{SEPARATOR}Value{NEWLINE}"
    )
}

fn write_record<W: Write>(out: &mut W, record: &DnsRecord) -> io::Result<()> {
    write!(
        out,
        "{}{SEPARATOR}{}{SEPARATOR}{}{SEPARATOR}{}{SEPARATOR}{}{NEWLINE}",
        record.name,
        record.ttl,
        record.r#type,
        proxy_indicator(record.proxied),
        record.content,
    )
}

fn write_page_rules<W: Write>(out: &mut W, rules: &[PageRule]) -> io::Result<()> {
    write!(out, "#{NEWLINE}# Page rules (ordered by priority){NEWLINE}#{NEWLINE}")?;

    if rules.is_empty() {
        return write!(out, "{NO_PAGE_RULES}{NEWLINE}");
    }

    for rule in rules {
        let json = serde_json::to_string(rule)?;
        write!(out, "# {json}{NEWLINE}")?;
    }
    Ok(())
}
