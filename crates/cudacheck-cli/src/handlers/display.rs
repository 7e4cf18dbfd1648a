//! Display utilities for diagnostic output.

use std::io::{self, Write};

// ANSI color codes for better UX
pub const GREEN: &str = "\x1b[32m";
pub const RED: &str = "\x1b[31m";
pub const YELLOW: &str = "\x1b[33m";
pub const BOLD: &str = "\x1b[1m";
pub const RESET: &str = "\x1b[0m";

const BANNER_WIDTH: usize = 60;

/// Print a bold title between `=` rules.
pub fn banner<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
    writeln!(out, "{}", "=".repeat(BANNER_WIDTH))?;
    writeln!(out, "{BOLD}{title}{RESET}")?;
    writeln!(out, "{}", "=".repeat(BANNER_WIDTH))
}

/// Print a closing title between `=` rules, preceded by a blank line.
pub fn footer<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
    writeln!(out, "\n{}", "=".repeat(BANNER_WIDTH))?;
    writeln!(out, "{title}")?;
    writeln!(out, "{}", "=".repeat(BANNER_WIDTH))
}

/// Format an indented success line.
pub fn pass(msg: &str) -> String {
    format!("   {GREEN}✓ {msg}{RESET}")
}

/// Format an indented failure line.
pub fn fail(msg: &str) -> String {
    format!("   {RED}✗ {msg}{RESET}")
}

/// Format an indented skip line.
pub fn skip(msg: &str) -> String {
    format!("   {YELLOW}⚠ {msg}{RESET}")
}
