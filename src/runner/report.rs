//! Console rendering for test discovery and Jest results.
//!
//! Styles come from `anstyle`; callers pass an `anstream` stream so colour is
//! dropped automatically when output is piped.

use std::io::{self, Write};
use std::path::PathBuf;

use anstyle::{AnsiColor, Effects, Style};
use chrono::{DateTime, Utc};

use super::results::{JestResults, TestFileResult};

const PASS: Style = Style::new()
    .fg_color(Some(anstyle::Color::Ansi(AnsiColor::Green)))
    .effects(Effects::BOLD);
const FAIL: Style = Style::new()
    .fg_color(Some(anstyle::Color::Ansi(AnsiColor::Red)))
    .effects(Effects::BOLD);
const WARN: Style = Style::new().fg_color(Some(anstyle::Color::Ansi(AnsiColor::Yellow)));
const INFO: Style = Style::new().fg_color(Some(anstyle::Color::Ansi(AnsiColor::Cyan)));
const TITLE: Style = Style::new().effects(Effects::BOLD.insert(Effects::UNDERLINE));
const HIGHLIGHT: Style = Style::new()
    .fg_color(Some(anstyle::Color::Ansi(AnsiColor::Magenta)))
    .effects(Effects::BOLD);
const DIM: Style = Style::new().effects(Effects::DIMMED);

/// List the test files about to run
pub fn render_discovery<W: Write>(files: &[PathBuf], out: &mut W) -> io::Result<()> {
    writeln!(out, "{INFO}📁 Found {} test file(s):{INFO:#}", files.len())?;
    for file in files {
        let name = file.file_name().map(|n| n.to_string_lossy()).unwrap_or_default();
        writeln!(out, "   • {INFO}{name}{INFO:#}")?;
    }
    writeln!(out)
}

/// Per-file results followed by the final stats block
pub fn render_report<W: Write>(results: &JestResults, out: &mut W) -> io::Result<()> {
    writeln!(out, "\n{TITLE}📋 TEST RESULTS SUMMARY{TITLE:#}")?;
    writeln!(out, "{}", "=".repeat(60))?;

    for file in &results.test_results {
        render_file(file, out)?;
    }

    writeln!(out, "\n{TITLE}📊 FINAL STATS{TITLE:#}")?;
    writeln!(out, "{}", "=".repeat(40))?;
    writeln!(out, "🧪 Total Test Suites: {}", results.num_total_test_suites)?;
    writeln!(out, "✅ Passed:            {PASS}{}{PASS:#}", results.num_passed_test_suites)?;
    writeln!(out, "❌ Failed:            {FAIL}{}{FAIL:#}", results.num_failed_test_suites)?;
    writeln!(out, "🟡 Skipped:           {WARN}{}{WARN:#}", results.num_pending_test_suites)?;
    writeln!(out, "{}", "-".repeat(40))?;
    writeln!(out, "🧩 Total Tests:       {}", results.num_total_tests)?;

    let rate = match results.pass_rate() {
        Some(rate) => format!("{}%", rate),
        None => "n/a".to_string(),
    };
    writeln!(
        out,
        "📈 Pass Rate:         {}/{} ({})",
        results.num_passed_tests, results.num_total_tests, rate
    )?;

    let started = results
        .start_time
        .and_then(|ms| DateTime::<Utc>::from_timestamp_millis(ms as i64));
    if let Some(started) = started {
        writeln!(out, "🕒 Started:           {}", started.format("%Y-%m-%d %H:%M:%S UTC"))?;
    }

    if results.num_failed_tests > 0 {
        writeln!(
            out,
            "\n{FAIL}❗ {} test(s) failed. Please fix the issues above.{FAIL:#}",
            results.num_failed_tests
        )
    } else {
        writeln!(out, "\n{PASS}🎉 All tests passed! Great job!{PASS:#}")
    }
}

fn render_file<W: Write>(file: &TestFileResult, out: &mut W) -> io::Result<()> {
    let badge = if file.status.is_passed() {
        format!("{PASS}PASS{PASS:#}")
    } else {
        format!("{FAIL}FAIL{FAIL:#}")
    };
    writeln!(out, "\n📄 {HIGHLIGHT}{}{HIGHLIGHT:#} [{}]", file.file_name(), badge)?;

    for assertion in &file.assertion_results {
        let icon = if assertion.status.is_passed() { "🟢" } else { "🔴" };
        let duration = match assertion.duration {
            Some(ms) if ms > 0.0 => format!(" {DIM}({}ms){DIM:#}", ms.round() as u64),
            _ => String::new(),
        };
        writeln!(out, "   {} {}{}", icon, assertion.full_name, duration)?;

        for message in &assertion.failure_messages {
            let first_line = message.lines().map(str::trim).find(|l| !l.is_empty());
            if let Some(line) = first_line {
                writeln!(out, "      {DIM}{}{DIM:#}", anstream::adapter::strip_str(line))?;
            }
        }
    }

    // Suites that fail before any test runs (syntax errors, missing modules) only carry a message
    if file.assertion_results.is_empty() && !file.message.trim().is_empty() {
        for line in file.message.lines().map(str::trim).filter(|l| !l.is_empty()).take(3) {
            writeln!(out, "      {DIM}{}{DIM:#}", anstream::adapter::strip_str(line))?;
        }
    }

    Ok(())
}
