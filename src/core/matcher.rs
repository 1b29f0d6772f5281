// Path matchers for jumping
//
// Three ways a list of needles can match a stored path, tried by the jumper
// from strictest to loosest.

use crate::error::Result;
use regex::{escape, Regex, RegexBuilder};
use std::path::MAIN_SEPARATOR;

// ".*n1.*n2.*" - needles appear in order, anywhere in the path
pub fn anywhere_re(needles: &[String]) -> Result<Regex> {
    let mut pattern = String::from(".*");
    for needle in needles {
        pattern.push_str(&escape(needle));
        pattern.push_str(".*");
    }

    build(&pattern)
}

// "n1[^/]*/[^/]*n2[^/]*$" - needles sit in consecutive trailing components
pub fn consecutive_re(needles: &[String]) -> Result<Regex> {
    let sep = escape(&MAIN_SEPARATOR.to_string());
    let within = format!("[^{}]*", sep);
    let across = format!("{}{}{}", within, sep, within);

    let escaped: Vec<String> = needles.iter().map(|n| escape(n)).collect();
    let mut pattern = escaped.join(&across);
    pattern.push_str(&within);
    pattern.push('$');

    build(&pattern)
}

fn build(pattern: &str) -> Result<Regex> {
    let re = RegexBuilder::new(pattern)
        .case_insensitive(true)
        .unicode(true)
        .build()?;
    Ok(re)
}

/// True when the last component of `path` is close enough to `needle`
#[inline]
pub fn match_dist(needle: &str, path: &str, threshold: f32) -> bool {
    match path.split(MAIN_SEPARATOR).last() {
        Some(basename) => letter_similarity(needle, basename) >= threshold,
        None => false,
    }
}

// 1.0 for equal strings, falling towards 0.0 as edits pile up. Case-insensitive.
fn letter_similarity(needle: &str, basename: &str) -> f32 {
    let needle: Vec<char> = needle.to_lowercase().chars().collect();
    let basename: Vec<char> = basename.to_lowercase().chars().collect();

    let len = needle.len().max(basename.len());
    if len == 0 {
        return 0.0;
    }

    1.0 - edit_distance(&needle, &basename) as f32 / len as f32
}

// Levenshtein distance, single row
fn edit_distance(a: &[char], b: &[char]) -> usize {
    let mut row: Vec<usize> = (0..=a.len()).collect();

    for (j, cb) in b.iter().enumerate() {
        let mut diag = row[0];
        row[0] = j + 1;
        for (i, ca) in a.iter().enumerate() {
            let above = row[i + 1];
            row[i + 1] = if ca == cb {
                diag
            } else {
                diag.min(above).min(row[i]) + 1
            };
            diag = above;
        }
    }

    row[a.len()]
}
