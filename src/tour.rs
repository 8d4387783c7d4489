//! # Tour Module
//!
//! The guided tour driver for the demonstration library.
//!
//! Provides:
//! - A fixed registry of demonstration sections, each pairing a title with a
//!   runner that produces the lines printed under its header
//! - A renderer that writes numbered section headers and body lines to any
//!   `io::Write` sink
//! - ANSI color for headers via `colored` (auto-disabled off-terminal, so a
//!   piped transcript stays byte-stable)
//!
//! ## Example Output
//!
//! ```text
//! 1. Null Check Example:
//! Message is null
//!
//! 2. Option Example:
//! Message: Default Message
//! Message length (using map): 0
//! ```

use std::io::{self, Write};

use colored::*;

use crate::checks::{describe_equality, describe_message, describe_user_name};
use crate::collections::{describe_first_element, list_items, list_items_or_empty};
use crate::optional::{
    describe_display_name, describe_optional_message, process_input, process_user,
};
use crate::require::describe_required_name;
use crate::user::User;

/// A single stop on the tour: a header title plus the runner producing the
/// lines printed under it.
pub struct Section {
    pub title: &'static str,
    pub run: fn() -> Vec<String>,
}

/// The demonstration sections, in the fixed order the tour prints them.
pub fn sections() -> Vec<Section> {
    vec![
        Section {
            title: "Null Check Example",
            run: null_check,
        },
        Section {
            title: "Option Example",
            run: option_combinators,
        },
        Section {
            title: "Required Value Example",
            run: required_value,
        },
        Section {
            title: "Zero-Initialized Array Example",
            run: zero_initialized_array,
        },
        Section {
            title: "Nested Field Access Example",
            run: nested_field_access,
        },
        Section {
            title: "Optional Nested Field Access Example",
            run: optional_nested_field_access,
        },
        Section {
            title: "Process User Example",
            run: processing_a_user,
        },
        Section {
            title: "Safe Collection Handling",
            run: safe_collection_handling,
        },
        Section {
            title: "Optional Collection Handling",
            run: optional_collection_handling,
        },
        Section {
            title: "Method Chaining with Option",
            run: method_chaining,
        },
        Section {
            title: "Null-safe Equality Check",
            run: null_safe_equality,
        },
    ]
}

fn null_check() -> Vec<String> {
    let message: Option<&str> = None;
    vec![describe_message(message)]
}

fn option_combinators() -> Vec<String> {
    describe_optional_message(None)
}

fn required_value() -> Vec<String> {
    // Absent on purpose: the section shows the recovered assertion failure.
    vec![describe_required_name(None)]
}

fn zero_initialized_array() -> Vec<String> {
    vec![describe_first_element()]
}

fn nested_field_access() -> Vec<String> {
    let user = User::named("Shankar");
    vec![describe_user_name(Some(&user)), describe_user_name(None)]
}

fn optional_nested_field_access() -> Vec<String> {
    let user = User::named("Shankar Kumar");
    vec![
        describe_display_name(Some(&user)),
        describe_display_name(None),
    ]
}

fn processing_a_user() -> Vec<String> {
    let user = User::named("Shankar Kumar");
    vec![process_user(Some(&user)), process_user(None)]
}

fn safe_collection_handling() -> Vec<String> {
    let mut lines = list_items(None);
    let items = vec![
        "Apple".to_string(),
        "Banana".to_string(),
        "Cherry".to_string(),
    ];
    lines.extend(list_items(Some(&items)));
    lines
}

fn optional_collection_handling() -> Vec<String> {
    list_items_or_empty(None)
}

fn method_chaining() -> Vec<String> {
    vec![process_input(Some("HelloWorld")), process_input(Some("Hi"))]
}

fn null_safe_equality() -> Vec<String> {
    vec![
        describe_equality(Some("Shankar"), Some("Shankar")),
        describe_equality(Some("Shankar"), None),
        describe_equality(None, None),
    ]
}

/// Runs every section against the given sink.
///
/// Sections are separated by a blank line; each prints a numbered header
/// followed by the lines its runner returns. A runner returning no lines
/// contributes only its header.
pub fn run_tour(out: &mut impl Write) -> io::Result<()> {
    for (index, section) in sections().iter().enumerate() {
        if index > 0 {
            writeln!(out)?;
        }
        log::debug!("running section {}: {}", index + 1, section.title);
        let header = format!("{}. {}:", index + 1, section.title);
        writeln!(out, "{}", header.blue().bold())?;
        for line in (section.run)() {
            writeln!(out, "{}", line)?;
        }
    }
    Ok(())
}
