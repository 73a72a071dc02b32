//! Interchange naming policies
//!
//! A policy derives the interchange name of every field that has no explicit
//! override. Overrides are always used verbatim.

use serde::{Deserialize, Serialize};

/// How declared field names map to interchange names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NamingPolicy {
    /// Use the declared name unchanged
    #[default]
    AsDeclared,
    /// `TemperatureC` -> `temperatureC`, `URLValue` -> `urlValue`
    CamelCase,
    /// `TemperatureC` -> `temperature_c`, `URLValue` -> `url_value`
    SnakeCase,
}

impl NamingPolicy {
    /// Apply the policy to a declared field name
    pub fn apply(&self, name: &str) -> String {
        match self {
            NamingPolicy::AsDeclared => name.to_string(),
            NamingPolicy::CamelCase => to_camel_case(name),
            NamingPolicy::SnakeCase => to_snake_case(name),
        }
    }
}

/// Lowercase the leading run of uppercase letters, keeping the last one of a
/// run upper when it starts the next word.
fn to_camel_case(name: &str) -> String {
    let mut chars: Vec<char> = name.chars().collect();
    if !chars.first().is_some_and(|c| c.is_uppercase()) {
        return name.to_string();
    }

    for i in 0..chars.len() {
        if i == 1 && !chars[i].is_uppercase() {
            break;
        }
        let next_is_upper = chars.get(i + 1).map(|c| c.is_uppercase());
        if i > 0 && next_is_upper == Some(false) {
            if chars[i + 1] == ' ' {
                chars[i] = lower(chars[i]);
            }
            break;
        }
        chars[i] = lower(chars[i]);
    }

    chars.into_iter().collect()
}

fn to_snake_case(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if c.is_uppercase() {
            let prev = i.checked_sub(1).map(|p| chars[p]);
            let next = chars.get(i + 1).copied();
            let word_start = match prev {
                None | Some('_') => false,
                Some(p) if p.is_lowercase() || p.is_ascii_digit() => true,
                Some(p) => p.is_uppercase() && next.is_some_and(|n| n.is_lowercase()),
            };
            if word_start {
                out.push('_');
            }
            out.push(lower(c));
        } else {
            out.push(c);
        }
    }

    out
}

fn lower(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}
