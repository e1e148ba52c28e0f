// MIT/Apache2 License

//! Interpreter for the path-data mini language.
//!
//! The grammar is the familiar one: a command letter followed by groups of
//! numbers. `M`, `L`, `H`, `V`, `C`, `S`, `Q`, `T` and `Z` are supported,
//! each with a lowercase relative form. Parsing is lenient. Unknown letters
//! and incomplete number groups are skipped without emitting any geometry.

use super::{ParsedPath, PathBuilder};
use crate::geometry::Vector;
use once_cell::sync::Lazy;
use regex::Regex;

/// A command letter and everything up to the next one. `e` and `E` belong to exponents.
static COMMAND: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[A-DF-Za-df-z][^A-DF-Za-df-z]*").expect("command pattern is valid")
});

static NUMBER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?").expect("number pattern is valid")
});

/// Parse path data into points and links, storing points stretched by the given scale factors.
pub fn parse(data: &str, scale_x: f64, scale_y: f64) -> ParsedPath {
    let mut builder = PathBuilder::with_scale(scale_x, scale_y);

    for token in COMMAND.find_iter(data) {
        let token = token.as_str();
        let command = match token.chars().next() {
            Some(command) => command,
            None => continue,
        };

        let numbers: Vec<f64> = NUMBER
            .find_iter(&token[command.len_utf8()..])
            .filter_map(|number| number.as_str().parse().ok())
            .collect();

        apply(&mut builder, command, &numbers);
    }

    builder.finish()
}

/// Number of values each group of a command consumes.
#[inline]
fn arity(command: char) -> Option<usize> {
    match command.to_ascii_uppercase() {
        'Z' => Some(0),
        'H' | 'V' => Some(1),
        'M' | 'L' | 'T' => Some(2),
        'S' | 'Q' => Some(4),
        'C' => Some(6),
        _ => None,
    }
}

fn apply(builder: &mut PathBuilder, command: char, numbers: &[f64]) {
    let arity = match arity(command) {
        Some(arity) => arity,
        None => {
            log::trace!("Skipping unknown path command {:?}", command);
            return;
        }
    };

    if arity == 0 {
        builder.close();
        return;
    }

    if numbers.is_empty() {
        log::trace!("Skipping path command {:?} with no arguments", command);
        return;
    }

    let relative = command.is_ascii_lowercase();

    for (index, group) in numbers.chunks(arity).enumerate() {
        if group.len() < arity {
            log::trace!(
                "Skipping incomplete argument group {:?} for path command {:?}",
                group,
                command
            );
            continue;
        }

        let origin = if relative {
            builder.cursor()
        } else {
            Vector::ZERO
        };
        let at = |i: usize| origin + Vector::new(group[i], group[i + 1]);

        match command.to_ascii_uppercase() {
            // pairs after the first are implicit line-tos
            'M' if index == 0 => {
                builder.move_to(at(0));
            }
            'M' | 'L' => {
                builder.line_to(at(0));
            }
            'H' => {
                let cursor = builder.cursor();
                builder.line_to(Vector::new(origin.x + group[0], cursor.y));
            }
            'V' => {
                let cursor = builder.cursor();
                builder.line_to(Vector::new(cursor.x, origin.y + group[0]));
            }
            'C' => {
                builder.cubic_to(at(0), at(2), at(4));
            }
            'S' => {
                builder.smooth_cubic_to(at(0), at(2));
            }
            'Q' => {
                builder.quadratic_to(at(0), at(2));
            }
            'T' => {
                builder.smooth_quadratic_to(at(0));
            }
            _ => {}
        }
    }
}
