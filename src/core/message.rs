//! Runtime interpolation of message templates
//!
//! Templates use `{}` for the next argument and `{N}` for the argument at
//! index `N`; `{{` and `}}` are literal braces. Interpolation never fails:
//!
//! - a placeholder without a matching argument is kept verbatim
//! - an unterminated `{` is kept verbatim
//! - arguments not consumed by any placeholder are appended as `[extra args: ..]`

use std::fmt::{self, Write};

/// Render `template` with positional `args`
///
/// # Examples
///
/// ```
/// use rust_logger_facade::core::message::interpolate;
///
/// assert_eq!(interpolate("{} of {}", &[&3, &5]), "3 of 5");
/// assert_eq!(interpolate("{1}-{0}", &[&"a", &"b"]), "b-a");
/// assert_eq!(interpolate("missing {}", &[]), "missing {}");
/// ```
pub fn interpolate(template: &str, args: &[&dyn fmt::Display]) -> String {
    if args.is_empty() {
        return template.to_string();
    }

    let mut out = String::with_capacity(template.len() + args.len() * 8);
    let mut used = vec![false; args.len()];
    let mut next = 0usize;
    let mut rest = template;

    while let Some(pos) = rest.find(['{', '}']) {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];

        if tail.starts_with("{{") {
            out.push('{');
            rest = &tail[2..];
            continue;
        }
        if tail.starts_with("}}") {
            out.push('}');
            rest = &tail[2..];
            continue;
        }
        if tail.starts_with('}') {
            out.push('}');
            rest = &tail[1..];
            continue;
        }

        let Some(close) = tail.find('}') else {
            out.push_str(tail);
            rest = "";
            break;
        };

        let placeholder = &tail[..=close];
        let inner = &tail[1..close];
        let index = if inner.is_empty() {
            let index = next;
            next += 1;
            Some(index)
        } else {
            inner.trim().parse::<usize>().ok()
        };

        match index.and_then(|i| args.get(i).map(|arg| (i, arg))) {
            Some((i, arg)) => {
                // Writing into a String cannot fail
                let _ = write!(out, "{}", arg);
                used[i] = true;
            }
            None => out.push_str(placeholder),
        }
        rest = &tail[close + 1..];
    }
    out.push_str(rest);

    let extras: Vec<String> = args
        .iter()
        .zip(&used)
        .filter(|(_, used)| !**used)
        .map(|(arg, _)| arg.to_string())
        .collect();
    if !extras.is_empty() {
        let _ = write!(out, " [extra args: {}]", extras.join(", "));
    }

    out
}
