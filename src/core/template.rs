//! printf-style message templates
//!
//! Loggers accept runtime format strings such as `"***error:'%s'"` or
//! `"Person: %v, Car: %v"`. Every `%` followed by an ASCII letter is a verb
//! that consumes the next argument; `%%` produces a literal percent sign.
//!
//! | Verb | Output |
//! |------|--------|
//! | `%q` | the argument's `Display` output, double-quoted and escaped |
//! | any other letter | the argument's `Display` output |
//!
//! Between `%` and the verb a directive may carry flags (`-`, `+`, `0`, `#`),
//! a width and a `.precision`, e.g. `%-10s`, `%05d`, `%+v` or `%.2f`. Width
//! pads to that many characters (right-aligned unless `-` is given, with
//! zeros after any sign when `0` is given). Precision is handed to the
//! argument's `Display` impl: floats round to that many decimals, strings are
//! truncated. `+` asks numbers for an explicit sign; `#` is accepted and
//! ignored. A `%` followed by anything else is copied literally.
//!
//! Mismatches never fail: a verb without an argument renders as
//! `%!v(MISSING)` and unused arguments are appended as `%!(EXTRA a, b)`.

use std::fmt::{Display, Write};
use std::iter::Peekable;
use std::str::Chars;

/// Render `template`, substituting `args` in order.
///
/// # Examples
///
/// ```
/// use rust_multi_logger::core::template::render;
///
/// let out = render("Person: %v, Car: %v", &[&"Michael", &2020]);
/// assert_eq!(out, "Person: Michael, Car: 2020");
///
/// let out = render("[%-6s|%5.1f]", &[&"disk", &97.26]);
/// assert_eq!(out, "[disk  | 97.3]");
/// ```
pub fn render(template: &str, args: &[&dyn Display]) -> String {
    let mut out = String::with_capacity(template.len() + args.len() * 8);
    let mut args_iter = args.iter();
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }

        if chars.peek() == Some(&'%') {
            chars.next();
            out.push('%');
            continue;
        }

        let (directive, raw) = Directive::parse(&mut chars);
        match chars.peek().copied() {
            Some(verb) if verb.is_ascii_alphabetic() => {
                chars.next();
                match args_iter.next() {
                    Some(arg) => directive.write(&mut out, verb, *arg),
                    None => {
                        let _ = write!(out, "%!{}(MISSING)", verb);
                    }
                }
            }
            Some(_) => {
                out.push('%');
                out.push_str(&raw);
            }
            None => out.push_str("%!(NOVERB)"),
        }
    }

    let extra: Vec<String> = args_iter.map(|arg| arg.to_string()).collect();
    if !extra.is_empty() {
        let _ = write!(out, "%!(EXTRA {})", extra.join(", "));
    }

    out
}

/// Flags, width and precision between `%` and the verb.
#[derive(Debug, Default, PartialEq, Eq)]
struct Directive {
    left_align: bool,
    plus: bool,
    zero_pad: bool,
    width: Option<usize>,
    precision: Option<usize>,
}

impl Directive {
    /// Consume everything up to the verb. Also returns the consumed text so
    /// a directive without a verb can be copied back verbatim.
    fn parse(chars: &mut Peekable<Chars<'_>>) -> (Self, String) {
        let mut directive = Directive::default();
        let mut raw = String::new();

        while let Some(&c) = chars.peek() {
            match c {
                '-' => directive.left_align = true,
                '+' => directive.plus = true,
                '0' => directive.zero_pad = true,
                '#' => {}
                _ => break,
            }
            raw.push(c);
            chars.next();
        }

        directive.width = take_number(chars, &mut raw);

        if chars.peek() == Some(&'.') {
            raw.push('.');
            chars.next();
            directive.precision = Some(take_number(chars, &mut raw).unwrap_or(0));
        }

        (directive, raw)
    }

    fn write(&self, out: &mut String, verb: char, arg: &dyn Display) {
        let mut body = match (self.plus, self.precision) {
            (false, None) => arg.to_string(),
            (true, None) => format!("{:+}", arg),
            (false, Some(precision)) => format!("{:.*}", precision, arg),
            (true, Some(precision)) => format!("{:+.*}", precision, arg),
        };
        if verb == 'q' {
            body = format!("{:?}", body);
        }

        let len = body.chars().count();
        let pad = self.width.map_or(0, |width| width.saturating_sub(len));
        if pad == 0 {
            out.push_str(&body);
        } else if self.left_align {
            out.push_str(&body);
            out.extend(std::iter::repeat(' ').take(pad));
        } else if self.zero_pad && looks_numeric(&body) {
            let digits_at = usize::from(body.starts_with(['-', '+']));
            out.push_str(&body[..digits_at]);
            out.extend(std::iter::repeat('0').take(pad));
            out.push_str(&body[digits_at..]);
        } else {
            out.extend(std::iter::repeat(' ').take(pad));
            out.push_str(&body);
        }
    }
}

fn take_number(chars: &mut Peekable<Chars<'_>>, raw: &mut String) -> Option<usize> {
    let mut value: Option<usize> = None;
    while let Some(&c) = chars.peek() {
        let Some(digit) = c.to_digit(10) else { break };
        raw.push(c);
        chars.next();
        value = Some(value.unwrap_or(0).saturating_mul(10).saturating_add(digit as usize));
    }
    value
}

fn looks_numeric(body: &str) -> bool {
    let digits = body.strip_prefix(['-', '+']).unwrap_or(body);
    digits.starts_with(|c: char| c.is_ascii_digit())
}
