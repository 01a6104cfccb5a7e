//! Minimal structured view of a CSS `transform` value.
//!
//! Only enough parsing to swap one function while leaving the others intact: each
//! entry keeps its name and raw argument text.

use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransformFunction {
    pub name: String,
    pub args: String,
}

impl fmt::Display for TransformFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.name, self.args)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TransformList {
    functions: Vec<TransformFunction>,
    /// Trailing text that did not parse as functions, kept verbatim at the end.
    tail: String,
}

impl TransformList {
    pub fn parse(value: &str) -> Self {
        let mut functions = Vec::new();
        let mut tail = String::new();
        let mut rest = value.trim();

        while !rest.is_empty() {
            match split_function(rest) {
                Some((func, after)) => {
                    functions.push(func);
                    rest = after.trim_start();
                }
                None => {
                    // Give up on the remainder; keep it untouched.
                    tail = rest.to_string();
                    break;
                }
            }
        }

        if tail == "none" {
            tail.clear();
        }
        Self { functions, tail }
    }

    pub fn functions(&self) -> &[TransformFunction] {
        &self.functions
    }

    pub fn get(&self, name: &str) -> Option<&TransformFunction> {
        self.functions.iter().find(|f| f.name == name)
    }

    /// Replaces every function called `name`, or appends one if none exists.
    pub fn set(&mut self, name: &str, args: String) {
        let mut found = false;
        for f in self.functions.iter_mut().filter(|f| f.name == name) {
            f.args = args.clone();
            found = true;
        }
        if !found {
            self.functions.push(TransformFunction {
                name: name.to_string(),
                args,
            });
        }
    }

    pub fn set_translate3d(&mut self, x: f64, y: f64) {
        self.set(
            "translate3d",
            format!("{}px,{}px,0px", crate::util::fmt_px(x), crate::util::fmt_px(y)),
        );
    }
}

impl fmt::Display for TransformList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for func in &self.functions {
            if !first {
                f.write_str(" ")?;
            }
            write!(f, "{}", func)?;
            first = false;
        }
        if !self.tail.is_empty() {
            if !first {
                f.write_str(" ")?;
            }
            f.write_str(&self.tail)?;
        }
        Ok(())
    }
}

fn split_function(input: &str) -> Option<(TransformFunction, &str)> {
    let open = input.find('(')?;
    let name = input[..open].trim();
    if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
        return None;
    }
    let mut depth = 0usize;
    for (i, c) in input[open..].char_indices() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    let close = open + i;
                    let func = TransformFunction {
                        name: name.to_string(),
                        args: input[open + 1..close].to_string(),
                    };
                    return Some((func, &input[close + 1..]));
                }
            }
            _ => {}
        }
    }
    None
}
