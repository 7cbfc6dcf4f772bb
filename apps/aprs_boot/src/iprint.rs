//! Numbered enumeration of diagnostic sequences
//!
//! Prints every element of a sequence prefixed with its 1-based position,
//! each followed by a blank line, then a `"<n> element(s)"` summary:
//!
//! ```text
//! 1 A
//!
//! 2 B
//!
//! 2 element(s)
//! ```
//!
//! The sequence is consumed as it is printed and is never bounded. Passing an
//! endless iterator (`std::iter::repeat`, a live sensor stream, ...) means the
//! call never returns and has to be interrupted by the operator.

use std::fmt::{self, Write as _};
use std::io::{self, Write};

/// Label printed after the final count, identical for every count
pub const COUNT_LABEL: &str = "element(s)";

/// Write the numbered listing of `items` to `out`.
///
/// Returns the number of elements written. An element whose `Display`
/// implementation fails aborts the listing with the resulting I/O error.
///
/// Never returns if `items` is unbounded.
pub fn iprint_to<W, I>(out: &mut W, items: I) -> io::Result<usize>
where
    W: Write + ?Sized,
    I: IntoIterator,
    I::Item: fmt::Display,
{
    let mut count = 0usize;
    let mut line = String::new();
    for item in items {
        count += 1;
        line.clear();
        write!(line, "{} {}", count, item).map_err(|_| {
            let msg = format!("element {} could not be rendered", count);
            io::Error::new(io::ErrorKind::InvalidData, msg)
        })?;
        writeln!(out, "{}", line)?;
        writeln!(out)?;
    }
    writeln!(out, "{} {}", count, COUNT_LABEL)?;
    Ok(count)
}

/// Print the numbered listing of `items` on the console.
///
/// Stdout is held for the whole pass. Any write or rendering failure is
/// fatal and panics.
///
/// Never returns if `items` is unbounded.
pub fn iprint<I>(items: I)
where
    I: IntoIterator,
    I::Item: fmt::Display,
{
    let stdout = io::stdout();
    let mut console = stdout.lock();
    iprint_or_abort(&mut console, items);
}

fn iprint_or_abort<W, I>(console: &mut W, items: I)
where
    W: Write + ?Sized,
    I: IntoIterator,
    I::Item: fmt::Display,
{
    if let Err(e) = iprint_to(console, items).and_then(|_| console.flush()) {
        panic!("diagnostic console write failed: {}", e);
    }
}

/// A record rendered as `"<label>: <value>"`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Labeled<L, V>(pub L, pub V);

impl<L: fmt::Display, V: fmt::Display> fmt::Display for Labeled<L, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.0, self.1)
    }
}
