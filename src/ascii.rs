//! The cow drawn under every speech bubble.
//!
//! Five fixed lines, printed the same way each time regardless of the
//! message. Stored without line terminators; the writers add `\n`.

use std::io::{self, Write};

pub const COW: &[&str] = &[
    r#"        \   ^__^"#,
    r#"         \  (oo)\_______"#,
    r#"            (__)\       )\/\"#,
    r#"                ||----w |"#,
    r#"                ||     ||"#,
];

/// Write the cow to `out`, one `\n`-terminated line per entry of [`COW`].
pub fn write_cow<W: Write>(out: &mut W) -> io::Result<()> {
    for line in COW.iter() {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

/// Print the cow to stdout.
pub fn print_cow() -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_cow(&mut out)?;
    out.flush()
}
