//! Speech bubble rendering.
//!
//! A bubble is a border, the message wrapped in `< ` / ` >`, and the same
//! border again. The cow from [`crate::ascii`] follows it.

use std::io::{self, Write};

use crate::ascii::write_cow;

/// Length of `message` as used to size the border.
///
/// Counted in chars rather than bytes so that non-ASCII text gets a border
/// matching what a terminal shows. For ASCII both are equal.
pub fn message_len(message: &str) -> usize {
    message.chars().count()
}

/// A border line for a message of `len` chars, without the line terminator.
pub fn border(len: usize) -> String {
    format!(" {}", "-".repeat(len + 2))
}

/// Write a border line for a message of `len` chars, with its `\n`.
pub fn write_border<W: Write>(out: &mut W, len: usize) -> io::Result<()> {
    writeln!(out, "{}", border(len))
}

/// Print a border line for a message of `len` chars to stdout.
pub fn print_border(len: usize) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_border(&mut out, len)?;
    out.flush()
}

/// Write the full bubble followed by the cow.
pub fn write_cowsay<W: Write>(out: &mut W, message: &str) -> io::Result<()> {
    write_bubble(out, message.as_bytes(), message_len(message))
}

/// Write the bubble and cow for raw bytes, passed through untouched.
///
/// The border is sized by byte count, the way C `strlen` measures it.
pub fn write_cowsay_bytes<W: Write>(out: &mut W, message: &[u8]) -> io::Result<()> {
    write_bubble(out, message, message.len())
}

fn write_bubble<W: Write>(out: &mut W, message: &[u8], len: usize) -> io::Result<()> {
    write_border(out, len)?;
    out.write_all(b"< ")?;
    out.write_all(message)?;
    out.write_all(b" >\n")?;
    write_border(out, len)?;
    write_cow(out)
}

/// Print the bubble and cow to stdout.
///
/// Stdout stays locked for the whole block so lines from concurrent callers
/// do not interleave.
pub fn cowsay(message: &str) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_cowsay(&mut out, message)?;
    out.flush()
}

/// Render the bubble and cow into an owned string.
pub fn render(message: &str) -> String {
    let mut buf = Vec::new();
    // Writing into a Vec cannot fail.
    let _ = write_cowsay(&mut buf, message);
    String::from_utf8_lossy(&buf).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ascii::COW;
    use rstest::rstest;

    #[rstest]
    #[case(0, " --")]
    #[case(1, " ---")]
    #[case(5, " -------")]
    fn border_has_len_plus_two_dashes(#[case] len: usize, #[case] expected: &str) {
        assert_eq!(border(len), expected);
    }

    #[rstest]
    #[case("Hello")]
    #[case("")]
    #[case("moo moo")]
    #[case("héllo wörld")]
    #[case("  padded  ")]
    fn bubble_lines_follow_the_message(#[case] message: &str) {
        let out = render(message);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3 + COW.len());

        let expected_border = format!(" {}", "-".repeat(message.chars().count() + 2));
        assert_eq!(lines[0], expected_border);
        assert_eq!(lines[2], expected_border);
        assert_eq!(lines[1], format!("< {} >", message));
        assert_eq!(&lines[3..], COW);
        assert!(out.ends_with('\n'));
    }

    #[test]
    fn hello_renders_exactly() {
        let expected = concat!(
            " -------\n",
            "< Hello >\n",
            " -------\n",
            "        \\   ^__^\n",
            "         \\  (oo)\\_______\n",
            "            (__)\\       )\\/\\\n",
            "                ||----w |\n",
            "                ||     ||\n",
        );
        assert_eq!(render("Hello"), expected);
    }

    #[test]
    fn empty_message_gets_two_dash_border() {
        let out = render("");
        assert!(out.starts_with(" --\n<  >\n --\n"));
    }

    #[test]
    fn repeated_writes_concatenate_identical_blocks() {
        let mut buf = Vec::new();
        write_cowsay(&mut buf, "twice").unwrap();
        write_cowsay(&mut buf, "twice").unwrap();
        let single = render("twice");
        assert_eq!(String::from_utf8(buf).unwrap(), format!("{single}{single}"));
    }

    #[test]
    fn bytes_are_written_verbatim_and_sized_by_byte_count() {
        let mut buf = Vec::new();
        write_cowsay_bytes(&mut buf, b"caf\xe9").unwrap();
        let mut expected = b" ------\n< caf\xe9 >\n ------\n".to_vec();
        write_cow(&mut expected).unwrap();
        assert_eq!(buf, expected);
    }

    #[test]
    fn str_and_bytes_paths_differ_only_in_border_for_non_ascii() {
        let mut bytes = Vec::new();
        write_cowsay_bytes(&mut bytes, "héllo".as_bytes()).unwrap();
        let bytes = String::from_utf8(bytes).unwrap();
        assert!(bytes.starts_with(" --------\n< héllo >\n --------\n"));
        assert!(render("héllo").starts_with(" -------\n< héllo >\n -------\n"));
    }

    #[test]
    fn print_border_writes_to_stdout() {
        print_border(3).unwrap();
    }

    #[test]
    fn write_errors_propagate() {
        struct Broken;
        impl Write for Broken {
            fn write(&mut self, _: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }
        let err = write_cowsay(&mut Broken, "moo").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}
