//! Gather colors from a color file and from command line tokens.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, error, trace};

use crate::color::Color;
use crate::parse::ParsedColor;
use crate::{Error, Result};

/// The color file read from the working directory when none is given.
pub const DEFAULT_INPUT_FILE: &str = "colors.txt";

/// Whitespace as the C locale defines it, vertical tab included.
fn is_c_space(c: char) -> bool {
    c.is_ascii_whitespace() || c == '\x0b'
}

/// Parse a single literal, logging what happened to it.
fn parse_literal(literal: &str) -> Option<Color> {
    let parsed = ParsedColor::parse(literal);
    match parsed {
        ParsedColor::Invalid => trace!(literal, "skipping invalid color"),
        _ if parsed.is_out_of_range() => {
            debug!(literal, "color channel above 255 kept as is");
        }
        _ => trace!(literal, ?parsed, "parsed color"),
    }
    parsed.color()
}

/// Read one color per line. All whitespace in a line is removed before it is
/// parsed and lines that are not a valid color are skipped. Reading stops at
/// the first I/O error and the colors read up to that point are kept.
pub fn read_colors<R: BufRead>(reader: R) -> Vec<Color> {
    let mut colors = Vec::new();

    for line in reader.split(b'\n') {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                debug!(%err, count = colors.len(), "stopped reading colors");
                break;
            }
        };
        let literal: String = String::from_utf8_lossy(&line)
            .chars()
            .filter(|&c| !is_c_space(c))
            .collect();

        colors.extend(parse_literal(&literal));
    }

    colors
}

/// Read the colors in the file at `path`.
pub fn try_read_colors_from_file(path: impl AsRef<Path>) -> Result<Vec<Color>> {
    let path = path.as_ref();

    let file = File::open(path).map_err(|source| Error::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let colors = read_colors(BufReader::new(file));
    debug!(path = %path.display(), count = colors.len(), "read colors from file");

    Ok(colors)
}

/// Read the colors in the file at `path`. A file that can not be opened is
/// reported and treated as having no colors.
pub fn read_colors_from_file(path: impl AsRef<Path>) -> Vec<Color> {
    match try_read_colors_from_file(path) {
        Ok(colors) => colors,
        Err(err) => {
            error!("{err}");
            if let Error::Open { source, .. } = &err {
                debug!(%source, "file colors ignored");
            }
            Vec::new()
        }
    }
}

/// What the command line asked for.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Invocation {
    /// The requested mode name, if a mode flag was given.
    pub mode: Option<String>,
    /// Colors given on the command line, in order.
    pub colors: Vec<Color>,
}

impl Invocation {
    /// Scan command line tokens, without the program name.
    ///
    /// `--mode <value>` and `-m <value>` select the mode, valid color literals
    /// are collected and anything else is ignored. A mode flag with nothing
    /// after it is ignored as well.
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut invocation = Self::default();
        let mut tokens = tokens.into_iter();

        while let Some(token) = tokens.next() {
            let token = token.as_ref();

            if matches!(token, "--mode" | "-m") {
                if let Some(mode) = tokens.next() {
                    let mode = mode.as_ref().to_owned();
                    if let Some(previous) = invocation.mode.replace(mode) {
                        debug!(%previous, "mode given more than once, using the last one");
                    }
                    continue;
                }
            }

            match parse_literal(token) {
                Some(color) => invocation.colors.push(color),
                None => trace!(token, "ignoring argument"),
            }
        }

        invocation
    }
}

/// Scan the full argument list. The first token is the program name and is
/// skipped.
pub fn parse_args<I, S>(args: I) -> Invocation
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Invocation::from_tokens(args.into_iter().skip(1))
}

#[cfg(test)]
mod tests {
    use std::io::{self, Cursor, Read, Write};

    use super::*;
    use crate::test::capture_logs;

    /// Yields `data`, then fails every read after it.
    struct FailAfter {
        data: Cursor<&'static [u8]>,
    }

    impl Read for FailAfter {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            match self.data.read(buf)? {
                0 => Err(io::Error::other("device went away")),
                n => Ok(n),
            }
        }
    }

    #[test]
    fn lines_are_stripped_and_invalid_lines_skipped() {
        let input = "fff\n  00 00 00 \r\nnot a color\n\n1, 2, 3, 4\n\x0bf00\t\n1,2,3\n";
        let colors = read_colors(Cursor::new(input));
        assert_eq!(
            colors,
            vec![
                Color::new(255, 255, 255, 255),
                Color::new(0, 0, 0, 255),
                Color::new(1, 2, 3, 4),
                Color::new(255, 0, 0, 255),
            ]
        );
    }

    #[test]
    fn last_line_without_newline_is_read() {
        let colors = read_colors(Cursor::new("abc"));
        assert_eq!(colors, vec![Color::new(0xaa, 0xbb, 0xcc, 255)]);
    }

    #[test]
    fn invalid_utf8_lines_are_skipped() {
        let colors = read_colors(Cursor::new(b"\xff\xfe\n0f0\n".to_vec()));
        assert_eq!(colors, vec![Color::new(0, 255, 0, 255)]);
    }

    #[test]
    fn read_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "fff").unwrap();
        writeln!(file, "000000").unwrap();
        writeln!(file, "11223344").unwrap();

        let colors = try_read_colors_from_file(file.path()).unwrap();
        assert_eq!(
            colors,
            vec![
                Color::new(255, 255, 255, 255),
                Color::new(0, 0, 0, 255),
                Color::new(0x11, 0x22, 0x33, 0x44),
            ]
        );
        assert_eq!(read_colors_from_file(file.path()), colors);
    }

    #[test]
    fn missing_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_INPUT_FILE);

        let err = try_read_colors_from_file(&path).unwrap_err();
        assert!(matches!(err, Error::Open { .. }));
        assert_eq!(
            err.to_string(),
            format!("Unable to open file '{}'.", path.display())
        );

        let (colors, logs) = capture_logs(|| read_colors_from_file(&path));
        assert!(colors.is_empty());
        assert_eq!(
            logs,
            format!("Unable to open file '{}'.\n", path.display())
        );
    }

    #[test]
    fn readable_file_is_silent() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "fff").unwrap();

        let (colors, logs) = capture_logs(|| read_colors_from_file(file.path()));
        assert_eq!(colors, vec![Color::new(255, 255, 255, 255)]);
        assert!(logs.is_empty(), "{logs}");
    }

    #[test]
    fn read_error_keeps_colors_read_so_far() {
        let reader = BufReader::new(FailAfter {
            data: Cursor::new(&b"fff\n000000\n"[..]),
        });

        let (colors, logs) = capture_logs(|| read_colors(reader));
        assert_eq!(
            colors,
            vec![Color::new(255, 255, 255, 255), Color::new(0, 0, 0, 255)]
        );
        assert!(logs.is_empty(), "{logs}");
    }

    #[test]
    fn mode_flags_and_colors() {
        let invocation = parse_args(["colormix", "-m", "lowest", "f00", "hello", "1,2,3,4"]);
        assert_eq!(invocation.mode.as_deref(), Some("lowest"));
        assert_eq!(
            invocation.colors,
            vec![Color::new(255, 0, 0, 255), Color::new(1, 2, 3, 4)]
        );

        let invocation = Invocation::from_tokens(["--mode", "highest"]);
        assert_eq!(invocation.mode.as_deref(), Some("highest"));
        assert!(invocation.colors.is_empty());
    }

    #[test]
    fn program_name_is_never_a_color() {
        let invocation = parse_args(["fff"]);
        assert_eq!(invocation, Invocation::default());
    }

    #[test]
    fn mode_value_is_consumed_even_if_it_is_a_color() {
        let invocation = Invocation::from_tokens(["-m", "fff", "000"]);
        assert_eq!(invocation.mode.as_deref(), Some("fff"));
        assert_eq!(invocation.colors, vec![Color::new(0, 0, 0, 255)]);
    }

    #[test]
    fn trailing_mode_flag_is_ignored() {
        let invocation = Invocation::from_tokens(["abc", "--mode"]);
        assert_eq!(invocation.mode, None);
        assert_eq!(invocation.colors, vec![Color::new(0xaa, 0xbb, 0xcc, 255)]);
    }

    #[test]
    fn last_mode_wins() {
        let invocation = Invocation::from_tokens(["-m", "lowest", "--mode", "highest"]);
        assert_eq!(invocation.mode.as_deref(), Some("highest"));
    }

    #[test]
    fn tokens_are_not_stripped() {
        let invocation = Invocation::from_tokens([" fff", "1, 2, 3, 4"]);
        assert!(invocation.colors.is_empty());
    }
}
