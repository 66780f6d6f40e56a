//! Line and file helpers shared by the protocol loop and the side channels.
//!
//! ## Error Handling
//!
//! Unlike interactive prompts, a failed read on the protocol stream cannot be
//! shrugged off: the engine would wait forever. Read errors are therefore
//! returned to the caller instead of being folded into end-of-input.
//! Bytes that are not UTF-8 are not a stream failure; they are replaced with
//! U+FFFD and the line is left for the parser to classify.

use std::io::BufRead;

/// Reads one protocol line, blocking until available.
///
/// The trailing `\n` (and a `\r` before it) is removed; everything else is
/// kept verbatim so it can be written to the transcript unchanged.
///
/// # Returns
///
/// * `Ok(Some(String))` - One line without its terminator
/// * `Ok(None)` - End of input
/// * `Err(io::Error)` - The stream failed
///
/// # Example
///
/// ```rust
/// use std::io::Cursor;
/// # use acefive_cli::io_utils::read_protocol_line;
///
/// let mut input = Cursor::new("play? 12 4\r\nbye\n");
/// assert_eq!(read_protocol_line(&mut input).unwrap(), Some("play? 12 4".to_string()));
/// assert_eq!(read_protocol_line(&mut input).unwrap(), Some("bye".to_string()));
/// assert_eq!(read_protocol_line(&mut input).unwrap(), None);
/// ```
pub fn read_protocol_line(input: &mut dyn BufRead) -> std::io::Result<Option<String>> {
    let mut buf = Vec::new();
    if input.read_until(b'\n', &mut buf)? == 0 {
        return Ok(None);
    }
    if buf.last() == Some(&b'\n') {
        buf.pop();
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
    }
    Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
}

/// Ensure parent directory exists for given path, creating if needed.
///
/// # Example
///
/// ```rust,no_run
/// use std::path::Path;
/// # use acefive_cli::io_utils::ensure_parent_dir;
///
/// let path = Path::new("logs/session/transcript.txt");
/// ensure_parent_dir(path).unwrap();
/// ```
pub fn ensure_parent_dir(path: &std::path::Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }
    Ok(())
}
