use std::io::{self, Read, Write};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("The input stream was exhausted before a character could be read")]
    EndOfInput,
    #[error("The stream could not be accessed")]
    Io(#[from] io::Error),
}

/// Both console streams bundled into a single handle.
///
/// All operations act on this pair; the process-wide instance wraps the
/// process's standard input and output while tests substitute in-memory
/// streams. Every printing method flushes before returning, since the host
/// executable may terminate without running any teardown of ours, and
/// returns its argument unchanged so a call can stand in for its operand
/// in generated code.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: Read, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writes the decimal form of `value`, without a trailing newline.
    pub fn print_int(&mut self, value: i64) -> Result<i64, ConsoleError> {
        write!(self.output, "{}", value)?;
        self.output.flush()?;
        Ok(value)
    }

    /// Writes the decimal form of `value` followed by a newline.
    pub fn print_int_line(&mut self, value: i64) -> Result<i64, ConsoleError> {
        writeln!(self.output, "{}", value)?;
        self.output.flush()?;
        Ok(value)
    }

    /// Writes the single byte `value` truncates to.
    ///
    /// Values outside the 8-bit range are truncated, not rejected; the
    /// returned value is still the untruncated argument.
    pub fn print_char(&mut self, value: i64) -> Result<i64, ConsoleError> {
        self.output.write_all(&[value as u8])?;
        self.output.flush()?;
        Ok(value)
    }

    /// Writes the single byte `value` truncates to, followed by a newline.
    pub fn print_char_line(&mut self, value: i64) -> Result<i64, ConsoleError> {
        self.output.write_all(&[value as u8, b'\n'])?;
        self.output.flush()?;
        Ok(value)
    }

    /// Skips leading whitespace on the input stream, then consumes one byte
    /// and returns its value.
    ///
    /// Bytes are read one at a time so the stream is left positioned
    /// immediately after the consumed character.
    pub fn read_char(&mut self) -> Result<i64, ConsoleError> {
        let mut byte = [0u8; 1];
        loop {
            let n = match self.input.read(&mut byte) {
                Ok(n) => n,
                Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
                Err(err) => return Err(err.into()),
            };
            if n == 0 {
                return Err(ConsoleError::EndOfInput);
            }
            if !is_scan_whitespace(byte[0]) {
                return Ok(i64::from(byte[0]));
            }
        }
    }
}

// the whitespace set of a C formatted scan, which unlike
// `u8::is_ascii_whitespace` includes vertical tab
fn is_scan_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | 0x0b | 0x0c | b'\r')
}
