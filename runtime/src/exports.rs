//! The exported C call surface.
//!
//! These are the symbols the code generator's output links against. Every
//! printing function returns its argument unchanged, so generated code can
//! splice a call in wherever the operand itself is needed. Stream failures
//! never cross this boundary: they are logged at debug level and the call
//! completes as if it had succeeded.
//!
//! `printint`/`printintln` are alternate linkage names for `print`/`println`
//! and delegate to them directly, so the two surfaces cannot drift apart.

use std::io::{self, Stdin, Stdout};
use std::sync::{Mutex, MutexGuard, Once, OnceLock, PoisonError};

use log::{debug, Level};
use rtlog::RuntimeLogger;

use crate::console::Console;

/// Environment variable consulted for the log level on the first runtime call.
pub const LOG_LEVEL_VAR: &str = "RUNTIME_LOG";

/// Returned by [`readchar`] when no character could be read. The exported
/// contract leaves this value unspecified; callers must not rely on it.
const NO_CHARACTER: i64 = -1;

static LOGGER: RuntimeLogger = RuntimeLogger::new(Level::Warn);

static CONSOLE: OnceLock<Mutex<Console<Stdin, Stdout>>> = OnceLock::new();

/// Locks the process-wide console, running one-time setup on the first call.
fn console() -> MutexGuard<'static, Console<Stdin, Stdout>> {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        if LOGGER.install().is_ok() {
            if let Some(level) = rtlog::level_from_env(LOG_LEVEL_VAR) {
                LOGGER.update_log_level(level);
            }
        }
    });

    CONSOLE
        .get_or_init(|| Mutex::new(Console::new(io::stdin(), io::stdout())))
        .lock()
        // the console must stay reachable even after a panic elsewhere
        .unwrap_or_else(PoisonError::into_inner)
}

/// Writes the decimal form of `c` to standard output and returns `c`.
#[no_mangle]
pub extern "C" fn print(c: i64) -> i64 {
    if let Err(err) = console().print_int(c) {
        debug!("Could not print {}: {}", c, err);
    }
    c
}

/// Writes the decimal form of `c` followed by a newline and returns `c`.
#[no_mangle]
pub extern "C" fn println(c: i64) -> i64 {
    if let Err(err) = console().print_int_line(c) {
        debug!("Could not print {}: {}", c, err);
    }
    c
}

/// Writes the character whose code point is `c`, truncated to 8 bits, and
/// returns `c`.
#[no_mangle]
pub extern "C" fn printchar(c: i64) -> i64 {
    if let Err(err) = console().print_char(c) {
        debug!("Could not print character {}: {}", c, err);
    }
    c
}

/// Writes the character whose code point is `c`, truncated to 8 bits,
/// followed by a newline, and returns `c`.
#[no_mangle]
pub extern "C" fn printcharln(c: i64) -> i64 {
    if let Err(err) = console().print_char_line(c) {
        debug!("Could not print character {}: {}", c, err);
    }
    c
}

/// Alternate linkage name for [`print`].
#[no_mangle]
pub extern "C" fn printint(c: i64) -> i64 {
    print(c)
}

/// Alternate linkage name for [`println`].
#[no_mangle]
pub extern "C" fn printintln(c: i64) -> i64 {
    println(c)
}

/// Skips leading whitespace on standard input, consumes one character and
/// returns its code point.
///
/// When the input stream is exhausted there is no character to return and
/// the result is unspecified; the current implementation yields `-1`, but
/// callers must not depend on that.
#[no_mangle]
pub extern "C" fn readchar() -> i64 {
    match console().read_char() {
        Ok(code) => code,
        Err(err) => {
            debug!("Could not read a character: {}", err);
            NO_CHARACTER
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_printing_exports_return_the_argument() {
        assert_eq!(print(17), 17);
        assert_eq!(println(-3), -3);
        assert_eq!(printchar(0x0a), 0x0a);
        assert_eq!(printcharln(0x2e), 0x2e);
    }

    #[test]
    fn test_alternate_names_agree_with_the_canonical_ones() {
        assert_eq!(printint(9000), print(9000));
        assert_eq!(printintln(-9000), println(-9000));
    }
}
