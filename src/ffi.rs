//! C entry point, so the static library can stand in for `libcowsay.a`.
//!
//! ```c
//! void cowsay(const char *message);
//! ```

use std::ffi::{CStr, c_char};
use std::io::{self, Write};

use crate::say::write_cowsay_bytes;

/// Print `message` in a bubble followed by the cow.
///
/// The bytes are written as given and the border is sized by their count,
/// matching the `strlen`/`printf` output of the C version. A NULL `message`
/// prints nothing. Write failures are dropped since the C signature has no
/// way to report them.
///
/// # Safety
///
/// `message` must be NULL or point to a NUL-terminated string that stays
/// valid and unmodified for the duration of the call.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn cowsay(message: *const c_char) {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    // SAFETY: forwarded caller contract.
    let _ = unsafe { write_c(&mut out, message) }.and_then(|()| out.flush());
}

/// Writer-generic body of [`cowsay`].
///
/// # Safety
///
/// Same contract as [`cowsay`].
unsafe fn write_c<W: Write>(out: &mut W, message: *const c_char) -> io::Result<()> {
    if message.is_null() {
        return Ok(());
    }
    // SAFETY: non-null and NUL-terminated per the caller contract.
    let message = unsafe { CStr::from_ptr(message) };
    write_cowsay_bytes(out, message.to_bytes())
}
