use std::ffi::CString;
use std::io;
use std::os::unix::ffi::OsStrExt;
use std::path::Path;

use libc::c_int;

/// Checks `path` against the access `mode` of the calling process, as `access(2)` does.
pub fn access(path: &Path, mode: c_int) -> io::Result<()> {
    let c_path = CString::new(path.as_os_str().as_bytes())
        .map_err(|_| io::Error::from(io::ErrorKind::InvalidInput))?;

    // SAFETY: c_path is a valid nul-terminated string that outlives the call.
    match unsafe { libc::access(c_path.as_ptr(), mode) } {
        0 => Ok(()),
        _ => Err(io::Error::last_os_error()),
    }
}
