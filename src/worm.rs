use std::io;

use libc::{c_int, pid_t};
use tracing::warn;

/// Number of chains the entry point starts.
pub const CHAINS: usize = 2;
/// Depth passed to `worm` for each chain.
pub const DEPTH: i32 = 3;

enum Fork {
    Parent(pid_t),
    Child,
}

fn fork() -> io::Result<Fork> {
    match unsafe { libc::fork() } {
        -1 => Err(io::Error::last_os_error()),
        0 => Ok(Fork::Child),
        pid => Ok(Fork::Parent(pid)),
    }
}

fn detach() {
    if unsafe { libc::setsid() } == -1 {
        warn!(error = %io::Error::last_os_error(), "setsid");
    }
}

/// Session leader side of the double fork: wait for the one child, then leave
/// without running atexit handlers or flushing anything inherited.
fn discard_leader(child: Option<pid_t>) -> ! {
    if let Some(pid) = child {
        let mut status: c_int = 0;
        unsafe {
            libc::waitpid(pid, &mut status, 0);
        }
    }
    unsafe { libc::_exit(0) }
}

/// Grow a chain of detached processes `depth - 1` double forks long.
///
/// The caller always returns. Every final descendant also returns once its
/// own recursion bottoms out, so it carries on with whatever the caller does
/// next, as a forked copy of the caller would.
pub fn worm(depth: i32) {
    let depth = depth.saturating_sub(1);
    if depth <= 0 {
        return;
    }

    match fork() {
        Ok(Fork::Child) => {}
        Ok(Fork::Parent(_)) => return,
        Err(err) => {
            warn!(error = %err, "fork");
            return;
        }
    }

    detach();

    match fork() {
        Ok(Fork::Child) => worm(depth),
        Ok(Fork::Parent(pid)) => discard_leader(Some(pid)),
        Err(err) => {
            warn!(error = %err, "fork");
            discard_leader(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ptr;

    fn has_children() -> bool {
        unsafe { libc::waitpid(-1, ptr::null_mut(), libc::WNOHANG) != -1 }
    }

    #[test]
    fn shallow_depths_do_not_fork() {
        for depth in [i32::MIN, -1, 0, 1] {
            worm(depth);
        }
        assert!(!has_children());
    }
}
