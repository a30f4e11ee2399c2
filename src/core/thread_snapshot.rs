//! State of the calling thread at the moment of a log call

use std::thread;

/// Name the standard library gives to the main thread, used only where the
/// platform offers no main-thread query
#[cfg(not(any(target_os = "linux", target_vendor = "apple")))]
const MAIN_THREAD_NAME: &str = "main";

/// Point-in-time description of a thread
///
/// `cancelled` and `finished` can never be observed from the calling thread
/// itself; they exist so snapshots taken elsewhere can still be rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThreadSnapshot {
    pub stack_size: usize,
    pub priority: i32,
    pub name: Option<String>,
    pub cancelled: bool,
    pub executing: bool,
    pub finished: bool,
    pub main_thread: bool,
}

impl ThreadSnapshot {
    /// Capture the calling thread
    pub fn current() -> Self {
        let current = thread::current();
        let name = current.name().map(String::from);
        let main_thread = platform::is_main_thread(name.as_deref());

        Self {
            stack_size: platform::stack_size(),
            priority: platform::priority(),
            name,
            cancelled: false,
            executing: true,
            finished: false,
            main_thread,
        }
    }
}

#[cfg(target_os = "linux")]
mod platform {
    pub fn stack_size() -> usize {
        // SAFETY: the attribute object is initialised by pthread_getattr_np
        // and destroyed before returning; pthread_self is always valid.
        unsafe {
            let mut attr: libc::pthread_attr_t = std::mem::zeroed();
            if libc::pthread_getattr_np(libc::pthread_self(), &mut attr) != 0 {
                return 0;
            }
            let mut size: libc::size_t = 0;
            let rc = libc::pthread_attr_getstacksize(&attr, &mut size);
            libc::pthread_attr_destroy(&mut attr);
            if rc == 0 {
                size
            } else {
                0
            }
        }
    }

    pub fn priority() -> i32 {
        super::unix_priority()
    }

    /// The main thread's kernel thread id equals the process id
    pub fn is_main_thread(_name: Option<&str>) -> bool {
        // SAFETY: gettid and getpid take no arguments and cannot fail.
        unsafe { libc::syscall(libc::SYS_gettid) == libc::c_long::from(libc::getpid()) }
    }
}

#[cfg(target_vendor = "apple")]
mod platform {
    pub fn stack_size() -> usize {
        // SAFETY: pthread_self is always a valid handle for the calling thread.
        unsafe { libc::pthread_get_stacksize_np(libc::pthread_self()) }
    }

    pub fn priority() -> i32 {
        super::unix_priority()
    }

    pub fn is_main_thread(_name: Option<&str>) -> bool {
        // SAFETY: pthread_main_np only inspects the calling thread.
        unsafe { libc::pthread_main_np() != 0 }
    }
}

#[cfg(all(unix, not(target_os = "linux"), not(target_vendor = "apple")))]
mod platform {
    pub fn stack_size() -> usize {
        0
    }

    pub fn priority() -> i32 {
        super::unix_priority()
    }

    pub fn is_main_thread(name: Option<&str>) -> bool {
        name == Some(super::MAIN_THREAD_NAME)
    }
}

#[cfg(not(unix))]
mod platform {
    pub fn stack_size() -> usize {
        0
    }

    pub fn priority() -> i32 {
        0
    }

    pub fn is_main_thread(name: Option<&str>) -> bool {
        name == Some(super::MAIN_THREAD_NAME)
    }
}

#[cfg(unix)]
fn unix_priority() -> i32 {
    // SAFETY: both out-pointers refer to live locals.
    unsafe {
        let mut policy: libc::c_int = 0;
        let mut param: libc::sched_param = std::mem::zeroed();
        if libc::pthread_getschedparam(libc::pthread_self(), &mut policy, &mut param) == 0 {
            param.sched_priority
        } else {
            0
        }
    }
}
