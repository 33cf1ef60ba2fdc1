use std::{
    sync::{Arc, Mutex},
    thread,
};

/// Poison `mutex` by panicking on another thread while holding its lock.
#[track_caller]
pub(crate) fn poison_lock<T: Send + 'static>(mutex: &Arc<Mutex<T>>) {
    let mutex = Arc::clone(mutex);

    let result = thread::spawn(move || {
        let _guard = mutex.lock().unwrap();
        panic!("panicking while holding the lock");
    })
    .join();

    assert!(result.is_err(), "want the locking thread to panic");
}
