//! Process-global environment mutation helpers for config tests.

use std::sync::{Mutex, OnceLock};

/// Return the process-wide lock used to serialize environment mutation.
pub fn env_lock() -> &'static Mutex<()> {
    static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    LOCK.get_or_init(|| Mutex::new(()))
}

// Newer toolchains mark env mutation `unsafe`; callers hold `env_lock`.
#[allow(unused_unsafe)]
fn apply(key: &str, value: Option<&str>) {
    unsafe {
        match value {
            Some(value) => std::env::set_var(key, value),
            None => std::env::remove_var(key),
        }
    }
}

/// Overrides a group of environment variables and restores them on drop.
pub struct EnvGuard {
    previous: Vec<(String, Option<String>)>,
}

impl EnvGuard {
    fn apply_all<'a>(changes: impl IntoIterator<Item = (&'a str, Option<&'a str>)>) -> Self {
        let mut previous = Vec::new();
        for (key, value) in changes {
            previous.push((key.to_string(), std::env::var(key).ok()));
            apply(key, value);
        }
        Self { previous }
    }

    /// Set `key=value` until the guard drops.
    pub fn set(key: &str, value: &str) -> Self {
        Self::apply_all([(key, Some(value))])
    }

    /// Set every `(key, value)` pair until the guard drops.
    pub fn set_all(pairs: &[(&str, &str)]) -> Self {
        Self::apply_all(pairs.iter().map(|(key, value)| (*key, Some(*value))))
    }

    /// Remove `key` until the guard drops.
    pub fn remove(key: &str) -> Self {
        Self::apply_all([(key, None)])
    }

    /// Remove every key until the guard drops.
    pub fn remove_all(keys: &[&str]) -> Self {
        Self::apply_all(keys.iter().map(|key| (*key, None)))
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (key, value) in self.previous.iter().rev() {
            apply(key, value.as_deref());
        }
    }
}
