use std::{
    collections::HashMap,
    sync::{LazyLock, RwLock},
    thread::{self, ThreadId},
};

use miette::{miette, Result};

static ENV_VARS: LazyLock<RwLock<HashMap<(ThreadId, String), String>>> =
    LazyLock::new(|| RwLock::new(HashMap::new()));

/// Test harness function for getting env variables. Vars are keyed
/// per-thread so parallel tests can't trample each other's setup.
///
/// # Errors
/// Will error if the env variable doesn't exist.
pub fn get_env_var<S>(key: S) -> Result<String>
where
    S: AsRef<str>,
{
    fn inner(key: &str) -> Result<String> {
        let thr_id = thread::current().id();

        let env_vars = ENV_VARS.read().unwrap();

        env_vars
            .get(&(thr_id, crate::string!(key)))
            .map(ToOwned::to_owned)
            .ok_or_else(|| miette!("Failed to retrieve env var '{key}'"))
    }
    inner(key.as_ref())
}

pub fn set_env_var<S, T>(key: S, value: T)
where
    S: AsRef<str>,
    T: AsRef<str>,
{
    fn inner(key: &str, value: &str) {
        let thr_id = thread::current().id();

        ENV_VARS
            .write()
            .unwrap()
            .insert((thr_id, crate::string!(key)), crate::string!(value));
    }
    inner(key.as_ref(), value.as_ref());
}
