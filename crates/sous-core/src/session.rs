//! Per-tab session identifier.
//!
//! The identifier correlates this client's requests with the backend's
//! conversation state. It is created on first use, written to storage, and
//! returned unchanged on every later call.

use std::cell::{OnceCell, RefCell};

use crate::config::{FALLBACK_SESSION_PREFIX, FALLBACK_SUFFIX_LEN, SESSION_ID_KEY};
use crate::error::StorageError;
use crate::storage::KeyValueStorage;
use crate::time;

/// Lazily creates and persists the session identifier.
pub struct SessionManager<S> {
    storage: S,
    key: String,
    generator: fn() -> String,
    cached: OnceCell<String>,
    persist_error: RefCell<Option<StorageError>>,
}

impl<S: KeyValueStorage> SessionManager<S> {
    /// Manager storing the identifier under [`SESSION_ID_KEY`].
    pub fn new(storage: S) -> Self {
        Self::with_generator(storage, generate_session_id)
    }

    /// Manager with a custom identifier generator.
    pub fn with_generator(storage: S, generator: fn() -> String) -> Self {
        Self {
            storage,
            key: SESSION_ID_KEY.to_string(),
            generator,
            cached: OnceCell::new(),
            persist_error: RefCell::new(None),
        }
    }

    /// Return the session identifier, creating it on first call.
    ///
    /// An identifier already in storage is reused. Otherwise a new one is
    /// generated and written back. If storage fails the identifier is still
    /// returned and stays stable for this manager; the failure is available
    /// from [`take_persist_error`](Self::take_persist_error).
    pub fn session_id(&self) -> String {
        self.cached.get_or_init(|| self.load_or_create()).clone()
    }

    /// Take the storage error recorded while creating the identifier, if any.
    pub fn take_persist_error(&self) -> Option<StorageError> {
        self.persist_error.borrow_mut().take()
    }

    fn load_or_create(&self) -> String {
        match self.storage.get(&self.key) {
            Ok(Some(id)) if !id.is_empty() => return id,
            Ok(_) => {}
            Err(e) => self.record(e),
        }

        let id = (self.generator)();
        if let Err(e) = self.storage.set(&self.key, &id) {
            self.record(e);
        }
        id
    }

    fn record(&self, error: StorageError) {
        self.persist_error.borrow_mut().get_or_insert(error);
    }
}

/// Generate a fresh session identifier.
///
/// Uses a random (v4) UUID when the platform RNG works, otherwise
/// `sess-<base36 time>-<base36 random>`.
pub fn generate_session_id() -> String {
    let mut bytes = [0u8; 16];
    session_id_from_entropy(getrandom::getrandom(&mut bytes).map(|()| bytes))
}

/// Turn the RNG outcome into an identifier, falling back when it failed.
fn session_id_from_entropy(entropy: Result<[u8; 16], getrandom::Error>) -> String {
    match entropy {
        Ok(bytes) => uuid::Builder::from_random_bytes(bytes)
            .into_uuid()
            .to_string(),
        Err(_) => fallback_session_id(time::now_ms(), weak_random()),
    }
}

/// Build `sess-<base36 now_ms>-<6 base36 digits of random>`.
pub fn fallback_session_id(now_ms: u64, random: u64) -> String {
    let modulus = 36u64.pow(FALLBACK_SUFFIX_LEN as u32);
    format!(
        "{}{}-{:0>width$}",
        FALLBACK_SESSION_PREFIX,
        to_base36(now_ms),
        to_base36(random % modulus),
        width = FALLBACK_SUFFIX_LEN
    )
}

/// Encode a number in lowercase base36.
pub fn to_base36(mut n: u64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

    if n == 0 {
        return "0".to_string();
    }

    let mut buf = Vec::new();
    while n > 0 {
        buf.push(DIGITS[(n % 36) as usize]);
        n /= 36;
    }
    buf.reverse();
    String::from_utf8(buf).unwrap_or_default()
}

/// Non-cryptographic randomness for the fallback suffix.
#[cfg(target_arch = "wasm32")]
fn weak_random() -> u64 {
    (js_sys::Math::random() * 36f64.powi(FALLBACK_SUFFIX_LEN as i32)) as u64
}

/// Non-cryptographic randomness for the fallback suffix.
#[cfg(not(target_arch = "wasm32"))]
fn weak_random() -> u64 {
    use std::hash::{BuildHasher, RandomState};

    RandomState::new().hash_one(time::now_ms())
}
