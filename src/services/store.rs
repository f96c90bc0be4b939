//! In-memory joke store shared by the HTTP handler and the publisher.

use rand::Rng;
use std::sync::Mutex;

/// Ordered list of generated jokes behind a single mutex.
///
/// Populated once at startup before any concurrent reader exists. The lock
/// is only held for the random draw, never across an await point.
pub struct JokeStore {
    jokes: Mutex<Vec<String>>,
}

impl JokeStore {
    pub fn new(jokes: Vec<String>) -> Self {
        Self {
            jokes: Mutex::new(jokes),
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Replace the stored jokes wholesale.
    pub fn populate(&self, jokes: Vec<String>) {
        *self.jokes.lock().expect("joke store lock poisoned") = jokes;
    }

    /// Pick a uniformly random joke, or `None` when the store is empty.
    pub fn random(&self) -> Option<String> {
        let jokes = self.jokes.lock().expect("joke store lock poisoned");
        if jokes.is_empty() {
            return None;
        }
        let index = rand::thread_rng().gen_range(0..jokes.len());
        Some(jokes[index].clone())
    }

    pub fn len(&self) -> usize {
        self.jokes.lock().expect("joke store lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
