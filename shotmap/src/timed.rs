//! Timing of fetches.

use std::future::Future;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, PartialEq)]
pub struct Timed<V> {
    pub value: V,
    pub elapsed: Duration,
}
impl<V> Timed<V> {
    /// Awaits a fallible future, timing it from the first poll to completion.
    pub async fn future<E>(f: impl Future<Output = Result<V, E>>) -> Result<Timed<V>, E> {
        let start_time = Instant::now();
        let value = f.await?;
        Ok(Timed {
            value,
            elapsed: start_time.elapsed(),
        })
    }
}
