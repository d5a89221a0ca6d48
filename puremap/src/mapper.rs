use std::num::NonZeroUsize;
use std::sync::Arc;

use futures::future;
use thiserror::Error;
use tracing::debug;

/// Error raised by the fallible mapping entry points.
///
/// Mapping is fail-fast: the first element failure aborts the whole
/// operation and no partial output is observable.
#[derive(Debug, Error)]
pub enum MapError<E> {
    /// The mapped function failed for the element at `index`.
    #[error("mapping failed at element {index}")]
    Element {
        index: usize,
        #[source]
        source: E,
    },
    /// A chunk worker could not be joined.
    #[error("mapping worker failed")]
    Worker(#[from] tokio::task::JoinError),
}

/// Apply `f` to every element in order, on the calling thread.
pub fn map_sequential<A, B>(items: Vec<A>, f: impl FnMut(A) -> B) -> Vec<B> {
    items.into_iter().map(f).collect()
}

/// Apply a fallible `f` to every element in order, stopping at the first
/// failure and reporting which element triggered it.
pub fn try_map_sequential<A, B, E>(
    items: Vec<A>,
    mut f: impl FnMut(A) -> Result<B, E>,
) -> Result<Vec<B>, MapError<E>> {
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| f(item).map_err(|source| MapError::Element { index, source }))
        .collect()
}

/// Apply a pure `f` to every element via chunked scatter-gather workers,
/// preserving input order in the output.
///
/// The input is split into chunks of `chunk_size` elements (`0` is treated
/// as `1`), each chunk is dispatched to an independent worker task, and the
/// caller waits for every worker before concatenating the chunk outputs in
/// their original order. Each worker hands back a fully materialized vector,
/// never a lazy view. Workers share nothing, so the output is identical to
/// [`map_sequential`] for any pure `f` and any chunk size.
///
/// Purity of `f` is a caller obligation: the `Fn + Send + Sync` bounds keep
/// shared mutable capture out, but effects are not detectable here. If `f`
/// panics, the panic is resumed on the calling task and no output escapes.
///
/// Taking `Vec<A>` rather than an arbitrary iterator makes the known-finite
/// precondition structural; an unbounded input cannot be supplied.
///
/// ```rust
/// # let rt = tokio::runtime::Runtime::new().unwrap();
/// let squares = rt.block_on(puremap::map_parallel(vec![1i64, 2, 3, 4, 5], |n| n * n, 2));
/// assert_eq!(squares, vec![1, 4, 9, 16, 25]);
/// ```
pub async fn map_parallel<A, B, F>(items: Vec<A>, f: F, chunk_size: usize) -> Vec<B>
where
    A: Send + 'static,
    B: Send + 'static,
    F: Fn(A) -> B + Send + Sync + 'static,
{
    let total = items.len();
    let chunk_size = chunk_size.max(1);
    let f = Arc::new(f);

    let mut handles = Vec::new();
    let mut items = items.into_iter();
    loop {
        let chunk: Vec<A> = items.by_ref().take(chunk_size).collect();
        if chunk.is_empty() {
            break;
        }
        let f = Arc::clone(&f);
        handles.push(tokio::task::spawn(async move {
            chunk.into_iter().map(|item| f(item)).collect::<Vec<B>>()
        }));
    }
    debug!(
        items = total,
        chunk_size,
        workers = handles.len(),
        "dispatching chunk workers"
    );

    let mut out = Vec::with_capacity(total);
    for joined in future::join_all(handles).await {
        match joined {
            Ok(chunk) => out.extend(chunk),
            Err(err) if err.is_panic() => std::panic::resume_unwind(err.into_panic()),
            Err(err) => unreachable!("chunk worker cancelled: {err}"),
        }
    }
    out
}

/// Fallible variant of [`map_parallel`]: the first element failure aborts
/// the whole operation with that element's index, and remaining worker
/// output is discarded unobserved.
pub async fn try_map_parallel<A, B, E, F>(
    items: Vec<A>,
    f: F,
    chunk_size: usize,
) -> Result<Vec<B>, MapError<E>>
where
    A: Send + 'static,
    B: Send + 'static,
    E: Send + 'static,
    F: Fn(A) -> Result<B, E> + Send + Sync + 'static,
{
    let total = items.len();
    let chunk_size = chunk_size.max(1);
    let f = Arc::new(f);

    let mut handles = Vec::new();
    let mut items = items.into_iter();
    let mut offset = 0;
    loop {
        let chunk: Vec<A> = items.by_ref().take(chunk_size).collect();
        if chunk.is_empty() {
            break;
        }
        let base = offset;
        offset += chunk.len();
        let f = Arc::clone(&f);
        handles.push(tokio::task::spawn(async move {
            let mut out = Vec::with_capacity(chunk.len());
            for (i, item) in chunk.into_iter().enumerate() {
                let value = f(item).map_err(|source| MapError::Element {
                    index: base + i,
                    source,
                })?;
                out.push(value);
            }
            Ok::<_, MapError<E>>(out)
        }));
    }
    debug!(
        items = total,
        chunk_size,
        workers = handles.len(),
        "dispatching chunk workers"
    );

    let mut out = Vec::with_capacity(total);
    for joined in future::join_all(handles).await {
        out.extend(joined??);
    }
    Ok(out)
}

/// Granularity heuristic: divide the input evenly over the available
/// hardware parallelism. Always at least 1.
pub fn auto_chunk_size(len: usize) -> usize {
    let workers = std::thread::available_parallelism().map_or(1, NonZeroUsize::get);
    len.div_ceil(workers).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn double(n: i64) -> i64 {
        n * 2
    }

    #[tokio::test]
    async fn empty_input_yields_empty_output() {
        let out = map_parallel(Vec::<i64>::new(), double, 4).await;
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn oversized_chunks_degenerate_to_one_worker() {
        let out = map_parallel(vec![1, 2, 3], double, 100).await;
        assert_eq!(out, vec![2, 4, 6]);
    }

    #[tokio::test]
    async fn zero_chunk_size_is_treated_as_one() {
        let out = map_parallel(vec![1, 2, 3], double, 0).await;
        assert_eq!(out, vec![2, 4, 6]);
    }

    #[tokio::test]
    async fn output_order_matches_input_order() {
        let items: Vec<usize> = (0..103).collect();
        let out = map_parallel(items.clone(), |n| n, 7).await;
        assert_eq!(out, items);
    }

    #[tokio::test]
    async fn first_failure_wins_and_names_its_index() {
        let result = try_map_parallel(
            vec![1i64, 2, -3, 4, -5],
            |n| if n < 0 { Err("negative") } else { Ok(n) },
            2,
        )
        .await;
        match result {
            Err(MapError::Element { index, source }) => {
                assert_eq!(index, 2);
                assert_eq!(source, "negative");
            }
            other => panic!("expected an element failure, got {other:?}"),
        }
    }

    #[test]
    fn sequential_failure_reports_index_and_stops() {
        let mut calls = 0;
        let result = try_map_sequential(vec![1i64, -2, 3], |n| {
            calls += 1;
            if n < 0 {
                Err("negative")
            } else {
                Ok(n)
            }
        });
        assert!(matches!(result, Err(MapError::Element { index: 1, .. })));
        assert_eq!(calls, 2);
    }

    #[test]
    fn auto_chunk_size_is_positive_and_covers_input() {
        for len in [0usize, 1, 7, 64, 1000] {
            let chunk = auto_chunk_size(len);
            assert!(chunk >= 1);
            assert!(chunk * len.div_ceil(chunk) >= len);
        }
    }
}
