//! Keyset cursor over visits, fetched block by block.
//!
//! The cursor is the last identifier seen. Every round-trip asks for rows
//! with `id > cursor`, never for an offset, so rows deleted or inserted while
//! the scan runs cannot shift it onto a row twice or past a row it has not
//! yet seen. Only one block is held in memory at a time.

use std::sync::Arc;

use futures::stream::{self, BoxStream, StreamExt, TryStreamExt};
use tracing::{debug, info};

use crate::domain::entities::Visit;
use crate::domain::query::BlockQuery;
use crate::domain::repositories::VisitRowStore;
use crate::error::{VisitError, VisitResult};

/// Lazy sequence of visits produced by a bulk scan.
///
/// Nothing is fetched until the stream is polled, and dropping it stops the
/// scan without further round-trips.
pub type VisitStream = BoxStream<'static, VisitResult<Visit>>;

/// Scans every visit matching `first.filter`, ascending by id, starting after
/// `first.after_id`.
///
/// A fetch failure is yielded as the stream's last item. The cursor is not
/// persisted; a caller that wants to resume must track the last id it
/// consumed and start a new scan from there.
pub fn scan_visits<S>(store: Arc<S>, first: BlockQuery) -> VisitStream
where
    S: VisitRowStore + ?Sized + 'static,
{
    stream::try_unfold((store, first, 0_u64), |(store, query, scanned)| async move {
        let visits = store.fetch_block(&query).await?;

        let Some(last_id) = visits.last().map(|visit| visit.id) else {
            info!(
                filter = query.filter.as_str(),
                scanned, "visit scan finished"
            );
            return Ok(None);
        };

        debug!(
            filter = query.filter.as_str(),
            after_id = query.after_id,
            rows = visits.len(),
            last_id,
            "fetched visit block"
        );

        let scanned = scanned + visits.len() as u64;
        let block = stream::iter(visits.into_iter().map(Ok::<_, VisitError>));

        Ok::<_, VisitError>(Some((block, (store, query.after(last_id), scanned))))
    })
    .try_flatten()
    .boxed()
}
