//! Queue state machine operations over the live engine.
//!
//! Every mutation is followed by a read-back. The engine may accept a call
//! and still not apply it, so the returned transition reports what was
//! observed, never what was requested.

use tracing::{debug, warn};

use crate::domain::foundation::DomainError;
use crate::domain::queue::{Deletion, RepeatMode, RepeatModeTransition};
use crate::ports::GuildQueue;

/// Switches the repeat mode and verifies it took effect.
///
/// Requesting the active mode performs no mutation and returns `Unchanged`.
///
/// # Errors
///
/// - `SessionNotFound` if the queue was deleted
/// - `PlaybackEngineError` if the engine refused the call or a read failed
pub async fn set_repeat_mode(
    queue: &dyn GuildQueue,
    target: RepeatMode,
) -> Result<RepeatModeTransition, DomainError> {
    let from = queue.repeat_mode().await?;
    if from == target {
        return Ok(RepeatModeTransition::Unchanged { current: from });
    }

    queue.set_repeat_mode(target).await?;
    let observed = queue.repeat_mode().await?;

    if observed != target {
        warn!(
            from = %from,
            requested = %target,
            observed = %observed,
            "Repeat mode read-back does not match the requested mode."
        );
        return Ok(RepeatModeTransition::Mismatch {
            from,
            requested: target,
            observed,
        });
    }

    debug!(from = %from, to = %target, "Repeat mode changed.");
    Ok(RepeatModeTransition::Applied { from, to: target })
}

/// Deletes the queue, tolerating a queue that is already gone.
///
/// # Errors
///
/// - `PlaybackEngineError` if the engine failed to tear the queue down
pub async fn delete(queue: &dyn GuildQueue) -> Result<Deletion, DomainError> {
    if queue.is_deleted().await? {
        debug!("Queue already deleted.");
        return Ok(Deletion::AlreadyDeleted);
    }
    queue.delete().await?;
    Ok(Deletion::Deleted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{EngineFault, InMemoryGuildQueue};
    use crate::domain::foundation::{ChannelId, ErrorCode, GuildId};
    use proptest::prelude::*;

    fn queue() -> InMemoryGuildQueue {
        InMemoryGuildQueue::new(GuildId::new(1).unwrap(), ChannelId::new(10).unwrap())
    }

    fn any_mode() -> impl Strategy<Value = RepeatMode> {
        prop::sample::select(RepeatMode::ALL.to_vec())
    }

    fn block_on<F: std::future::Future>(future: F) -> F::Output {
        tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap()
            .block_on(future)
    }

    async fn queue_in(mode: RepeatMode) -> InMemoryGuildQueue {
        let queue = queue();
        if mode != RepeatMode::Disabled {
            queue.set_repeat_mode(mode).await.unwrap();
        }
        queue
    }

    #[tokio::test]
    async fn applied_when_engine_honors_the_change() {
        let queue = queue();

        let result = set_repeat_mode(&queue, RepeatMode::QueueRepeat).await.unwrap();

        assert_eq!(
            result,
            RepeatModeTransition::Applied {
                from: RepeatMode::Disabled,
                to: RepeatMode::QueueRepeat
            }
        );
    }

    #[tokio::test]
    async fn mismatch_when_engine_ignores_the_change() {
        let queue = queue();
        queue.inject_fault(EngineFault::IgnoreRepeatMode).await;

        let result = set_repeat_mode(&queue, RepeatMode::TrackRepeat).await.unwrap();

        assert_eq!(
            result,
            RepeatModeTransition::Mismatch {
                from: RepeatMode::Disabled,
                requested: RepeatMode::TrackRepeat,
                observed: RepeatMode::Disabled
            }
        );
    }

    #[tokio::test]
    async fn engine_rejection_propagates() {
        let queue = queue();
        queue.inject_fault(EngineFault::RejectRepeatMode).await;

        let err = set_repeat_mode(&queue, RepeatMode::Autoplay).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::PlaybackEngineError);
    }

    #[tokio::test]
    async fn deleted_queue_rejects_repeat_mode_change() {
        let queue = queue();
        queue.delete().await.unwrap();

        let err = set_repeat_mode(&queue, RepeatMode::Autoplay).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::SessionNotFound);
    }

    #[tokio::test]
    async fn delete_reports_second_call_as_already_deleted() {
        let queue = queue();

        assert_eq!(delete(&queue).await.unwrap(), Deletion::Deleted);
        assert_eq!(delete(&queue).await.unwrap(), Deletion::AlreadyDeleted);
        assert!(queue.is_deleted().await.unwrap());
    }

    proptest! {
        #[test]
        fn repeated_delete_never_fails(times in 1usize..16) {
            let results = block_on(async {
                let queue = queue();
                let mut results = Vec::with_capacity(times);
                for _ in 0..times {
                    results.push(delete(&queue).await.unwrap());
                }
                results
            });

            prop_assert_eq!(results[0], Deletion::Deleted);
            prop_assert!(results[1..].iter().all(|r| *r == Deletion::AlreadyDeleted));
        }

        #[test]
        fn honest_engine_applies_or_leaves_unchanged(current in any_mode(), target in any_mode()) {
            let result = block_on(async {
                let queue = queue_in(current).await;
                let result = set_repeat_mode(&queue, target).await.unwrap();
                (result, queue.repeat_mode().await.unwrap())
            });

            let (transition, after) = result;
            prop_assert_eq!(after, target);
            if current == target {
                prop_assert_eq!(transition, RepeatModeTransition::Unchanged { current });
            } else {
                prop_assert_eq!(transition, RepeatModeTransition::Applied { from: current, to: target });
            }
        }

        #[test]
        fn applied_only_when_read_back_matches(
            current in any_mode(),
            target in any_mode(),
            actual in any_mode(),
        ) {
            let (transition, after) = block_on(async {
                let queue = queue_in(current).await;
                queue.inject_fault(EngineFault::ApplyRepeatMode(actual)).await;
                let transition = set_repeat_mode(&queue, target).await.unwrap();
                (transition, queue.repeat_mode().await.unwrap())
            });

            match transition {
                RepeatModeTransition::Unchanged { current: c } => {
                    prop_assert_eq!(c, target);
                    prop_assert_eq!(after, current);
                }
                RepeatModeTransition::Applied { to, .. } => prop_assert_eq!(to, after),
                RepeatModeTransition::Mismatch { requested, observed, .. } => {
                    prop_assert_eq!(requested, target);
                    prop_assert_eq!(observed, after);
                    prop_assert_ne!(observed, target);
                }
            }
        }
    }
}
