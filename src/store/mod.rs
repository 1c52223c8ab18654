//! State container and result intake.
//!
//! # Architecture
//!
//! ```text
//! producers ──► ScreenSession ──► StateMachine ──► subscribers
//!  (any task)    (one consumer     (lock + reduce    (slice +
//!                 task, ordered)    + publish)        dedupe)
//! ```
//!
//! [`StateMachine`] holds the state for one screen and serializes all
//! writes through its lock. [`ScreenSession`] adds a queue in front of it
//! so producers never block on the lock and results are folded strictly
//! in arrival order.

mod machine;
mod session;

pub use machine::{SliceSubscriber, StateMachine, SubscriptionId};
pub use session::ScreenSession;
