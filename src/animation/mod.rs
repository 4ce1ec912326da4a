//! Timer-driven state machines behind the animated components.
//!
//! # Module Components
//!
//! - [`scheduler`] - Cooperative timer table with a virtual clock
//! - [`lifecycle`] - Four-state open/close animation of the artifact panel
//! - [`typewriter`] - Character-by-character reveal, single or staggered
//! - [`ticker`] - Rotating status phrase and elapsed seconds
//! - [`selection`] - Option selection with delayed close request
//!
//! None of these render anything. Each one registers its timers with the
//! [`Scheduler`], remembers their ids, and clears every one of them when its
//! owning mode is left or the component is torn down.

pub mod lifecycle;
pub mod scheduler;
pub mod selection;
pub mod ticker;
pub mod typewriter;

pub use lifecycle::{PanelLifecycle, PanelState};
pub use scheduler::{Fired, Scheduler, TimerEvent, TimerId};
pub use selection::SelectionRegistry;
pub use ticker::StatusTicker;
pub use typewriter::{RevealTarget, Typewriter};
