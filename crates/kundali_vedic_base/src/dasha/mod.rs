//! Vimshottari dasha (planetary period) calculations.
//!
//! The Moon's nakshatra at birth selects the first Mahadasha lord and how
//! much of that lord's period has already run. Mahadashas then follow the
//! fixed nine-lord cycle end to end, and each is divided into nine
//! Antardashas starting from its own lord.

pub mod balance;
pub mod subperiod;
pub mod types;
pub mod vimshottari;

pub use balance::nakshatra_birth_balance;
pub use subperiod::{proportional_children, snap_last_child_end};
pub use types::{CurrentDasha, DAYS_PER_YEAR, DashaLevel, DashaPeriod, DashaTimeline, Mahadasha};
pub use vimshottari::{VIMSHOTTARI_SEQUENCE, VimshottariConfig, vimshottari_timeline};
