//! # Calorie burnt
//!
//! Distance, mean speed and calories of walking or running training
//! calculated from number of steps.
//!
//! Training record format is `<steps>,<activity>,<duration>`, e.g. `1000,бег,30m`.
//! See [`activity_duration`] for duration format.
//!
//! Report:
//!
//! ```notrust
//! Тип тренировки: бег
//! Длительность: 0.50 ч.
//! Дистанция: 78.75 км.
//! Скорость: 157.50 км/ч
//! Сожгли калорий: 5512.50
//! ```

mod activity;
mod error;
#[cfg(feature = "logger")]
pub mod logger;
mod metrics;
mod record;
mod report;

pub use self::{activity::*, error::*, metrics::*, record::*, report::*};
