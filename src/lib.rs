//! Численное решение одномерного уравнения Курамото–Сивашинского
//!
//! u_t + u u_x + u_xx + u_xxxx = 0 на периодической области [0, 2 pi L):
//! фурье-спектральная дискретизация по пространству и схема ETDRK4 по
//! времени с коэффициентами через контурные средние (Kassam, Trefethen 2005).
//!
//! ```no_run
//! use rks::{InitialCondition, KsParameters, KuramotoSivashinsky, NoCorrection};
//!
//! let params = KsParameters::default();
//! let mut ks = KuramotoSivashinsky::with_initial_condition(
//!     params,
//!     InitialCondition::KassamTrefethen,
//! )
//! .unwrap();
//! let status = ks.run(NoCorrection).unwrap();
//! assert!(status.is_completed());
//! let uu = ks.physical_time_series();
//! assert_eq!(uu.len(), 601);
//! ```
pub mod common;
pub mod config;
pub mod dim1;
pub mod error;
pub mod ks;
pub mod macros;
pub mod parameters;
pub mod traits;

pub use common::run_status::RunStatus;
pub use common::tspace::{Duration, Tspace};
pub use config::{C, F};
pub use dim1::initial_condition::InitialCondition;
pub use dim1::space_time::SpaceTime;
pub use error::KsError;
pub use ks::KuramotoSivashinsky;
pub use parameters::KsParameters;
pub use traits::etdrk4::{Correction, CorrectionFn, NoCorrection};

#[cfg(test)]
mod tests;
