//! # dfakit-modthree
//!
//! Binary modulo-three classifier built on `dfakit-core`.
//!
//! ```
//! use dfakit_modthree::ModThree;
//!
//! let mut fsm = ModThree::new().unwrap();
//! assert_eq!(fsm.mod_three("1101").unwrap(), 1);
//! assert_eq!(fsm.mod_three("1110").unwrap(), 2);
//! assert!(fsm.mod_three("10a1").is_err());
//! ```

pub mod classifier;
pub mod error;
pub mod state;

pub use classifier::{mod_three_config, parse_bits, ModThree};
pub use error::ModThreeError;
pub use state::{Bit, ModThreeState};
