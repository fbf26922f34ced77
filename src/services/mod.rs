//! Service layer for onboard-cli
//!
//! The service layer holds the decision logic of the sign-up flow: pure
//! field validators and password rules, and the wizard state machine that
//! the TUI drives.

pub mod signup;
pub mod validation;

pub use signup::{FlowCommand, SignupFlow};
pub use validation::{FieldErrors, PasswordRules};
