//! Built-in rule variants.
//!
//! Each rule implements [`Rule`](crate::foundation::Rule) and is constructed
//! from a [`Conditions`](crate::foundation::Conditions) map. Factory
//! functions cover the common cases:
//!
//! ```rust
//! use fieldcheck::prelude::*;
//!
//! let conditions = Conditions::new().with("min", 3).with("max", 20);
//! let username = length(conditions);
//! let contact = at_least_one_of(vec![Box::new(email()), Box::new(phone_number())]);
//! ```
//!
//! Common policy: null and the empty string pass every rule except
//! [`NotBlank`]. Presence is checked by `NotBlank` alone, so optional fields
//! can carry format rules without becoming required.

pub mod at_least_one_of;
pub mod email;
pub mod length;
pub mod not_blank;
pub mod phone;
pub mod regexp;
pub mod typecheck;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use at_least_one_of::{AtLeastOneOf, at_least_one_of};
pub use email::{Email, email};
pub use length::{Length, length};
pub use not_blank::{NotBlank, not_blank};
pub use phone::{PhoneNumber, phone_number};
pub use regexp::{RegExp, regexp};
pub use typecheck::{Type, type_check};
