//! Theme derivation.
//!
//! A [`UiTheme`] maps every semantic UI role (backgrounds, text, alerts and
//! buttons) to a [`ThemeColor`], derived from a palette while keeping the
//! requested contrast level between text and background.

mod schema;
pub use schema::*;

pub(crate) mod deserializers;

mod derive;
pub use derive::*;

mod ext;
pub use ext::*;

mod kinds;
pub use kinds::*;
