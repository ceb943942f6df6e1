//! Components that make up the affirmation list.

mod affirmation_card;
mod affirmation_list;
mod description;
mod expand_button;

pub use affirmation_card::*;
pub use affirmation_list::*;
pub use description::*;
pub use expand_button::*;
