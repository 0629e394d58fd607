mod areas;
mod events;
mod registrations;
mod views;

pub use areas::*;
pub use events::*;
pub use registrations::*;
pub use views::*;
