pub mod badge;
pub mod button;
pub mod card;
pub mod progress;

pub use badge::*;
pub use button::*;
pub use card::*;
pub use progress::*;
