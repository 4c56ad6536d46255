pub mod providers;
pub mod recommendations;
pub mod session;

pub use recommendations::RecommendationClient;
pub use session::{Selection, Session, SessionSnapshot};
