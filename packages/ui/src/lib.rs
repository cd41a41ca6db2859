//! This crate contains all shared UI for the workspace.

pub mod motion;

mod anchor;
pub use anchor::AnchorRegistry;

mod reveal;
pub use reveal::{RevealState, TileReveal};

mod session;
pub use session::{use_session, SessionBootstrap, SessionSignal};

mod navigation;
pub use navigation::Destination;

mod steps;
pub use steps::{Step, STEPS, STEPS_ANCHOR};

mod hero;
pub use hero::HeroPage;

mod footer;
pub use footer::{Footer, FOOTER_LINES};

mod theme;
pub use theme::LandingTheme;
