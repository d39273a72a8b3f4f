//! Terminal host for the taskboard core: executes requests with ureq and
//! renders the page as text.

pub mod app;
pub mod render;
pub mod transport;

pub use app::App;
pub use transport::{Transport, UreqTransport};
