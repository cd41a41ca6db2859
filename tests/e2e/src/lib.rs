//! Browser end-to-end harness: spawns the web server and drives it with
//! headless Chrome.

pub mod browser;
pub mod test_server;
