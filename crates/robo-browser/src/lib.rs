//! robo Browser
//!
//! A scriptable browser without a screen: open pages, follow links, fill
//! in and submit forms, and move through history.
//!
//! ```ignore
//! let mut browser = RoboBrowser::new(BrowserConfig::default())?;
//! browser.open("http://example.com/")?;
//! let mut form = browser.get_form(Some("search"))?.ok_or("no form")?;
//! form.set_field_value("q", "rust")?;
//! browser.submit_form(&form, None)?;
//! ```

mod browser;
mod config;
mod error;
mod history;
mod links;
mod page;

pub use browser::RoboBrowser;
pub use config::{BrowserConfig, HistoryLimit};
pub use error::{BrowserError, BrowserResult};
pub use history::History;
pub use links::{Link, LinkQuery, Pattern, find_links};
pub use page::Page;

pub use robo_forms as forms;
pub use robo_net as net;
