//! # craftctl core
//!
//! Management of a locally hosted game server directory:
//! - [`properties`] - the `server.properties` store
//! - [`conf`] / [`icon`] - value coercion for `conf set` and `conf get`
//! - [`version`] - resolving version tags against the remote manifest
//! - [`install`] - downloading a server jar into a directory
//! - [`launcher`] - running the server in the foreground
//! - [`clean`] - removing generated files
//!
//! Every operation takes the server directory explicitly; nothing here
//! changes the process working directory.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]

pub mod clean;
pub mod conf;
pub mod defaults;
pub mod error;
pub mod fetch;
pub mod icon;
pub mod install;
pub mod launcher;
pub mod layout;
pub mod properties;
pub mod settings;
pub mod version;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::clean::{clean, CleanScope};
    pub use crate::conf::ConfChange;
    pub use crate::error::{CraftError, Result};
    pub use crate::fetch::{Fetch, HttpClient};
    pub use crate::icon::{IconOutcome, IconSource};
    pub use crate::install::{create, CreateReport};
    pub use crate::launcher::LaunchOptions;
    pub use crate::layout::ServerDir;
    pub use crate::properties::{normalize_key, Properties, PropertyStore, SetOutcome};
    pub use crate::settings::Settings;
    pub use crate::version::{VersionDescriptor, VersionRequest, VersionResolver};
}
