use colored::Colorize;

pub mod catalog;
pub mod error;
pub mod model;
pub mod query;
pub mod report;
pub mod storage;
pub mod store;
pub mod topology;
pub mod translate;

pub use error::{StorageError, StoreError, TopologyError};
pub use model::{Region, RegionType};
pub use storage::{FileStorage, MemoryStorage, SnapshotStorage, SqliteStorage};
pub use store::{StoreState, VisitedStore};

pub fn print_banner() {
    let banner = r#"
 _      __           ____
| | /| / /__ ___ __ / __/__ ________ ____
| |/ |/ / _ `/ // // _// _ `/ __/ -_) __/
|__/|__/\_,_/\_, //_/  \_,_/_/  \__/_/
            /___/
"#;
    println!("{}", banner.bright_cyan().bold());
    println!(
        "{}\n",
        format!("  v{} - where have you been?", env!("CARGO_PKG_VERSION")).bright_black()
    );
}
