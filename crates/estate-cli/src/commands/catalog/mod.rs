//! Catalog browsing commands.

pub mod list;
pub mod search;
pub mod show;
pub mod types;

pub use list::ListArgs;
pub use search::SearchArgs;
pub use show::ShowArgs;
pub use types::TypesArgs;
