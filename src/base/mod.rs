mod charset;
mod config;
mod currency;
mod entry;
pub mod fs;
pub mod ledger;
pub mod report;
pub mod table;
pub mod text;
mod tree;
pub mod units;

#[cfg(test)]
pub mod testing;

pub use charset::Charset;
pub use config::Config;
pub use config::Overrides;
pub use config::RenderOptions;
pub use currency::CurrencyFormat;
pub use currency::InvalidFormatTemplate;
pub use currency::PROFILES;
pub use currency::Profile;
pub use entry::Entry;
pub use entry::InvalidEntry;
pub use fs::Fs;
pub use ledger::Ledger;
pub use report::ReportData;
pub use tree::DuplicateCategoryPath;
pub use tree::Tree;
pub use units::Units;
