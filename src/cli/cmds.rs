pub mod cats;
pub mod init;
pub mod report;
pub mod root;
pub mod table;
