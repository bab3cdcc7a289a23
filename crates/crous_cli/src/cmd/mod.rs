/// JSON-to-frame conversion command.
pub mod encode;
/// Frame header and statistics command.
pub mod info;
/// Value tree rendering command.
pub mod show;
