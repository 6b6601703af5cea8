pub mod base_commands;
pub mod calculate_cmd;
pub mod export_cmd;
pub mod init_cmd;
pub mod report_format;
pub mod report_output;
pub mod simulate_cmd;
