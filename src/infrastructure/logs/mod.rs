pub mod system_log_adapter;
