pub mod collector;
pub mod details;
pub mod meminfo;
pub mod os_release;
pub mod uptime;
