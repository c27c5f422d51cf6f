pub mod crypto;
pub mod db;
pub mod scheduler;
pub mod sms;
