pub mod init;
pub mod make;
pub mod resolve;
