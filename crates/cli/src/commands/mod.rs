pub mod doctor;
pub mod graph;
pub mod init;
pub mod knowledge;
pub mod serve;
pub mod show;
